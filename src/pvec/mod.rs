/*! A persistent indexed vector: an immutable, ordered collection supporting
positional access, append, positional update, last-element removal, bulk
construction, slicing, and iteration, where every mutating operation
returns a new logical vector while sharing the bulk of its storage with
its predecessor.

# About
This is a from-scratch Rust rendering of the bit-partitioned
hash-array-mapped trie with tail buffer that Clojure popularised for its
`PersistentVector`. The hard part (branching arithmetic, tail
promotion/demotion on append and pop, and the path-copying discipline
that keeps every derived vector's untouched subtrees shared with its
ancestor) lives in [`node`]; [`PVec`] itself is a thin four-field header.

# Design
Four pieces, leaves first:
- [`node::Node`]: a tagged leaf-or-branch trie node, never exposed across
  the module's public boundary.
- [`PVec`]: the public vector value, a (possibly absent) tree root, a
  1..W element tail buffer, a length, and the tree's depth in bits.
- The trie operations on [`Node`](node::Node) (indexed read, append,
  update, pop, bulk build) that do the actual path-copying.
- [`iter::Iter`] and the [`std::fmt::Display`] impl, the read-only
  adapters over any vector value.

# Example
```
use pvec::PVec;

let v: PVec<i32> = (0..40).collect();
assert_eq!(v.len(), 40);
assert_eq!(v[39], 39);

let w = v.set(0, 100).unwrap();
assert_eq!(w[0], 100);
assert_eq!(v[0], 0); // v is untouched: w shares v's trie except the one path to index 0

println!("{w}");
```
*/

mod error;
mod iter;
mod node;
mod vector;

pub use error::Error;
pub use iter::Iter;
pub use vector::PVec;
