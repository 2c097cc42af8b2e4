/*! # About
This crate implements a single data structure: a persistent, indexed
vector backed by a bit-partitioned hash-array-mapped trie with a tail
buffer, in the style Clojure popularised for its `PersistentVector`. Every
mutating operation (`push`, `set`, `pop`) returns a new logical vector
while sharing the bulk of its interior nodes with the vector it was
derived from, so a long derivation chain costs `O(log n)` time and
`O(log n)` freshly allocated nodes per step rather than an `O(n)` copy.

# Vector
- [`pvec::PVec`]: the public vector type. Supports positional access
(`get`/`Index`), append (`push`), positional update (`set`/`update`),
last-element removal (`pop`), bulk construction (`from_sequence`/
`FromIterator`/`From<Vec<T>>`), slicing (`slice`), and iteration (`iter`/
`IntoIterator`), plus `Display` rendering as `PersistentVector[...]`.

See [`pvec`] for the full design writeup, including the trie's internal
node shape and the path-copying discipline that keeps derived vectors
cheap.
*/

pub mod pvec;

pub use pvec::{Error, PVec};
