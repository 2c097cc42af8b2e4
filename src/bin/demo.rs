//! Trivial textual demonstrator for [`pvec::PVec`]: not part of the core
//! data structure, just a driver that prints derived vectors to illustrate
//! structural sharing. Mirrors the teacher crate's `example()`-per-module
//! driving style, but pulled into its own binary with real CLI flags since
//! this crate has exactly one structure to demonstrate rather than a dozen.

use clap::Parser;
use pvec::PVec;
use rand::Rng;

/// Print a handful of `PVec` derivations to stdout.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of integers to seed the vector with, pushed one at a time.
    #[arg(short, long, default_value_t = 16)]
    count: usize,

    /// Index to overwrite when demonstrating `set`. Picked at random within
    /// the seeded range when left unset.
    #[arg(short, long)]
    set_index: Option<usize>,

    /// Value to write at `set_index`.
    #[arg(short = 'v', long, default_value_t = -1)]
    set_value: i32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut v: PVec<i32> = PVec::new();
    for i in 0..args.count as i32 {
        v = v.push(i);
        log::debug!("pushed {i}, len now {}", v.len());
    }
    println!("built:   {v}");

    let set_index = args.set_index.unwrap_or_else(|| {
        let mut rng = rand::rng(); // Thread-local RNG
        rng.random_range(0..v.len().max(1))
    });
    log::info!("will set index {set_index} to {}", args.set_value);

    match v.set(set_index, args.set_value) {
        Ok(updated) => {
            println!("set:     {updated}");
            println!("original untouched: {v}");
        }
        Err(err) => eprintln!("could not set index {set_index}: {err}"),
    }

    match v.pop() {
        Ok(popped) => println!("popped:  {popped}"),
        Err(err) => eprintln!("could not pop: {err}"),
    }

    if v.len() >= 2 {
        let hi = v.len() - 1;
        let lo = hi / 2;
        match v.slice(lo, hi) {
            Ok(slice) => println!("slice[{lo}..={hi}]: {slice:?}"),
            Err(err) => eprintln!("could not slice: {err}"),
        }
    }

    // Demonstrates structural sharing: two independent derivations of the
    // same ancestor never observe each other's writes.
    let branch_a = v.set(0, -100).unwrap_or_else(|_| v.clone());
    let branch_b = v.push(999);
    println!("branch a: {branch_a}");
    println!("branch b: {branch_b}");
    println!("ancestor: {v}");
}
