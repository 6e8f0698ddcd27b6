//! Example graphs compiled into the library, for docs, tests and benchmarks.

pub mod star_wars;
