//! Provides functionality for generating graphs for testing and benchmarking.

pub mod erdos_renyi;
