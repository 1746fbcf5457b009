//! Folio Benchmark Library
//!
//! Record generators and run settings shared by the criterion benches.

pub mod config;
pub mod data_gen;
