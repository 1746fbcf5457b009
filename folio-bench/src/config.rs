//! Benchmark configuration

/// Order in which records reach the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionOrder {
    /// Ascending by title, the order a catalog rebuild uses
    Sorted,
    /// Random order, which keeps the tree shallow on average
    Shuffled,
}

impl std::fmt::Display for InsertionOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsertionOrder::Sorted => write!(f, "sorted"),
            InsertionOrder::Shuffled => write!(f, "shuffled"),
        }
    }
}

/// Configuration for benchmark runs
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Record counts to benchmark
    pub record_counts: Vec<usize>,
    pub orders: Vec<InsertionOrder>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            record_counts: vec![100, 1_000, 5_000],
            orders: vec![InsertionOrder::Sorted, InsertionOrder::Shuffled],
        }
    }
}

impl BenchmarkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quick config with smaller record counts for fast testing
    pub fn quick() -> Self {
        Self {
            record_counts: vec![100, 1_000],
            ..Default::default()
        }
    }
}
