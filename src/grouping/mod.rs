// Greedy phrase grouping: keyword extraction and the cluster assignment loop.

pub mod engine;
pub mod keywords;
