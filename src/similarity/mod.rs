// Word- and phrase-level similarity scoring.

pub mod pairs;
pub mod ratio;
