// Phrase grouper: cluster noisy free-text phrases by word-level fuzzy matching.
//
// This is the library root. The similarity and grouping modules are the
// core engine; input, config and output are the glue around it that the
// CLI drives.

pub mod config;
pub mod grouping;
pub mod input;
pub mod output;
pub mod similarity;
