// Simcheck: pairwise document similarity screening.
//
// This is the library root. Each module corresponds to a stage of the
// similarity pipeline: extraction, vectorization and scoring, risk labels and
// summary statistics, and the report/terminal collaborators that consume them.

pub mod config;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod samples;
pub mod scoring;
pub mod similarity;
