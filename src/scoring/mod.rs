// Scoring — risk labels per pair and corpus-level summary statistics.

pub mod risk;
pub mod summary;
