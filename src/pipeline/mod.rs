// Pipeline — corpus loading and the end-to-end similarity check.

pub mod check;
pub mod loader;
