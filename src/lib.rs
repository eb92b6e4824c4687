pub mod api;
pub mod errors;
pub mod layout;
pub mod materialize;
mod report;
pub mod tree;
