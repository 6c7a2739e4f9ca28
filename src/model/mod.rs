pub mod config;
pub mod geometry;
pub mod numeric;
pub mod scores;
pub mod taxonomy;
