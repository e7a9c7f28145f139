pub mod datetime;
pub mod stats;
pub mod text;
