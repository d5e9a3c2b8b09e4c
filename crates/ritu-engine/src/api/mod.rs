pub mod environment;
pub mod types;
