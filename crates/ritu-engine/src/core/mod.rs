pub mod rng;
pub mod ticker;
