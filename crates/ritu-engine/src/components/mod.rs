pub mod particle;
pub mod profile;
pub mod ripple;
