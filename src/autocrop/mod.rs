pub mod boundary;
pub mod bounds;
pub mod config;
pub mod energy;
pub mod region;
