//! Configuration and the simulation clock

pub mod config;
pub mod time;
