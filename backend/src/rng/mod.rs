//! Random selection
//!
//! Uses xorshift64* for fast, seedable random number generation.
//! All randomness in the draft engine goes through this module.

mod bag;
mod xorshift;

pub use bag::ShuffledBag;
pub use xorshift::RngManager;
