pub mod alphabet;
pub mod ciphers;
pub mod config;
pub mod error;
pub mod report;

pub use crate::alphabet::normalize;
pub use crate::ciphers::brute_force::{brute_force_decode, BruteForce, Candidate};
pub use crate::ciphers::{decode, encode, shift, Direction};
pub use crate::error::{CipherError, Error, Result};
