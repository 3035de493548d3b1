//! Number-theory helpers and the per-test-case solver for the "Security Lines" problem.

pub mod bits;
pub mod error;
pub mod interactive;
pub mod io;
pub mod math;
pub mod mod_arith;
pub mod solution;

pub use error::{Error, Result};
