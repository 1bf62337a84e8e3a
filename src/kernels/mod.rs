//! Numeric micro-kernels.
//!
//! Each kernel is a pure, synchronous function: no shared state, no I/O,
//! and all working memory is released before the call returns.

pub mod sieve;
pub mod trapezoid;

pub use sieve::{prime_count, sieve, sieve_into};
pub use trapezoid::{exact_square_integral, integrate, trapezoid};
