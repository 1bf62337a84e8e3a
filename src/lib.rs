//! # Num Kernels
//!
//! Naive numeric micro-kernels used as benchmark targets: a Sieve of
//! Eratosthenes and a composite trapezoidal integrator for `f(x) = x²`.
//!
//! ## Features
//!
//! - **Prime Sieve**: every prime up to a bound, as a list or a count
//! - **Trapezoid Integrator**: reproducible accumulation order, generic integrand
//! - **Typed Failures**: invalid arguments and allocation failures are errors,
//!   never NaN, infinity or an empty list
//!
//! ## Quick Start
//!
//! ```rust
//! use num_kernels::{sieve, trapezoid};
//!
//! fn main() -> Result<(), num_kernels::Error> {
//!     assert_eq!(sieve(30)?, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//!
//!     let area = trapezoid(0.0, 1.0, 1000)?;
//!     assert!((area - 1.0 / 3.0).abs() < 1e-4);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod commands;
pub mod config;
pub mod error;
pub mod kernels;
pub mod telemetry;

// Re-export main types for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use kernels::{exact_square_integral, integrate, prime_count, sieve, sieve_into, trapezoid};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
