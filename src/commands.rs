//! Command handlers behind the `num-kernels` binary.
//!
//! Each handler runs one kernel once and writes its result to `out`, so the
//! binary stays a thin argument parser and write failures surface as
//! [`Error::Io`](crate::Error::Io) instead of a panic.

use crate::config::{Config, TrapezoidConfig};
use crate::{kernels, Result};

use serde_json::json;
use std::io::Write;
use tracing::info;

/// Integration parameters after command-line values are merged over config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapezoidParams {
    /// Lower bound
    pub a: f64,
    /// Upper bound
    pub b: f64,
    /// Number of subintervals
    pub n: usize,
}

impl TrapezoidParams {
    /// Take each value from the command line if given, else from `defaults`.
    pub fn resolve(
        defaults: &TrapezoidConfig,
        a: Option<f64>,
        b: Option<f64>,
        n: Option<usize>,
    ) -> Self {
        Self {
            a: a.unwrap_or(defaults.a),
            b: b.unwrap_or(defaults.b),
            n: n.unwrap_or(defaults.subintervals),
        }
    }
}

/// Sieve up to `n` after checking the configured bound, then write the primes
/// (or only their count).
pub fn run_sieve<W: Write>(
    out: &mut W,
    config: &Config,
    n: usize,
    count_only: bool,
    as_json: bool,
) -> Result<()> {
    config.sieve.check_bound(n)?;

    if count_only {
        let count = kernels::prime_count(n)?;
        info!(bound = n, count, "Counted primes");
        if as_json {
            write_json(out, &json!({ "n": n, "count": count }))?;
        } else {
            writeln!(out, "{}", count)?;
        }
        return Ok(());
    }

    let mut primes = Vec::new();
    let count = kernels::sieve_into(n, &mut primes)?;
    info!(bound = n, count, "Sieved primes");

    if as_json {
        write_json(out, &json!({ "n": n, "count": count, "primes": primes }))?;
    } else {
        for (i, p) in primes.iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            write!(out, "{}", p)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Integrate `x²` with `params` and write the approximation, the exact value
/// and the absolute error.
pub fn run_trapezoid<W: Write>(out: &mut W, params: TrapezoidParams, as_json: bool) -> Result<()> {
    let TrapezoidParams { a, b, n } = params;
    let value = kernels::trapezoid(a, b, n)?;
    let exact = kernels::exact_square_integral(a, b);
    let abs_error = (value - exact).abs();
    info!(a, b, subintervals = n, value, abs_error, "Integrated x^2");

    if as_json {
        write_json(
            out,
            &json!({
                "a": a,
                "b": b,
                "n": n,
                "value": value,
                "exact": exact,
                "abs_error": abs_error
            }),
        )?;
    } else {
        writeln!(out, "integral:  {:.15}", value)?;
        writeln!(out, "exact:     {:.15}", exact)?;
        writeln!(out, "abs error: {:.3e}", abs_error)?;
    }
    Ok(())
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    writeln!(out, "{}", text)?;
    Ok(())
}
