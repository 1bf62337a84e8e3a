//! Sieve of Eratosthenes.
//!
//! Enumerates every prime up to an inclusive bound using a contiguous
//! primality mask that lives only for the duration of one call.

use crate::{Error, Result};

use std::mem::size_of;

/// Per-call primality mask: `flags[i]` is true while `i` is believed prime.
struct PrimalityMask {
    flags: Vec<bool>,
}

impl PrimalityMask {
    /// Allocate and sieve the mask for `0..=bound`.
    fn sieve(bound: usize) -> Result<Self> {
        let len = bound.checked_add(1).ok_or_else(|| {
            Error::resource_exhausted(
                format!("primality mask for bound {} exceeds the address space", bound),
                usize::MAX,
            )
        })?;

        let mut flags = Vec::new();
        flags.try_reserve_exact(len).map_err(|e| {
            Error::resource_exhausted(
                format!("cannot allocate primality mask for bound {}: {}", bound, e),
                len.saturating_mul(size_of::<bool>()),
            )
        })?;
        flags.resize(len, true);

        flags[0] = false;
        if len > 1 {
            flags[1] = false;
        }

        // `p <= bound / p` is `p * p <= bound` without the overflow.
        let mut p = 2;
        while p <= bound / p {
            if flags[p] {
                for k in (p * p..=bound).step_by(p) {
                    flags[k] = false;
                }
            }
            p += 1;
        }

        Ok(Self { flags })
    }

    fn count(&self) -> usize {
        self.flags.iter().filter(|&&is_prime| is_prime).count()
    }

    fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &is_prime)| is_prime.then_some(i))
    }
}

/// Return every prime `<= n` in ascending order.
///
/// `n < 2` yields an empty list. Memory use is `O(n)`; bounding `n` is the
/// caller's job.
///
/// # Errors
///
/// Returns [`Error::ResourceExhausted`] if the primality mask or the output
/// list cannot be allocated.
///
/// # Example
///
/// ```rust
/// use num_kernels::sieve;
///
/// assert_eq!(sieve(10).unwrap(), vec![2, 3, 5, 7]);
/// assert!(sieve(1).unwrap().is_empty());
/// ```
pub fn sieve(n: usize) -> Result<Vec<usize>> {
    let mut primes = Vec::new();
    sieve_into(n, &mut primes)?;
    Ok(primes)
}

/// Fill `out` with every prime `<= n` and return how many were written.
///
/// `out` is cleared first, so its previous contents never leak into the
/// result, and its existing capacity is reused. On success the returned
/// count always equals `out.len()`.
///
/// # Errors
///
/// Returns [`Error::ResourceExhausted`] if an allocation fails. `out` is left
/// empty in that case.
pub fn sieve_into(n: usize, out: &mut Vec<usize>) -> Result<usize> {
    out.clear();
    let mask = PrimalityMask::sieve(n)?;
    let count = mask.count();

    out.try_reserve_exact(count).map_err(|e| {
        Error::resource_exhausted(
            format!("cannot allocate list of {} primes: {}", count, e),
            count.saturating_mul(size_of::<usize>()),
        )
    })?;
    out.extend(mask.primes());

    tracing::debug!(bound = n, primes = count, "sieve complete");
    Ok(count)
}

/// Count the primes `<= n` without materialising them.
///
/// # Errors
///
/// Returns [`Error::ResourceExhausted`] if the primality mask cannot be
/// allocated.
pub fn prime_count(n: usize) -> Result<usize> {
    let count = PrimalityMask::sieve(n)?.count();
    tracing::debug!(bound = n, primes = count, "prime count complete");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_bounds() {
        assert_eq!(sieve(0).unwrap(), Vec::<usize>::new());
        assert_eq!(sieve(1).unwrap(), Vec::<usize>::new());
        assert_eq!(sieve(2).unwrap(), vec![2]);
        assert_eq!(sieve(3).unwrap(), vec![2, 3]);
        assert_eq!(sieve(10).unwrap(), vec![2, 3, 5, 7]);
        assert_eq!(
            sieve(30).unwrap(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_perfect_square_bound() {
        // 49 = 7 * 7 must be struck even though 7 is the last sieving prime.
        let primes = sieve(49).unwrap();
        assert!(!primes.contains(&49));
        assert_eq!(primes.last(), Some(&47));

        let primes = sieve(121).unwrap();
        assert!(!primes.contains(&121));
        assert_eq!(primes.last(), Some(&113));
    }

    #[test]
    fn test_sieve_into_clears_and_counts() {
        let mut out = vec![999, 1000, 1001];
        let count = sieve_into(10, &mut out).unwrap();
        assert_eq!(count, 4);
        assert_eq!(out, vec![2, 3, 5, 7]);

        let count = sieve_into(1, &mut out).unwrap();
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_prime_count() {
        assert_eq!(prime_count(0).unwrap(), 0);
        assert_eq!(prime_count(1).unwrap(), 0);
        assert_eq!(prime_count(2).unwrap(), 1);
        assert_eq!(prime_count(100).unwrap(), 25);
        assert_eq!(prime_count(1_000).unwrap(), 168);
        assert_eq!(prime_count(100_000).unwrap(), 9_592);
    }

    #[test]
    fn test_bound_overflow_is_resource_exhausted() {
        let err = sieve(usize::MAX).unwrap_err();
        assert!(matches!(err, Error::ResourceExhausted { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_oversized_mask_is_resource_exhausted() {
        // Larger than `isize::MAX` bytes, so the reservation is refused
        // without touching the allocator.
        let err = prime_count(usize::MAX / 2).unwrap_err();
        match err {
            Error::ResourceExhausted {
                requested_bytes, ..
            } => assert!(requested_bytes > isize::MAX as usize),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_failed_sieve_into_leaves_output_empty() {
        let mut out = vec![2, 3, 5];
        assert!(sieve_into(usize::MAX, &mut out).is_err());
        assert!(out.is_empty());
    }
}
