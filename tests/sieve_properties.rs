use num_kernels::{prime_count, sieve, sieve_into};
use proptest::prelude::*;

fn is_prime_by_trial_division(k: usize) -> bool {
    if k < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= k {
        if k % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

#[test]
fn known_prime_lists() {
    let cases: [(usize, &[usize]); 5] = [
        (0, &[]),
        (1, &[]),
        (2, &[2]),
        (10, &[2, 3, 5, 7]),
        (30, &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]),
    ];

    for (n, expected) in cases {
        assert_eq!(sieve(n).unwrap(), expected, "sieve({})", n);
    }
}

#[test]
fn known_prime_counts() {
    for (n, expected) in [(10, 4), (100, 25), (10_000, 1_229), (100_000, 9_592)] {
        assert_eq!(prime_count(n).unwrap(), expected, "pi({})", n);
        assert_eq!(sieve(n).unwrap().len(), expected, "len(sieve({}))", n);
    }
}

#[test]
fn repeated_calls_are_identical() {
    let first = sieve(50_000).unwrap();
    let second = sieve(50_000).unwrap();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn sieve_matches_trial_division(n in 0usize..5_000) {
        let primes = sieve(n).unwrap();

        prop_assert!(primes.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(primes.iter().all(|&p| p <= n));
        prop_assert!(primes.iter().all(|&p| is_prime_by_trial_division(p)));

        let expected: Vec<usize> = (0..=n).filter(|&k| is_prime_by_trial_division(k)).collect();
        prop_assert_eq!(primes, expected);
    }

    #[test]
    fn count_form_agrees_with_list_form(n in 0usize..20_000) {
        let mut out = Vec::new();
        let count = sieve_into(n, &mut out).unwrap();

        prop_assert_eq!(count, out.len());
        prop_assert_eq!(count, prime_count(n).unwrap());
        prop_assert_eq!(out, sieve(n).unwrap());
    }
}
