//! Mixed-radix DFT kernel.
//!
//! The engine recurses on the smallest prime factor of the sequence length
//! (Cooley–Tukey decimation in time) and falls back to a direct `O(n²)` DFT
//! once the length is prime. This keeps the transform mathematically exact
//! for arbitrary lengths, trading speed for correctness on lengths with large
//! prime factors.
//!
//! All angles are reduced modulo the sequence length before the sine/cosine
//! evaluation so twiddle accuracy does not degrade for long inputs.

use std::f64::consts::TAU;

use num_complex::Complex64;

/// Smallest prime factor of `n` (`n` itself when prime).
pub(crate) fn smallest_prime_factor(n: usize) -> usize {
    debug_assert!(n >= 2);
    if n % 2 == 0 {
        return 2;
    }
    let mut p = 3;
    while p * p <= n {
        if n % p == 0 {
            return p;
        }
        p += 2;
    }
    n
}

/// Twiddle factor `e^(sign * 2πi * num / n)` with the exponent reduced mod n.
#[inline]
fn twiddle(num: u128, n: usize, sign: f64) -> Complex64 {
    let reduced = (num % n as u128) as f64;
    Complex64::from_polar(1.0, sign * TAU * reduced / n as f64)
}

/// Direct DFT, used for prime lengths.
fn dft_direct(input: &[Complex64], sign: f64) -> Vec<Complex64> {
    let n = input.len();
    let mut out = Vec::with_capacity(n);
    for k in 0..n {
        let mut acc = Complex64::new(0.0, 0.0);
        for (t, &x) in input.iter().enumerate() {
            acc += x * twiddle(k as u128 * t as u128, n, sign);
        }
        out.push(acc);
    }
    out
}

/// Unnormalized DFT of `input` with the given kernel sign.
///
/// `sign = -1` is the forward transform, `sign = +1` the unscaled inverse.
/// The caller applies the `1/n` inverse normalization.
pub(crate) fn transform_unscaled(input: &[Complex64], sign: f64) -> Vec<Complex64> {
    let n = input.len();
    debug_assert!(n > 0, "kernel requires a non-empty input");
    if n == 1 {
        return input.to_vec();
    }

    let p = smallest_prime_factor(n);
    if p == n {
        return dft_direct(input, sign);
    }

    // Decimate into p interleaved sub-sequences of length m and recombine:
    // X[k] = Σ_r e^(sign·2πi·rk/n) · Sub_r[k mod m]
    let m = n / p;
    let subs: Vec<Vec<Complex64>> = (0..p)
        .map(|r| {
            let sub: Vec<Complex64> = input.iter().skip(r).step_by(p).copied().collect();
            transform_unscaled(&sub, sign)
        })
        .collect();

    let mut out = vec![Complex64::new(0.0, 0.0); n];
    for (k, slot) in out.iter_mut().enumerate() {
        let mut acc = Complex64::new(0.0, 0.0);
        for (r, sub) in subs.iter().enumerate() {
            acc += sub[k % m] * twiddle(r as u128 * k as u128, n, sign);
        }
        *slot = acc;
    }
    out
}
