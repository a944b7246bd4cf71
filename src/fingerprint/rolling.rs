/// Polynomial rolling hash over characters.
///
/// With `BASE = 256` and a prime modulus just above 10^9, every
/// intermediate value (`hash * BASE + char`, `char * BASE^(k-1)`) stays well
/// under `u64::MAX`: hashes are below 2^30 and chars below 2^21.
use std::collections::HashSet;

pub const BASE: u64 = 256;
pub const MODULUS: u64 = 1_000_000_007;

/// Hash every window of `k` characters, left to right.
///
/// The result has `len - k + 1` entries, or none when `k == 0` or the text
/// is shorter than `k`.
pub fn hashes(text: &str, k: usize) -> Vec<u64> {
    let chars: Vec<u64> = text.chars().map(u64::from).collect();
    if k == 0 || chars.len() < k {
        return Vec::new();
    }

    // Weight of the outgoing character: BASE^(k-1) mod MODULUS.
    let high = (1..k).fold(1, |acc, _| acc * BASE % MODULUS);

    let mut hash = chars[..k]
        .iter()
        .fold(0, |acc, &c| (acc * BASE + c) % MODULUS);
    let mut out = Vec::with_capacity(chars.len() - k + 1);
    out.push(hash);

    for i in k..chars.len() {
        let outgoing = chars[i - k] * high % MODULUS;
        hash = (hash % MODULUS + MODULUS - outgoing) % MODULUS;
        hash = (hash * BASE + chars[i]) % MODULUS;
        out.push(hash);
    }
    out
}

/// Distinct window hashes of `text`.
pub fn unique_hashes(text: &str, k: usize) -> HashSet<u64> {
    hashes(text, k).into_iter().collect()
}

#[cfg(test)]
#[path = "rolling_test.rs"]
mod tests;
