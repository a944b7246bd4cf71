use super::*;

/// Reference hash of one window, computed from scratch.
fn direct(window: &[char]) -> u64 {
    window
        .iter()
        .fold(0, |acc, &c| (acc * BASE + u64::from(c)) % MODULUS)
}

fn assert_matches_direct(text: &str, k: usize) {
    let chars: Vec<char> = text.chars().collect();
    let rolled = hashes(text, k);
    assert_eq!(rolled.len(), chars.len() - k + 1);
    for (i, window) in chars.windows(k).enumerate() {
        assert_eq!(rolled[i], direct(window), "window {i} of {text:?}");
    }
}

#[test]
fn one_hash_per_window() {
    assert_eq!(hashes("abcdef", 3).len(), 4);
    assert_eq!(hashes("abc", 3).len(), 1);
}

#[test]
fn empty_when_k_is_zero_or_too_large() {
    assert!(hashes("abc", 0).is_empty());
    assert!(hashes("abc", 4).is_empty());
    assert!(hashes("", 1).is_empty());
}

#[test]
fn small_windows_are_exact() {
    assert_eq!(hashes("ab", 2), vec![97 * 256 + 98]);
    assert_eq!(hashes("a", 1), vec![97]);
}

#[test]
fn rolling_update_matches_direct_computation() {
    assert_matches_direct("the quick brown fox jumps over the lazy dog", 4);
    assert_matches_direct("int var = num;\nreturn var;", 5);
    assert_matches_direct("abcdefghijklmnopqrstuvwxyz", 26);
}

#[test]
fn wraps_modulus_on_long_windows() {
    // 8+ chars of BASE 256 exceed the modulus, exercising the reduction.
    let text = "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz";
    assert_matches_direct(text, 12);
    assert!(hashes(text, 12).iter().all(|&h| h < MODULUS));
}

#[test]
fn non_ascii_characters() {
    assert_matches_direct("héllo wörld ✓ \u{10FFFF}\u{10FFFF}\u{10FFFF}", 3);
}

#[test]
fn equal_windows_hash_equal() {
    let h = hashes("abcabc", 3);
    assert_eq!(h[0], h[3]);
    assert_ne!(h[0], h[1]);
}

#[test]
fn unique_hashes_dedups() {
    assert_eq!(unique_hashes("aaaa", 2).len(), 1);
    assert_eq!(unique_hashes("abcabc", 3).len(), 3);
    assert!(unique_hashes("ab", 3).is_empty());
}
