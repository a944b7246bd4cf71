use super::effective_k;
use super::rolling::unique_hashes;
use crate::error::SimilarityError;

/// Jaccard similarity of the k-gram hash sets of two canonical texts.
///
/// Two empty texts are identical by convention (1.0); one empty text
/// against a non-empty one scores 0.0. `k` larger than the shorter text is
/// clamped to its length. Fails only for `k == 0`.
pub fn similarity(text1: &str, text2: &str, k: usize) -> Result<f64, SimilarityError> {
    if k == 0 {
        return Err(SimilarityError::zero_k());
    }
    match (text1.is_empty(), text2.is_empty()) {
        (true, true) => return Ok(1.0),
        (true, false) | (false, true) => return Ok(0.0),
        (false, false) => {}
    }

    let k = effective_k(k, text1, text2);
    let set1 = unique_hashes(text1, k);
    let set2 = unique_hashes(text2, k);

    let intersection = set1.intersection(&set2).count();
    let union = set1.len() + set2.len() - intersection;
    if union == 0 {
        return Ok(1.0);
    }
    Ok(intersection as f64 / union as f64)
}

#[cfg(test)]
#[path = "similarity_test.rs"]
mod tests;
