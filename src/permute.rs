//! Backtracking enumeration of every permutation of a letter set.
//!
//! # Why the output comes out sorted
//!
//! The letters are sorted by code point before the search starts. The search
//! then fills positions left to right, always trying unused letters in index
//! order. Two permutations first differ at some position `k`; the one placed
//! there earlier in the loop has the smaller letter, so it is also emitted
//! earlier. No sort of the results is needed.
//!
//! Rust compares `String`s byte-wise, and UTF-8 preserves code-point order,
//! so the emitted order is also `Ord` order for `String`.
//!
//! # Working state
//!
//! One call owns a used-mask and a prefix buffer. Each recursive step marks a
//! letter, pushes it, recurses, then pops and unmarks it, so siblings share
//! the same buffers without reallocating. Both are dropped when the call
//! returns; nothing is shared between calls.

/// Upper bound on the result pre-allocation. Past this the `Vec` grows as
/// usual; `n` itself is never bounded here.
pub const MAX_PRESIZE: usize = 1 << 16;

/// `n!`, or `None` if it does not fit in a `usize`.
pub fn permutation_count(n: usize) -> Option<usize> {
    (2..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

/// How many result slots to reserve up front for `n` letters.
pub fn capacity_hint(n: usize) -> usize {
    permutation_count(n).map_or(MAX_PRESIZE, |count| count.min(MAX_PRESIZE))
}

/// Every permutation of `letters`, in lexicographic order.
///
/// Expects already-validated input (distinct letters, non-empty). With a
/// repeated letter the output would contain duplicates.
pub fn permutations(letters: &str) -> Vec<String> {
    let mut sorted: Vec<char> = letters.chars().collect();
    sorted.sort_unstable();

    let mut used = vec![false; sorted.len()];
    let mut prefix = String::with_capacity(letters.len());
    let mut result = Vec::with_capacity(capacity_hint(sorted.len()));

    backtrack(&sorted, &mut used, &mut prefix, 0, &mut result);
    result
}

fn backtrack(
    letters: &[char],
    used: &mut [bool],
    prefix: &mut String,
    depth: usize,
    result: &mut Vec<String>,
) {
    if depth == letters.len() {
        result.push(prefix.clone());
        return;
    }
    for (i, &c) in letters.iter().enumerate() {
        if used[i] {
            continue;
        }
        used[i] = true;
        prefix.push(c);
        backtrack(letters, used, prefix, depth + 1, result);
        prefix.pop();
        used[i] = false;
    }
}
