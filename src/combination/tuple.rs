//! Lexicographic stepping over strictly increasing index tuples
//!
//! A k-tuple over `[0, n)` is valid iff `indices[i] < indices[i + 1]`
//! and the last index is below `n`. Position `i` is bounded above by
//! `n - k + i` and below by `indices[i - 1] + 1` (or `0`).

/// First tuple in lexicographic order: `(0, 1, .., k - 1)`.
pub fn first(k: usize) -> Vec<usize> {
    (0..k).collect()
}

/// Last tuple in lexicographic order: `(n - k, .., n - 1)`.
///
/// `None` when `k > n`.
pub fn last(n: usize, k: usize) -> Option<Vec<usize>> {
    (k <= n).then(|| (n - k..n).collect())
}

/// Whether `indices` is a valid tuple over `[0, n)`.
pub fn is_valid(indices: &[usize], n: usize) -> bool {
    indices.windows(2).all(|pair| pair[0] < pair[1])
        && indices.last().map_or(true, |&last| last < n)
}

/// Whether `indices` is the first tuple of its size.
pub fn is_first(indices: &[usize]) -> bool {
    indices.iter().enumerate().all(|(i, &index)| i == index)
}

/// Step to the lexicographic successor in place.
///
/// Returns `false`, leaving `indices` untouched, when `indices` is the last
/// tuple.
pub fn next(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    if k > n {
        return false;
    }

    // Rightmost position with room to grow
    let Some(pivot) = (0..k).rev().find(|&i| indices[i] < n - k + i) else {
        return false;
    };

    indices[pivot] += 1;
    for i in pivot + 1..k {
        indices[i] = indices[i - 1] + 1;
    }
    true
}

/// Step to the lexicographic predecessor in place.
///
/// Returns `false`, leaving `indices` untouched, when `indices` is the first
/// tuple or has more than `n` positions.
pub fn prev(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    if k > n {
        return false;
    }

    // Rightmost position that can shrink without colliding with its left neighbour
    let Some(pivot) = (0..k).rev().find(|&i| {
        let floor = if i == 0 { 0 } else { indices[i - 1] + 1 };
        indices[i] > floor
    }) else {
        return false;
    };

    indices[pivot] -= 1;
    for (i, index) in indices.iter_mut().enumerate().skip(pivot + 1) {
        *index = n - k + i;
    }
    true
}
