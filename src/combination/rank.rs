//! Combinatorial number system
//!
//! Bijection between lexicographic ranks `[0, C(n, k))` and k-tuples over
//! `[0, n)`. Lexicographic rank `r` of tuple `c` satisfies
//! `r = C(n, k) - 1 - sum_i C(n - 1 - c[i], k - i)`, which turns unranking
//! into a greedy combinadic decomposition.

/// Binomial coefficient `C(n, k)`; `None` when it exceeds `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 1..=k {
        // result == C(n - k + i - 1, i - 1) here, so the division is exact
        result = result * (n - k + i) as u128 / i as u128;
        if result > u64::MAX as u128 {
            return None;
        }
    }
    Some(result as u64)
}

/// Lexicographic rank of `indices` among all tuples of its size.
///
/// `None` when `indices` is not a valid tuple over `[0, n)` or when
/// `C(n, k)` overflows.
pub fn rank(n: usize, indices: &[usize]) -> Option<u64> {
    if !super::tuple::is_valid(indices, n) {
        return None;
    }
    let k = indices.len();
    let total = binomial(n, k)?;
    let mut dual = 0u64;
    for (i, &index) in indices.iter().enumerate() {
        dual += binomial(n - 1 - index, k - i)?;
    }
    Some(total - 1 - dual)
}

/// Tuple at lexicographic `rank`; `None` when `rank >= C(n, k)`.
pub fn unrank(n: usize, k: usize, rank: u64) -> Option<Vec<usize>> {
    let total = binomial(n, k)?;
    if rank >= total {
        return None;
    }

    let mut remainder = total - 1 - rank;
    let mut indices = Vec::with_capacity(k);
    let mut ceiling = n;
    for i in 0..k {
        let size = k - i;
        // Largest x below the previous one with C(x, size) <= remainder
        let x = (size - 1..ceiling)
            .rev()
            .find(|&x| binomial(x, size).map_or(false, |count| count <= remainder))?;
        remainder -= binomial(x, size)?;
        indices.push(n - 1 - x);
        ceiling = x;
    }
    Some(indices)
}
