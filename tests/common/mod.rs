#![allow(dead_code)]

use combinate::{Combinations, PowerSet, RenderConfig};

/// Render each subset of a walk on its own line.
pub fn render_lines<'a, I, S>(views: I) -> String
where
    I: Iterator<Item = combinate::SubsetView<'a, char, S>>,
    S: combinate::Selection,
{
    let config = RenderConfig::default();
    views
        .map(|view| view.render(&config))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Source-index lists of every subset, front to back.
pub fn power_set_indices<T>(powers: &PowerSet<'_, T>) -> Vec<Vec<usize>> {
    powers
        .iter()
        .map(|view| view.indices().collect())
        .collect()
}

/// Index tuples of every combination, front to back.
pub fn combination_indices<T>(combos: &Combinations<'_, T>) -> Vec<Vec<usize>> {
    combos
        .iter()
        .map(|view| view.indices().collect())
        .collect()
}

/// Letters `A`, `B`, `C`, .. of length `n`.
pub fn letters(n: usize) -> Vec<char> {
    (b'A'..).take(n).map(char::from).collect()
}
