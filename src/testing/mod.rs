#![cfg(test)]
pub use rstest::*;

use rand::{Rng, SeedableRng, rngs::StdRng};

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests; `init_logging` may have won the race
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .try_init();
    });
}

/// Fragments biased towards the constructs the scanners care about, so random
/// inputs hit quotes, comments, indentation and line breaks often.
const FRAGMENTS: &[&str] = &[
    "SELECT", "select", "FROM", "varchar", "count", "ROW_NUMBER()", "ON DELETE CASCADE",
    "col2", "42", "3.14", "1.", "'", "''", "\"", "--", "/*", "*/", "//", "\n", "\n\n",
    "  ", "\t", " ", ",", ";", "(", ")", "<>", "->", "::", "||", "=", "-", "+", "é", "Järgmine",
    "🦀", "\r\n", "id INT", "primary key", "VALUES (1, 'a'),", ");", "x",
];

/// Deterministic pseudo-random text assembled from [`FRAGMENTS`].
pub(crate) fn random_texts(seed: u64, count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.random_range(0..24);
            (0..len)
                .map(|_| FRAGMENTS[rng.random_range(0..FRAGMENTS.len())])
                .collect::<String>()
        })
        .collect()
}
