// Centralized caps to harden ingestion and interaction against runaway input

// Dataset
pub const MAX_DATASET_POINTS: usize = 5_000_000;

// Lasso vertices per session; a drag at 1 kHz for ~3 minutes
pub const MAX_LASSO_VERTICES: usize = 200_000;

// Debounce interval bounds (ms)
pub const MIN_DEBOUNCE_MS: u32 = 0;
pub const MAX_DEBOUNCE_MS: u32 = 10_000;
pub const DEFAULT_DEBOUNCE_MS: u32 = 25;

// Fixed precision used by the tabular listing
pub const TABLE_DECIMALS: usize = 3;

#[inline]
pub fn in_debounce_bounds(ms: u32) -> bool {
    (MIN_DEBOUNCE_MS..=MAX_DEBOUNCE_MS).contains(&ms)
}
