// QuoteDeck - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "QuoteDeck";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Dataset schema
// =============================================================================

/// Fixed number of logical columns in every row.
pub const FIELD_COUNT: usize = 10;

/// Canonical column names, in source order. A first line whose tab-split
/// fields equal these (trimmed, case-insensitive) is treated as a header.
pub const COLUMNS: [&str; FIELD_COUNT] = [
    "record_id",
    "event_date",
    "event_type",
    "event_title",
    "show_or_host",
    "clip_url",
    "quote_text",
    "tweet_text",
    "tags",
    "status",
];

/// Number of leading fields anchored during spill-merge repair
/// (`record_id` through `clip_url`).
pub const SPILL_PREFIX_FIELDS: usize = 6;

/// Number of trailing fields anchored during spill-merge repair
/// (`tags`, `status`).
pub const SPILL_SUFFIX_FIELDS: usize = 2;

/// Separator between tags within the `tags` field.
pub const TAG_SEPARATOR: char = '|';

// =============================================================================
// Loading limits
// =============================================================================

/// Maximum size of a dataset file in bytes. The whole pipeline is
/// in-memory, so files beyond this are refused rather than read.
pub const MAX_DATASET_FILE_SIZE: u64 = 64 * 1024 * 1024; // 64 MB

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
