//! Bounds and defaults shared by validation and the settings pages.
//!
//! # Design
//! - Centralize the accepted ranges so validation and UI hints stay
//!   consistent.
//! - Ranges are inclusive on both ends.

/// Fewest receipt copies a print job may produce.
pub const MIN_RECEIPT_COPIES: i32 = 1;
/// Most receipt copies a print job may produce.
pub const MAX_RECEIPT_COPIES: i32 = 5;
/// Shortest permitted idle session timeout, in minutes.
pub const MIN_SESSION_TIMEOUT_MINUTES: i32 = 1;
/// Longest permitted idle session timeout, in minutes (one working day).
pub const MAX_SESSION_TIMEOUT_MINUTES: i32 = 480;
/// Shortest permitted operator PIN.
pub const MIN_PIN_LENGTH: i32 = 4;
/// Longest permitted operator PIN.
pub const MAX_PIN_LENGTH: i32 = 12;
/// Fewest tenders a split settlement may use.
pub const MIN_SPLIT_WAYS: i32 = 2;
/// Most tenders a split settlement may use.
pub const MAX_SPLIT_WAYS: i32 = 8;
/// Largest permitted discount percentage.
pub const MAX_DISCOUNT_PERCENT: f64 = 100.0;
/// Largest permitted card surcharge percentage.
pub const MAX_SURCHARGE_PERCENT: f64 = 25.0;
/// Largest permitted tax rate percentage.
pub const MAX_TAX_RATE_PERCENT: f64 = 100.0;
