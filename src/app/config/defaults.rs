// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Calendar layout bounds live with their newtypes in
//! [`crate::domain::calendar::newtypes`]; this module only holds the values
//! a fresh configuration starts from.

// ==========================================================================
// Calendar Defaults
// ==========================================================================

/// Date range shown in the card badge of a new session.
pub const DEFAULT_DATE_RANGE: &str = "22-26 May 2025";

// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Base URL flag images are fetched from (`{base}/{code}.png`).
pub const DEFAULT_FLAG_BASE_URL: &str = crate::domain::reference::DEFAULT_FLAG_BASE_URL;

/// Background image looked up next to the configuration, then in the
/// working directory.
pub const DEFAULT_BACKGROUND_IMAGE: &str = "bg.jpg";

/// Timeout for a single flag image request (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Export Defaults
// ==========================================================================

/// File name suggested by the PNG save dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "economic-calendar.png";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Auto-dismiss delay for success/info toasts (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3_000;

/// Auto-dismiss delay for warning toasts (in milliseconds).
pub const WARNING_TOAST_DURATION_MS: u64 = 5_000;

/// Maximum number of toasts visible at once.
pub const MAX_VISIBLE_TOASTS: usize = 3;
