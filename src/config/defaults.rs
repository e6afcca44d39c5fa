// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Playback**: Story duration, tick cadence and transition delays
//! - **Loading**: Image load timeout and cache bounds
//! - **Source**: Default story list location
//! - **Layout**: List rendering limits

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Time a single story stays on screen before auto-advancing (in milliseconds).
pub const DEFAULT_STORY_DURATION_MS: u64 = 5000;

/// Shortest story duration accepted from the config file (in milliseconds).
pub const MIN_STORY_DURATION_MS: u64 = 1000;

/// Longest story duration accepted from the config file (in milliseconds).
pub const MAX_STORY_DURATION_MS: u64 = 60_000;

/// Interval between progress refreshes (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Fastest progress refresh accepted (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Slowest progress refresh accepted (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 500;

/// Delay between an image becoming ready and playback starting (in milliseconds).
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 100;

/// Upper bound for the settle delay (in milliseconds).
pub const MAX_SETTLE_DELAY_MS: u64 = 1000;

/// Exit animation delay before a closing viewer is torn down (in milliseconds).
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 200;

/// Upper bound for the close delay (in milliseconds).
pub const MAX_CLOSE_DELAY_MS: u64 = 2000;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Time after which a pending story image is considered failed (in seconds).
pub const DEFAULT_IMAGE_LOAD_TIMEOUT_SECS: u64 = 10;

/// Minimum image load timeout (in seconds).
pub const MIN_IMAGE_LOAD_TIMEOUT_SECS: u64 = 1;

/// Maximum image load timeout (in seconds).
pub const MAX_IMAGE_LOAD_TIMEOUT_SECS: u64 = 120;

/// Default number of decoded images kept in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 24;

// ==========================================================================
// Source Defaults
// ==========================================================================

/// Story list location used when neither CLI nor config provides one.
pub const DEFAULT_STORIES_SOURCE: &str = "stories.json";

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Number of users shown in the "recent stories" grid.
pub const RECENT_STORIES_COUNT: usize = 4;
