// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded from `assets/i18n/` at build time.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Argument interpolation (`{ $timestamp }`, `{ $version }`)
//! - Missing messages render as `MISSING: <key>` so gaps are visible

pub mod fluent;
