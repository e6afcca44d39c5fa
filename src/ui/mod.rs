// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`stories_list`] - Avatar rail and recent stories grid
//! - [`story_viewer`] - Timed full-window story playback
//! - [`pages`] - Home, demo, minimal and not-found pages
//! - [`layout`] - Header and footer around every page
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (avatar)
//! - [`widgets`] - Custom Iced widgets (spinner, story progress bar)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod layout;
pub mod pages;
pub mod stories_list;
pub mod story_viewer;
pub mod styles;
pub mod theming;
pub mod widgets;
