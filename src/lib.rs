// SPDX-License-Identifier: MPL-2.0
//! `iced_stories` is a stories viewer built with the Iced GUI framework.
//!
//! It fetches a list of users and their stories, shows them as an avatar rail
//! and a "recent stories" grid, and plays a user's stories as a timed
//! slideshow that continues across users. Strings are localized with Fluent
//! and preferences come from a TOML settings file.

#![doc(html_root_url = "https://docs.rs/iced_stories/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod source;
pub mod ui;
