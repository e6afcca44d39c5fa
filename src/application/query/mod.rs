// SPDX-License-Identifier: MPL-2.0
//! Query services over the loaded story list.
//!
//! # Available Services
//!
//! - [`navigation`]: Cross-user story navigation (`StoryNavigator`)

pub mod navigation;

pub use navigation::{NavigationInfo, NavigationOutcome, Session, StoryNavigator};
