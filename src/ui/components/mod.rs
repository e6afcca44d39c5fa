// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared by the stories list and the viewer.
//!
//! # Components
//!
//! - [`avatar`] - User avatar from the image cache, or a lettered
//!   placeholder while it loads (or when the user has none)

pub mod avatar;
