// SPDX-License-Identifier: MPL-2.0
//! Domain layer - story data and playback value objects.
//!
//! Types here hold no UI or I/O state. The only external dependency is
//! `serde` derives, so the story types can be read straight from the wire.
//!
//! # Modules
//!
//! - [`story`]: Story data ([`Story`](story::Story), [`StoryUser`](story::StoryUser))
//! - [`playback`]: Playback value objects ([`Progress`](playback::Progress),
//!   [`Generation`](playback::Generation))

pub mod playback;
pub mod story;

pub use playback::{Generation, Progress};
pub use story::{Story, StoryId, StoryUser, UserId};
