// SPDX-License-Identifier: MPL-2.0
//! Full-window story viewer.
//!
//! [`State`] is the playback state machine (loading, settle delay,
//! progress, pause, timeouts, close delay). The view draws the segmented
//! progress bar, the user header and the story surface, and turns pointer
//! activity on the surface into [`Message`]s.

pub mod clock;
pub mod input;
pub mod state;
mod view;

pub use input::key_command;
pub use state::{Effect, Message, Phase, State};

use crate::domain::StoryUser;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use iced::Element;
use std::time::Instant;

/// Contextual data needed to render the viewer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub user: &'a StoryUser,
    pub story_index: usize,
    pub images: &'a ImageCache,
    /// Width of the story surface, used to split it into halves.
    pub surface_width: f32,
    pub now: Instant,
}

impl State {
    /// Render the viewer over the current page.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::render(self, ctx)
    }
}
