// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::{Generation, StoryUser};
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::{stories_list, story_viewer};
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the startup story list fetch.
    StoriesLoaded(Result<Vec<StoryUser>, Error>),
    /// Result of an image load started through the image cache.
    ImageLoaded {
        uri: String,
        result: Result<ImageData, Error>,
    },
    List(stories_list::Message),
    Viewer(story_viewer::Message),
    /// Viewer timer tick, tagged with the timer generation it was armed for.
    ViewerTick {
        generation: Generation,
        at: Instant,
    },
    /// Redraw tick while the story list is loading.
    Tick(Instant),
    Navigate(Screen),
    WindowResized(iced::Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional story list location (URL or file path).
    /// Takes precedence over `ICED_STORIES_SOURCE` and the config file.
    pub source: Option<String>,
    /// Optional starting route (e.g. `/demo`).
    pub route: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_STORIES_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
