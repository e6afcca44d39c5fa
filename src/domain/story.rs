// SPDX-License-Identifier: MPL-2.0
//! Story data as delivered by the story source.
//!
//! Both types are immutable once loaded: the viewer and the list only ever
//! read them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single story.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(String);

/// Identifier of a story author.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(StoryId);
string_id!(UserId);

/// A single timestamped image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    /// Image location: `http(s)://` URL or file path.
    pub image: String,
    /// Human readable age, e.g. `"2h"`. Displayed as-is.
    pub timestamp: String,
}

/// A user together with their ordered stories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryUser {
    pub id: UserId,
    pub username: String,
    /// Avatar location; may be empty, in which case a placeholder is drawn.
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub stories: Vec<Story>,
}

impl StoryUser {
    /// Number of stories this user has.
    #[must_use]
    pub fn story_count(&self) -> usize {
        self.stories.len()
    }

    /// Index of the last story, or `None` when there are no stories.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.stories.len().checked_sub(1)
    }

    /// The story shown as the user's thumbnail.
    #[must_use]
    pub fn first_story(&self) -> Option<&Story> {
        self.stories.first()
    }

    #[must_use]
    pub fn has_avatar(&self) -> bool {
        !self.avatar.trim().is_empty()
    }
}

/// Drops users without stories so every listed user can be opened.
///
/// Order of the remaining users is preserved.
#[must_use]
pub fn retain_playable(users: Vec<StoryUser>) -> Vec<StoryUser> {
    users
        .into_iter()
        .filter(|user| {
            if user.stories.is_empty() {
                log::warn!("Skipping user {} without stories", user.id);
                false
            } else {
                true
            }
        })
        .collect()
}
