// SPDX-License-Identifier: MPL-2.0
//! Story navigation across users.
//!
//! [`StoryNavigator`] owns the fetched user list and the optional viewing
//! session. Ordering is the order of users in the fetched list; stories are
//! walked user by user:
//!
//! - `next()` advances within the current user, then jumps to the first
//!   story of the following user, and reports [`NavigationOutcome::Ended`]
//!   after the last story of the last user.
//! - `previous()` retreats within the current user, then jumps to the
//!   *last* story of the preceding user, and is a no-op at the very first
//!   story.
//!
//! The navigator never leaves the session pointing at a missing story:
//! users without stories are rejected by [`StoryNavigator::set_users`].

use crate::domain::story::{retain_playable, Story, StoryUser, UserId};

/// Position of the story currently being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_index: usize,
    pub story_index: usize,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The session now points at a different story.
    Moved(Session),
    /// Nothing to move to in that direction; the session is unchanged.
    Unchanged,
    /// Walked past the last story of the last user. The session is kept
    /// until the caller closes it so the last story can fade out.
    Ended,
    /// No session is open.
    Inactive,
}

/// Navigation snapshot for UI rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Index of the current story within its user.
    pub story_index: usize,
    /// Number of stories of the current user.
    pub story_count: usize,
    /// Position of the current user in the list.
    pub user_index: usize,
    /// Number of users in the list.
    pub user_count: usize,
    /// Whether `previous()` would move.
    pub has_previous: bool,
    /// Whether `next()` would move rather than end the session.
    pub has_next: bool,
}

/// Single source of truth for the user list and viewing session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryNavigator {
    users: Vec<StoryUser>,
    session: Option<Session>,
}

impl StoryNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the user list and closes any open session.
    pub fn set_users(&mut self, users: Vec<StoryUser>) {
        self.users = retain_playable(users);
        self.session = None;
    }

    #[must_use]
    pub fn users(&self) -> &[StoryUser] {
        &self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Total number of stories across all users.
    #[must_use]
    pub fn total_stories(&self) -> usize {
        self.users.iter().map(StoryUser::story_count).sum()
    }

    /// Opens a session at the first story of `user_id`, replacing any
    /// previous session. Returns `None` for an unknown user.
    pub fn select(&mut self, user_id: &UserId) -> Option<Session> {
        let user_index = self.users.iter().position(|u| &u.id == user_id)?;
        let session = Session {
            user_index,
            story_index: 0,
        };
        self.session = Some(session);
        Some(session)
    }

    /// Closes the session.
    pub fn close(&mut self) {
        self.session = None;
    }

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.session
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&StoryUser> {
        self.session.and_then(|s| self.users.get(s.user_index))
    }

    #[must_use]
    pub fn current_story(&self) -> Option<&Story> {
        self.session.and_then(|s| self.story_at(s))
    }

    #[must_use]
    pub fn story_at(&self, session: Session) -> Option<&Story> {
        self.users
            .get(session.user_index)
            .and_then(|u| u.stories.get(session.story_index))
    }

    /// Where `next()` would land, without moving.
    #[must_use]
    pub fn peek_next(&self) -> Option<Session> {
        let session = self.session?;
        let user = self.users.get(session.user_index)?;

        if session.story_index + 1 < user.story_count() {
            return Some(Session {
                story_index: session.story_index + 1,
                ..session
            });
        }

        let next_user_index = session.user_index + 1;
        self.users.get(next_user_index).map(|_| Session {
            user_index: next_user_index,
            story_index: 0,
        })
    }

    /// Where `previous()` would land, without moving.
    #[must_use]
    pub fn peek_previous(&self) -> Option<Session> {
        let session = self.session?;

        if session.story_index > 0 {
            return Some(Session {
                story_index: session.story_index - 1,
                ..session
            });
        }

        let previous_user_index = session.user_index.checked_sub(1)?;
        let previous_user = self.users.get(previous_user_index)?;
        previous_user.last_index().map(|story_index| Session {
            user_index: previous_user_index,
            story_index,
        })
    }

    /// Moves to the next story, crossing into the next user when needed.
    pub fn next(&mut self) -> NavigationOutcome {
        if self.session.is_none() {
            return NavigationOutcome::Inactive;
        }
        match self.peek_next() {
            Some(target) => {
                self.session = Some(target);
                NavigationOutcome::Moved(target)
            }
            None => NavigationOutcome::Ended,
        }
    }

    /// Moves to the previous story, crossing into the previous user's last
    /// story when needed.
    pub fn previous(&mut self) -> NavigationOutcome {
        if self.session.is_none() {
            return NavigationOutcome::Inactive;
        }
        match self.peek_previous() {
            Some(target) => {
                self.session = Some(target);
                NavigationOutcome::Moved(target)
            }
            None => NavigationOutcome::Unchanged,
        }
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        let Some(session) = self.session else {
            return NavigationInfo {
                user_count: self.users.len(),
                ..NavigationInfo::default()
            };
        };

        NavigationInfo {
            story_index: session.story_index,
            story_count: self
                .users
                .get(session.user_index)
                .map_or(0, StoryUser::story_count),
            user_index: session.user_index,
            user_count: self.users.len(),
            has_previous: self.peek_previous().is_some(),
            has_next: self.peek_next().is_some(),
        }
    }
}
