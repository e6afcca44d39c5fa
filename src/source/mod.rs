// SPDX-License-Identifier: MPL-2.0
//! Story data source.
//!
//! The story list is a JSON array of users fetched once at startup from a
//! URL or a local file:
//!
//! ```json
//! [
//!   {
//!     "id": "1",
//!     "username": "alice",
//!     "avatar": "https://example.com/alice.jpg",
//!     "stories": [{ "id": "s1", "image": "https://example.com/1.jpg", "timestamp": "2h" }]
//!   }
//! ]
//! ```
//!
//! Unknown keys are ignored. Users without stories are dropped later by the
//! navigator. Relative avatar and image references are resolved against the
//! list's own location.

use crate::domain::StoryUser;
use crate::error::Result;
use crate::media::{read_bytes, Location};

/// Parses the story list wire format.
///
/// # Errors
///
/// Returns [`crate::error::Error::Parse`] for malformed JSON or missing
/// required fields.
pub fn parse_users(bytes: &[u8]) -> Result<Vec<StoryUser>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Fetches and parses the story list at `location`.
///
/// # Errors
///
/// Propagates retrieval errors from [`read_bytes`] and parse errors from
/// [`parse_users`].
pub async fn fetch_users(location: String) -> Result<Vec<StoryUser>> {
    let base = Location::parse(&location)?;
    let bytes = read_bytes(&location).await?;
    let mut users = parse_users(&bytes)?;
    resolve_references(&base, &mut users);
    log::info!(
        "Loaded {} users ({} stories)",
        users.len(),
        users.iter().map(StoryUser::story_count).sum::<usize>()
    );
    Ok(users)
}

/// Rewrites every avatar and story image of `users` relative to `base`.
pub fn resolve_references(base: &Location, users: &mut [StoryUser]) {
    for user in users {
        user.avatar = base.resolve(&user.avatar);
        for story in &mut user.stories {
            story.image = base.resolve(&story.image);
        }
    }
}
