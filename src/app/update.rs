// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The stories page owns the user list (through [`StoryNavigator`]) and the
//! viewer. Handlers here wire them together: list selection opens a
//! session, viewer effects move the session, and image results feed both
//! the cache and the viewer.

use super::{Message, Screen};
use crate::application::query::{NavigationOutcome, StoryNavigator};
use crate::domain::StoryUser;
use crate::error::{Error, FetchError};
use crate::media::{self, ImageCache, ImageData};
use crate::ui::{stories_list, story_viewer};
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub navigator: &'a mut StoryNavigator,
    pub viewer: &'a mut story_viewer::State,
    pub images: &'a mut ImageCache,
    pub stories_loading: &'a mut bool,
    pub stories_error: &'a mut Option<Error>,
}

/// Room kept in the image cache beyond the list's own images, for the
/// story on screen and the one after it.
const SESSION_IMAGE_HEADROOM: usize = 2;

fn load(uri: &str) -> Task<Message> {
    let uri = uri.to_string();
    Task::perform(media::load_image(uri.clone()), move |result| {
        Message::ImageLoaded { uri, result }
    })
}

/// Starts loading `uri` unless it is already cached or in flight.
fn request_image(images: &mut ImageCache, uri: &str) -> Option<Task<Message>> {
    images.request(uri).then(|| load(uri))
}

/// Images of the open session that must stay cached: the current story,
/// its user's avatar and the story `next()` would land on.
fn session_images(navigator: &StoryNavigator) -> Vec<String> {
    let current = navigator.current_story().map(|story| story.image.clone());
    let avatar = navigator
        .current_user()
        .filter(|user| user.has_avatar())
        .map(|user| user.avatar.clone());
    let upcoming = navigator
        .peek_next()
        .and_then(|session| navigator.story_at(session))
        .map(|story| story.image.clone());
    current.into_iter().chain(avatar).chain(upcoming).collect()
}

/// Pins what is on screen or about to be: the list's images plus the open
/// session's [`session_images`].
fn pin_needed(ctx: &mut UpdateContext<'_>) {
    let mut needed = stories_list::wanted_images(ctx.navigator.users());
    needed.extend(session_images(ctx.navigator));
    ctx.images.pin(needed);
}

fn end_session(ctx: &mut UpdateContext<'_>) {
    ctx.navigator.close();
    pin_needed(ctx);
    let stats = ctx.images.stats();
    log::debug!(
        "Story session closed (image cache: {} hits, {} misses, {} evictions)",
        stats.hits,
        stats.misses,
        stats.evictions
    );
}

/// Startup fetch finished. Failure leaves the list empty.
pub fn handle_stories_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<StoryUser>, Error>,
) -> Task<Message> {
    *ctx.stories_loading = false;

    match result {
        Ok(users) => {
            ctx.navigator.set_users(users);
            *ctx.stories_error = None;
            log::debug!(
                "{} users with {} stories to show",
                ctx.navigator.users().len(),
                ctx.navigator.total_stories()
            );
            let wanted = stories_list::wanted_images(ctx.navigator.users());
            ctx.images.ensure_capacity(wanted.len() + SESSION_IMAGE_HEADROOM);
            pin_needed(ctx);
            let tasks: Vec<_> = wanted
                .iter()
                .filter_map(|uri| request_image(ctx.images, uri))
                .collect();
            Task::batch(tasks)
        }
        Err(err) => {
            log::error!("Failed to fetch stories: {err}");
            ctx.navigator.set_users(Vec::new());
            *ctx.stories_error = Some(err);
            Task::none()
        }
    }
}

pub fn handle_list_message(
    ctx: &mut UpdateContext<'_>,
    message: stories_list::Message,
    now: Instant,
) -> Task<Message> {
    match message {
        stories_list::Message::Select(user_id) => {
            if ctx.navigator.select(&user_id).is_none() {
                log::warn!("Selected unknown user {user_id}");
                return Task::none();
            }
            open_current_story(ctx, now)
        }
    }
}

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: story_viewer::Message,
    now: Instant,
) -> Task<Message> {
    if !ctx.navigator.is_open() {
        return Task::none();
    }
    let effect = ctx.viewer.handle(message, now);
    apply_viewer_effect(ctx, effect, now)
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    uri: String,
    result: Result<ImageData, Error>,
    now: Instant,
) -> Task<Message> {
    let failure = result.as_ref().err().cloned();
    ctx.images.complete(uri.clone(), result);

    match failure {
        None => {
            ctx.viewer.image_ready(&uri, now);
        }
        Some(err) => {
            ctx.viewer.image_failed(&uri, err);
        }
    }
    Task::none()
}

/// Switches page. Leaving the stories page tears the session down at once.
pub fn handle_navigate(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if target != Screen::Stories && ctx.navigator.is_open() {
        end_session(ctx);
        *ctx.viewer = story_viewer::State::new(ctx.viewer.timing());
    }
    *ctx.screen = target;
    Task::none()
}

fn apply_viewer_effect(
    ctx: &mut UpdateContext<'_>,
    effect: story_viewer::Effect,
    now: Instant,
) -> Task<Message> {
    match effect {
        story_viewer::Effect::None => Task::none(),
        story_viewer::Effect::Next => match ctx.navigator.next() {
            NavigationOutcome::Moved(_) => open_current_story(ctx, now),
            NavigationOutcome::Ended => {
                ctx.viewer.begin_close(now);
                Task::none()
            }
            NavigationOutcome::Unchanged | NavigationOutcome::Inactive => Task::none(),
        },
        story_viewer::Effect::Previous => match ctx.navigator.previous() {
            NavigationOutcome::Moved(_) => open_current_story(ctx, now),
            _ => Task::none(),
        },
        story_viewer::Effect::Closed => {
            end_session(ctx);
            Task::none()
        }
    }
}

/// Shows the session's current story, pins its [`session_images`] and
/// requests whichever of them are missing.
fn open_current_story(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let Some(story) = ctx.navigator.current_story() else {
        return Task::none();
    };
    let uri = story.image.clone();
    ctx.viewer.show(uri.clone(), now);
    pin_needed(ctx);

    let mut tasks = Vec::new();
    if uri.trim().is_empty() {
        ctx.viewer
            .image_failed(&uri, FetchError::InvalidLocation(uri.clone()).into());
    } else if ctx.images.is_ready(&uri) {
        ctx.viewer.image_ready(&uri, now);
    } else {
        tasks.extend(request_image(ctx.images, &uri));
    }
    tasks.extend(
        session_images(ctx.navigator)
            .iter()
            .filter(|session_uri| **session_uri != uri)
            .filter_map(|session_uri| request_image(ctx.images, session_uri)),
    );

    Task::batch(tasks)
}
