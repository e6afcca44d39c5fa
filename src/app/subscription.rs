// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::Message;
use crate::domain::Generation;
use crate::ui::story_viewer;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Redraw rate of the list loading spinner.
const LIST_SPINNER_INTERVAL: Duration = Duration::from_millis(50);

/// Window resizes are always tracked; keyboard shortcuts are routed to the
/// viewer only while it is open.
pub fn create_event_subscription(viewer_open: bool) -> Subscription<Message> {
    let window = event::listen_with(|event, _status, _window| match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    });

    if !viewer_open {
        return window;
    }

    let keyboard = event::listen_with(|event, status, _window| match (event, status) {
        (event::Event::Keyboard(keyboard_event), event::Status::Ignored) => {
            story_viewer::key_command(&keyboard_event).map(Message::Viewer)
        }
        _ => None,
    });

    Subscription::batch([window, keyboard])
}

/// Viewer timer, keyed by generation so a superseded timer set is dropped by
/// the runtime and its late ticks are recognizable.
pub fn create_viewer_tick_subscription(
    ticking: bool,
    interval: Duration,
    generation: Generation,
) -> Subscription<Message> {
    if ticking {
        time::every(interval)
            .with(generation)
            .map(|(generation, at)| Message::ViewerTick { generation, at })
    } else {
        Subscription::none()
    }
}

/// Periodic redraw while the story list is being fetched.
pub fn create_loading_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(LIST_SPINNER_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
