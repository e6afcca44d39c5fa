// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages, the stories
//! list and the story viewer.
//!
//! The `App` struct wires together the navigator (users and session), the
//! viewer state machine, the image cache and localization, and translates
//! messages into side effects like story list fetching or image loading.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::query::StoryNavigator;
use crate::config::{self, PlaybackTiming};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::source;
use crate::ui::story_viewer;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    navigator: StoryNavigator,
    viewer: story_viewer::State,
    images: ImageCache,
    /// Whether the startup story list fetch is still running.
    stories_loading: bool,
    /// Why the story list fetch failed, if it did.
    stories_error: Option<Error>,
    /// i18n key of a startup warning (e.g. unreadable config file).
    notice: Option<String>,
    window_size: iced::Size,
    /// Angle of the story list loading spinner, advanced by [`Message::Tick`].
    list_spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("users", &self.navigator.len())
            .field("session", &self.navigator.session())
            .field("viewer_phase", &self.viewer.phase())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Radians the list spinner turns per loading tick.
const LIST_SPINNER_STEP: f32 = 0.2;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_timing(I18n::default(), PlaybackTiming::default())
    }
}

impl App {
    fn with_timing(i18n: I18n, timing: PlaybackTiming) -> Self {
        Self {
            i18n,
            screen: Screen::default(),
            theme_mode: ThemeMode::System,
            navigator: StoryNavigator::new(),
            viewer: story_viewer::State::new(timing),
            images: ImageCache::default(),
            stories_loading: false,
            stories_error: None,
            notice: None,
            window_size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            list_spinner_rotation: 0.0,
        }
    }

    /// Loads the config, resolves the starting route and kicks off the story
    /// list fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_deref().map(PathBuf::from));
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = Self::with_timing(i18n, config.playback.timing());
        app.theme_mode = config.general.theme_mode;
        if let Some(key) = config_warning {
            log::warn!("Using default configuration: {key}");
            app.notice = Some(key);
        }
        if let Some(route) = flags.route.as_deref() {
            app.screen = Screen::from_path(route);
        }

        let location = paths::resolve_stories_source(flags.source, &config);
        log::info!("Loading stories from {location}");
        app.stories_loading = true;
        let task = Task::perform(source::fetch_users(location), Message::StoriesLoaded);

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.navigator.current_user() {
            Some(user) if self.viewer.is_open() => format!("{} - {app_name}", user.username),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let viewer_open = self.viewer.is_open();
        let event_sub = subscription::create_event_subscription(viewer_open);
        let viewer_tick = subscription::create_viewer_tick_subscription(
            self.viewer.is_ticking(Instant::now()),
            self.viewer.timing().tick_interval,
            self.viewer.generation(),
        );
        let loading_tick = subscription::create_loading_tick_subscription(self.stories_loading);

        Subscription::batch([event_sub, viewer_tick, loading_tick])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.update_at(message, Instant::now())
    }

    /// Same as `update`, with the current instant supplied by the caller.
    fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            navigator: &mut self.navigator,
            viewer: &mut self.viewer,
            images: &mut self.images,
            stories_loading: &mut self.stories_loading,
            stories_error: &mut self.stories_error,
        };

        match message {
            Message::StoriesLoaded(result) => update::handle_stories_loaded(&mut ctx, result),
            Message::ImageLoaded { uri, result } => {
                update::handle_image_loaded(&mut ctx, uri, result, now)
            }
            Message::List(list_message) => update::handle_list_message(&mut ctx, list_message, now),
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message, now)
            }
            Message::ViewerTick { generation, at } => update::handle_viewer_message(
                &mut ctx,
                story_viewer::Message::Tick(generation),
                at,
            ),
            Message::Tick(_) => {
                self.list_spinner_rotation =
                    (self.list_spinner_rotation + LIST_SPINNER_STEP) % std::f32::consts::TAU;
                Task::none()
            }
            Message::Navigate(target) => update::handle_navigate(&mut ctx, target),
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: &self.screen,
            navigator: &self.navigator,
            viewer: &self.viewer,
            images: &self.images,
            stories_loading: self.stories_loading,
            stories_error: self.stories_error.as_ref(),
            notice: self.notice.as_deref(),
            window_size: self.window_size,
            list_spinner_rotation: self.list_spinner_rotation,
            now: Instant::now(),
        })
    }
}
