// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! inside the base layout, with the story viewer stacked over the stories
//! page while a session is open.

use super::{Message, Screen};
use crate::application::query::StoryNavigator;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::layout::{self, LayoutContext};
use crate::ui::widgets::AnimatedSpinner;
use crate::ui::{pages, stories_list, story_viewer, styles};
use iced::widget::{center, column, container, opaque, stack, text};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a Screen,
    pub navigator: &'a StoryNavigator,
    pub viewer: &'a story_viewer::State,
    pub images: &'a ImageCache,
    pub stories_loading: bool,
    pub stories_error: Option<&'a Error>,
    pub notice: Option<&'a str>,
    pub window_size: iced::Size,
    /// Angle of the spinner shown while the story list loads.
    pub list_spinner_rotation: f32,
    pub now: Instant,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match ctx.screen {
        Screen::Stories => view_stories(&ctx),
        Screen::Minimal => pages::minimal(ctx.i18n),
        Screen::Home => pages::home(ctx.i18n, Message::Navigate),
        Screen::Demo => pages::demo(ctx.i18n, Message::Navigate),
        Screen::NotFound(path) => pages::not_found(ctx.i18n, path, Message::Navigate),
    };

    layout::base(
        LayoutContext {
            i18n: ctx.i18n,
            screen: ctx.screen,
        },
        content,
        Message::Navigate,
    )
}

fn view_stories<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.stories_loading {
        let spinner = AnimatedSpinner::new(palette::PRIMARY_500, ctx.list_spinner_rotation);
        return center(
            column![
                spinner.into_element(),
                text(ctx.i18n.tr("stories-loading")).size(typography::BODY),
            ]
            .spacing(spacing::SM)
            .align_x(iced::alignment::Horizontal::Center),
        )
        .into();
    }

    let list = stories_list::view(stories_list::ViewContext {
        i18n: ctx.i18n,
        users: ctx.navigator.users(),
        images: ctx.images,
    })
    .map(Message::List);

    let mut page = column![].width(Length::Fill).height(Length::Fill);
    for key in ctx
        .notice
        .into_iter()
        .chain(ctx.stories_error.map(|_| "stories-fetch-error"))
    {
        page = page.push(
            container(text(ctx.i18n.tr(key)).size(typography::BODY_SM))
                .padding([spacing::XS, spacing::LG])
                .width(Length::Fill)
                .style(styles::container::error_text),
        );
    }
    page = page.push(list);

    let viewer = match ctx.navigator.current_user() {
        Some(user) if ctx.viewer.is_open() => Some(
            ctx.viewer
                .view(story_viewer::ViewContext {
                    i18n: ctx.i18n,
                    user,
                    story_index: ctx.navigator.navigation_info().story_index,
                    images: ctx.images,
                    surface_width: ctx.window_size.width.min(sizing::VIEWER_MAX_WIDTH),
                    now: ctx.now,
                })
                .map(Message::Viewer),
        ),
        _ => None,
    };

    match viewer {
        Some(viewer) => stack![page, opaque(viewer)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => page.into(),
    }
}
