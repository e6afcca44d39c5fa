// SPDX-License-Identifier: MPL-2.0
//! Static pages: home, demo, minimal and not-found.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, row, text, Column};
use iced::{alignment, Element, Length};

/// Keyboard shortcuts listed on the demo page (key label key, action key).
const SHORTCUTS: [(&str, &str); 4] = [
    ("demo-key-left", "demo-action-previous"),
    ("demo-key-right", "demo-action-next"),
    ("demo-key-space", "demo-action-next"),
    ("demo-key-escape", "demo-action-close"),
];

fn page<'a, Message: 'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    container(
        content
            .spacing(spacing::MD)
            .max_width(sizing::CONTENT_MAX_WIDTH),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .into()
}

fn open_stories<'a, Message: Clone + 'a>(
    i18n: &I18n,
    navigate: impl Fn(Screen) -> Message,
) -> Element<'a, Message> {
    button(text(i18n.tr("open-stories-button")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(navigate(Screen::Stories))
        .into()
}

pub fn home<'a, Message: Clone + 'a>(
    i18n: &'a I18n,
    navigate: impl Fn(Screen) -> Message,
) -> Element<'a, Message> {
    page(column![
        text(i18n.tr("home-title")).size(typography::TITLE_LG),
        text(i18n.tr("home-body")).size(typography::BODY_LG),
        open_stories(i18n, navigate),
    ])
}

pub fn demo<'a, Message: Clone + 'a>(
    i18n: &'a I18n,
    navigate: impl Fn(Screen) -> Message,
) -> Element<'a, Message> {
    let shortcuts = SHORTCUTS
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |list, (key, action)| {
            list.push(
                row![
                    text(i18n.tr(key))
                        .size(typography::BODY)
                        .width(Length::Fixed(sizing::STORY_CARD_WIDTH)),
                    text(i18n.tr(action)).size(typography::BODY),
                ]
                .spacing(spacing::MD),
            )
        });

    page(column![
        text(i18n.tr("demo-title")).size(typography::TITLE_LG),
        text(i18n.tr("demo-body")).size(typography::BODY_LG),
        text(i18n.tr("demo-pointer")).size(typography::BODY),
        shortcuts,
        open_stories(i18n, navigate),
    ])
}

pub fn minimal<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    container(text(i18n.tr("minimal-body")).size(typography::BODY))
        .padding(spacing::MD)
        .into()
}

pub fn not_found<'a, Message: Clone + 'a>(
    i18n: &'a I18n,
    path: &str,
    navigate: impl Fn(Screen) -> Message,
) -> Element<'a, Message> {
    page(
        column![
            text(i18n.tr("not-found-title")).size(typography::TITLE_LG),
            text(i18n.tr_with_args("not-found-body", &[("path", path)])).size(typography::BODY),
            button(text(i18n.tr("not-found-home-link")).size(typography::BODY))
                .style(styles::button::nav_link(false))
                .on_press(navigate(Screen::Home)),
        ]
        .align_x(alignment::Horizontal::Left),
    )
}
