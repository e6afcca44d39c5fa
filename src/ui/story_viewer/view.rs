// SPDX-License-Identifier: MPL-2.0
//! Story viewer layout: progress bar and header on top, story surface below.

use super::{Message, Phase, State, ViewContext};
use crate::ui::components::avatar::avatar;
use crate::ui::design_tokens::{on_story, opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{AnimatedSpinner, StoryProgress};
use iced::widget::{button, center, column, container, image, mouse_area, row, stack, text, Space};
use iced::{alignment, ContentFit, Element, Length};

pub fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let alpha = state.opacity(ctx.now);

    let viewer = column![header(state, &ctx, alpha), surface(state, &ctx, alpha)]
        .width(Length::Fill)
        .height(Length::Fill)
        .max_width(sizing::VIEWER_MAX_WIDTH);

    container(viewer)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .style(styles::overlay::backdrop(alpha))
        .into()
}

fn header<'a>(state: &'a State, ctx: &ViewContext<'a>, alpha: f32) -> Element<'a, Message> {
    let progress = StoryProgress::new(
        ctx.user.story_count(),
        ctx.story_index,
        state.progress(),
    )
    .into_element();

    let timestamp = ctx
        .user
        .stories
        .get(ctx.story_index)
        .map(|story| {
            ctx.i18n
                .tr_with_args("story-timestamp", &[("timestamp", story.timestamp.as_str())])
        })
        .unwrap_or_default();

    let identity = column![
        text(ctx.user.username.as_str())
            .size(typography::BODY)
            .color(on_story(alpha)),
        text(timestamp)
            .size(typography::CAPTION)
            .color(on_story(alpha * opacity::TEXT_MUTED)),
    ]
    .spacing(2.0);

    let close = button(
        center(text("✕").size(typography::BODY_LG))
            .width(Length::Fixed(sizing::CLOSE_BUTTON))
            .height(Length::Fixed(sizing::CLOSE_BUTTON)),
    )
    .padding(0)
    .style(styles::button::story_close)
    .on_press(Message::Close);

    let user_row = row![
        avatar(ctx.images, ctx.user, sizing::AVATAR_SM),
        identity,
        Space::new().width(Length::Fill),
        close,
    ]
    .spacing(spacing::SM)
    .align_y(alignment::Vertical::Center);

    container(column![progress, user_row].spacing(spacing::SM))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::overlay::header_scrim)
        .into()
}

fn surface<'a>(state: &'a State, ctx: &ViewContext<'a>, alpha: f32) -> Element<'a, Message> {
    let content: Element<'a, Message> = match state.phase() {
        Phase::Failed => {
            let reason = state
                .failure()
                .map(|err| ctx.i18n.tr(err.i18n_key()))
                .unwrap_or_default();
            center(
                column![
                    text(ctx.i18n.tr("story-failed")).size(typography::BODY_LG),
                    text(reason).size(typography::CAPTION),
                    text(ctx.i18n.tr("story-failed-hint")).size(typography::CAPTION),
                ]
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center),
            )
            .style(styles::overlay::placeholder)
            .into()
        }
        Phase::Loading => match ctx.images.image(state.image_uri()) {
            // Image ready but still settling: show it, playback starts shortly
            Some(data) => story_image(data, alpha),
            None => center(
                AnimatedSpinner::new(on_story(alpha), state.spinner_rotation(ctx.now))
                    .into_element(),
            )
            .style(styles::overlay::placeholder)
            .into(),
        },
        _ => match ctx.images.image(state.image_uri()) {
            Some(data) => story_image(data, alpha),
            None => Space::new().width(Length::Fill).height(Length::Fill).into(),
        },
    };

    let mut layers = stack![content].width(Length::Fill).height(Length::Fill);
    if state.is_paused() {
        layers = layers.push(center(
            container(text("❚❚").size(typography::TITLE_MD))
                .padding(spacing::MD)
                .style(styles::overlay::pause_indicator),
        ));
    }

    let width = ctx.surface_width;
    mouse_area(layers)
        .on_press(Message::Pressed)
        .on_release(Message::Released)
        .on_move(move |point| Message::CursorMoved { x: point.x, width })
        .on_exit(Message::PointerLeft)
        .into()
}

fn story_image<'a>(data: &crate::media::ImageData, alpha: f32) -> Element<'a, Message> {
    image(data.handle.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover)
        .opacity(alpha)
        .into()
}
