// SPDX-License-Identifier: MPL-2.0
//! Styles of the full-window story viewer.

use crate::ui::design_tokens::{on_story, opacity, palette::BLACK, radius};
use iced::widget::container;
use iced::{gradient, Background, Border, Color, Radians, Theme};

/// Black backdrop behind the story, faded with the viewer.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: Some(on_story(alpha)),
        ..Default::default()
    }
}

/// Top gradient that keeps the header readable over bright images.
pub fn header_scrim(_theme: &Theme) -> container::Style {
    let scrim = gradient::Linear::new(Radians(std::f32::consts::PI))
        .add_stop(
            0.0,
            Color {
                a: opacity::OVERLAY_STRONG,
                ..BLACK
            },
        )
        .add_stop(1.0, Color::TRANSPARENT);

    container::Style {
        background: Some(Background::Gradient(scrim.into())),
        text_color: Some(on_story(opacity::OPAQUE)),
        ..Default::default()
    }
}

/// Muted surface shown while the image loads or after it failed.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(on_story(opacity::OVERLAY_SUBTLE / 2.0))),
        text_color: Some(on_story(opacity::TEXT_MUTED)),
        ..Default::default()
    }
}

/// Round indicator shown while playback is paused.
pub fn pause_indicator(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        text_color: Some(on_story(opacity::OPAQUE)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
