// SPDX-License-Identifier: MPL-2.0
//! Container styles for the page chrome and the stories list.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{gradient, Background, Border, Color, Radians, Theme};

fn scheme(theme: &Theme) -> ColorScheme {
    if theme.extended_palette().is_dark {
        ColorScheme::dark()
    } else {
        ColorScheme::light()
    }
}

/// Header and footer bars of the base layout.
pub fn bar(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Story card of the recent grid.
pub fn card(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.placeholder)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Gradient ring drawn around avatars that have stories.
pub fn avatar_ring(_theme: &Theme) -> container::Style {
    let ring = gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_4))
        .add_stop(0.0, palette::RING_START)
        .add_stop(1.0, palette::RING_END);

    container::Style {
        background: Some(Background::Gradient(ring.into())),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Circle shown when a user has no avatar (or it has not loaded).
pub fn avatar_placeholder(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.placeholder)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Story-count badge on the avatar rail.
pub fn badge(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_primary)),
        text_color: Some(palette::WHITE),
        border: Border {
            color: colors.surface_primary,
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Inline error line (e.g. failed story list fetch).
pub fn error_text(theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(scheme(theme).error),
        ..Default::default()
    }
}
