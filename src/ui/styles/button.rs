// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    on_story, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (e.g. "Open stories" on the home page).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Disabled => palette::GRAY_200,
        button::Status::Active | button::Status::Pressed => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Text-only navigation link in the page header.
///
/// The link for the active route is drawn in the brand color.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background.base.text;
        let text_color = match (active, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => palette::PRIMARY_400,
            (false, _) => base,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Invisible button wrapping an avatar or a story card.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE / 2.0,
        button::Status::Pressed => opacity::OVERLAY_SUBTLE,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: Color::TRANSPARENT,
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round close button drawn over a story.
pub fn story_close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::OVERLAY_SUBTLE,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: on_story(opacity::OPAQUE),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_nav_link_uses_brand_color() {
        let style = nav_link(true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.text_color, palette::PRIMARY_500);
    }

    #[test]
    fn tile_is_transparent_at_rest() {
        let style = tile(&Theme::Dark, button::Status::Active);
        assert!(matches!(style.background, Some(Background::Color(c)) if c.a == 0.0));
    }

    #[test]
    fn story_close_darkens_on_hover() {
        let rest = story_close(&Theme::Dark, button::Status::Active);
        let hover = story_close(&Theme::Dark, button::Status::Hovered);
        let alpha = |style: button::Style| match style.background {
            Some(Background::Color(c)) => c.a,
            _ => 0.0,
        };
        assert!(alpha(hover) > alpha(rest));
    }
}
