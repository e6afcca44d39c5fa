// SPDX-License-Identifier: MPL-2.0
//! User avatar.

use crate::domain::StoryUser;
use crate::media::ImageCache;
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::{center, image};
use iced::{ContentFit, Element, Length};

/// Square avatar of `size` pixels.
pub fn avatar<'a, Message: 'a>(
    images: &ImageCache,
    user: &StoryUser,
    size: f32,
) -> Element<'a, Message> {
    let length = Length::Fixed(size);
    match images.image(&user.avatar) {
        Some(data) => image(data.handle.clone())
            .width(length)
            .height(length)
            .content_fit(ContentFit::Cover)
            .into(),
        None => {
            let label_size = (size * 0.4).max(typography::CAPTION);
            center(iced::widget::text(initial(&user.username)).size(label_size))
                .width(length)
                .height(length)
                .style(styles::container::avatar_placeholder)
                .into()
        }
    }
}

/// First character of the username, upper-cased.
#[must_use]
pub fn initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_uses_first_character_uppercased() {
        assert_eq!(initial("alice"), "A");
        assert_eq!(initial("émile"), "É");
        assert_eq!(initial(""), "");
    }
}
