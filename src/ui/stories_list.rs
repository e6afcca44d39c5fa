// SPDX-License-Identifier: MPL-2.0
//! Stories list: avatar rail and "recent stories" grid.
//!
//! Pure rendering plus selection. Every avatar and card emits
//! [`Message::Select`] with the user's id; opening the session is up to the
//! page.

use crate::config::RECENT_STORIES_COUNT;
use crate::domain::{StoryUser, UserId};
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::components::avatar::avatar;
use crate::ui::design_tokens::{border, on_story, opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, column, container, image, row, scrollable, stack, text, Column, Row,
};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Select(UserId),
}

/// Contextual data needed to render the list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub users: &'a [StoryUser],
    pub images: &'a ImageCache,
}

/// Users shown in the recent grid: the first few, in list order.
#[must_use]
pub fn recent_users(users: &[StoryUser]) -> &[StoryUser] {
    &users[..users.len().min(RECENT_STORIES_COUNT)]
}

/// URIs the list wants loaded: every avatar, plus the first story image of
/// each recent user.
#[must_use]
pub fn wanted_images(users: &[StoryUser]) -> Vec<String> {
    let avatars = users
        .iter()
        .filter(|user| user.has_avatar())
        .map(|user| user.avatar.clone());
    let covers = recent_users(users)
        .iter()
        .filter_map(StoryUser::first_story)
        .map(|story| story.image.clone());
    avatars.chain(covers).filter(|uri| !uri.is_empty()).collect()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("stories-title")).size(typography::TITLE_LG);

    if ctx.users.is_empty() {
        return column![title, text(ctx.i18n.tr("stories-empty")).size(typography::BODY)]
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .into();
    }

    let rail = scrollable(avatar_rail(&ctx)).direction(scrollable::Direction::Horizontal(
        scrollable::Scrollbar::default(),
    ));

    let recent = column![
        text(ctx.i18n.tr("stories-recent")).size(typography::TITLE_SM),
        recent_grid(&ctx),
    ]
    .spacing(spacing::SM);

    scrollable(
        column![title, rail, recent]
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .max_width(sizing::CONTENT_MAX_WIDTH),
    )
    .into()
}

fn avatar_rail<'a>(ctx: &ViewContext<'a>) -> Row<'a, Message> {
    ctx.users
        .iter()
        .fold(Row::new().spacing(spacing::MD), |rail, user| {
            rail.push(rail_item(ctx, user))
        })
        .padding([spacing::XS, 0.0])
}

fn rail_item<'a>(ctx: &ViewContext<'a>, user: &'a StoryUser) -> Element<'a, Message> {
    let ring_size = sizing::AVATAR_LG + 2.0 * (border::WIDTH_MD + spacing::XXS);
    let ring = container(avatar(ctx.images, user, sizing::AVATAR_LG))
        .padding(border::WIDTH_MD + spacing::XXS)
        .style(styles::container::avatar_ring);

    let badge = container(
        text(user.story_count().to_string())
            .size(typography::CAPTION)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::BADGE))
    .height(Length::Fixed(sizing::BADGE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::badge);

    let badged = stack![
        ring,
        container(badge)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top),
    ]
    .width(Length::Fixed(ring_size))
    .height(Length::Fixed(ring_size));

    let content = column![
        badged,
        text(user.username.as_str()).size(typography::CAPTION),
    ]
    .spacing(spacing::XXS)
    .align_x(alignment::Horizontal::Center);

    button(content)
        .padding(spacing::XXS)
        .style(styles::button::tile)
        .on_press(Message::Select(user.id.clone()))
        .into()
}

fn recent_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    recent_users(ctx.users)
        .iter()
        .fold(Row::new().spacing(spacing::MD), |grid, user| {
            grid.push(story_card(ctx, user))
        })
        .wrap()
        .into()
}

fn story_card<'a>(ctx: &ViewContext<'a>, user: &'a StoryUser) -> Element<'a, Message> {
    let width = Length::Fixed(sizing::STORY_CARD_WIDTH);
    let height = Length::Fixed(sizing::STORY_CARD_HEIGHT);

    let cover: Element<'a, Message> = match user
        .first_story()
        .and_then(|story| ctx.images.image(&story.image))
    {
        Some(data) => image(data.handle.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(iced::widget::Space::new())
            .width(width)
            .height(height)
            .style(styles::container::card)
            .into(),
    };

    let timestamp = user
        .first_story()
        .map(|story| {
            ctx.i18n
                .tr_with_args("story-timestamp", &[("timestamp", story.timestamp.as_str())])
        })
        .unwrap_or_default();

    let caption = Column::new()
        .push(avatar(ctx.images, user, sizing::AVATAR_SM))
        .push(
            text(user.username.as_str())
                .size(typography::BODY_SM)
                .color(on_story(opacity::OPAQUE)),
        )
        .push(
            text(timestamp)
                .size(typography::CAPTION)
                .color(on_story(opacity::TEXT_MUTED)),
        )
        .spacing(spacing::XXS);

    let card = stack![
        cover,
        container(container(caption).padding(spacing::SM).width(Length::Fill))
            .height(height)
            .align_y(alignment::Vertical::Bottom)
            .style(styles::overlay::header_scrim),
    ]
    .width(width)
    .height(height);

    button(container(card).style(styles::container::card))
        .padding(0)
        .style(styles::button::tile)
        .on_press(Message::Select(user.id.clone()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Story, StoryId};

    fn user(id: &str, avatar: &str, stories: usize) -> StoryUser {
        StoryUser {
            id: UserId::new(id),
            username: id.to_string(),
            avatar: avatar.to_string(),
            stories: (0..stories)
                .map(|i| Story {
                    id: StoryId::new(format!("{id}-{i}")),
                    image: format!("{id}-{i}.jpg"),
                    timestamp: "3h".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn recent_users_takes_first_four_in_order() {
        let users: Vec<_> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|id| user(id, "", 1))
            .collect();
        let recent = recent_users(&users);
        assert_eq!(recent.len(), 4);
        assert_eq!(recent[0].username, "a");
        assert_eq!(recent[3].username, "d");
    }

    #[test]
    fn recent_users_handles_short_lists() {
        let users = vec![user("a", "", 1)];
        assert_eq!(recent_users(&users).len(), 1);
        assert!(recent_users(&[]).is_empty());
    }

    #[test]
    fn wanted_images_lists_avatars_then_first_stories() {
        let users = vec![user("a", "a.png", 2), user("b", "", 1)];
        assert_eq!(
            wanted_images(&users),
            vec!["a.png".to_string(), "a-0.jpg".to_string(), "b-0.jpg".to_string()]
        );
    }
}
