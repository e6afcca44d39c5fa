// SPDX-License-Identifier: MPL-2.0
//! Base page layout: optional header and footer around the page content.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, row, text, Row, Space};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the layout chrome.
pub struct LayoutContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a Screen,
}

/// Wraps `content` with the header and footer the current route asks for.
///
/// `navigate` builds the message emitted by header links.
pub fn base<'a, Message: Clone + 'a>(
    ctx: LayoutContext<'a>,
    content: Element<'a, Message>,
    navigate: impl Fn(Screen) -> Message,
) -> Element<'a, Message> {
    let main = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let mut page = column![].width(Length::Fill).height(Length::Fill);
    if ctx.screen.shows_header() {
        page = page.push(header(&ctx, navigate));
    }
    page = page.push(main);
    if ctx.screen.shows_footer() {
        page = page.push(footer(&ctx));
    }
    page.into()
}

fn header<'a, Message: Clone + 'a>(
    ctx: &LayoutContext<'a>,
    navigate: impl Fn(Screen) -> Message,
) -> Element<'a, Message> {
    let links = Screen::NAVIGATION
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |links, target| {
            let active = &target == ctx.screen;
            links.push(
                button(text(ctx.i18n.tr(target.title_key())).size(typography::BODY))
                    .style(styles::button::nav_link(active))
                    .on_press(navigate(target)),
            )
        });

    let bar = row![
        text(ctx.i18n.tr("window-title")).size(typography::TITLE_SM),
        Space::new().width(Length::Fill),
        links,
    ]
    .align_y(alignment::Vertical::Center);

    container(container(bar).max_width(sizing::CONTENT_MAX_WIDTH))
    .padding([spacing::SM, spacing::LG])
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .style(styles::container::bar)
    .into()
}

fn footer<'a, Message: 'a>(ctx: &LayoutContext<'a>) -> Element<'a, Message> {
    container(
        text(ctx.i18n.tr_with_args(
            "footer-text",
            &[("version", env!("CARGO_PKG_VERSION"))],
        ))
        .size(typography::CAPTION),
    )
    .padding([spacing::XS, spacing::LG])
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .style(styles::container::bar)
    .into()
}
