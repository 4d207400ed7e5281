// SPDX-License-Identifier: MPL-2.0
//! Detail view: one full-size image, its file name and the navigation bar.

use crate::gallery::Direction;
use crate::i18n::fluent::I18n;
use crate::media::GalleryImage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, image, Column, Row, Text},
    ContentFit, Element, Length, Radians, Rotation,
};

/// Contextual data needed to render the detail view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub image: &'a GalleryImage,
    /// Zero-based position of `image` in the gallery.
    pub index: usize,
    pub total: usize,
    /// Angle to draw the image at, in degrees.
    pub rotation: f32,
    pub detail_width: u32,
    pub can_previous: bool,
    pub can_next: bool,
}

/// Messages emitted by the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    BackToGallery,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Step(Direction),
    BackToGallery,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Previous => Event::Step(Direction::Previous),
        Message::Next => Event::Step(Direction::Next),
        Message::BackToGallery => Event::BackToGallery,
    }
}

/// Render the detail view.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let width = ctx.detail_width as f32;
    let height = width * ctx.image.height as f32 / ctx.image.width as f32;

    // Rotation spins around the center without changing the layout size
    let picture = image(ctx.image.full.clone())
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .content_fit(ContentFit::Contain)
        .rotation(Rotation::Floating(Radians(ctx.rotation.to_radians())));

    let name = Text::new(ctx.image.name.clone()).size(typography::TITLE_SM);

    let body = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(picture)
        .push(name);

    let content = Column::new()
        .push(
            container(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .center(Length::Fill),
        )
        .push(navigation_bar(&ctx));

    content.width(Length::Fill).height(Length::Fill).into()
}

fn navigation_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let nav_button = |label: String, message: Option<Message>| {
        button(
            Text::new(label)
                .size(typography::BODY)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::navigation)
        .on_press_maybe(message)
    };

    let position = Text::new(ctx.i18n.tr_with_args(
        "detail-position",
        &[("index", (ctx.index + 1).into()), ("total", ctx.total.into())],
    ))
    .size(typography::CAPTION);

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(nav_button(
            ctx.i18n.tr("detail-previous"),
            ctx.can_previous.then_some(Message::Previous),
        ))
        .push(position)
        .push(nav_button(
            ctx.i18n.tr("detail-next"),
            ctx.can_next.then_some(Message::Next),
        ))
        .push(nav_button(
            ctx.i18n.tr("detail-back"),
            Some(Message::BackToGallery),
        ));

    container(bar)
        .padding(spacing::SM)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_map_to_navigation_events() {
        assert_eq!(update(Message::Previous), Event::Step(Direction::Previous));
        assert_eq!(update(Message::Next), Event::Step(Direction::Next));
        assert_eq!(update(Message::BackToGallery), Event::BackToGallery);
    }
}
