// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid: every gallery image as a clickable tile, in manifest order.

use crate::i18n::fluent::I18n;
use crate::media::GalleryImage;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, container, image, scrollable, Column, Row, Text},
    ContentFit, Element, Length,
};

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a [GalleryImage],
    pub columns: u32,
    pub thumbnail_size: u32,
}

/// Messages emitted by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ThumbnailClicked(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    OpenDetail(usize),
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ThumbnailClicked(index) => Event::OpenDetail(index),
    }
}

/// Render the grid, or the empty state when there is nothing to show.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.images.is_empty() {
        return empty_state(ctx.i18n);
    }

    let size = ctx.thumbnail_size as f32;
    let columns = ctx.columns.max(1) as usize;

    let rows = ctx
        .images
        .chunks(columns)
        .enumerate()
        .fold(Column::new().spacing(spacing::GRID_GAP), |grid, (row, chunk)| {
            let tiles = chunk.iter().enumerate().fold(
                Row::new().spacing(spacing::GRID_GAP),
                |tiles, (column, item)| tiles.push(thumbnail(item, row * columns + column, size)),
            );
            grid.push(tiles)
        });

    scrollable(
        container(rows)
            .padding(spacing::GRID_GAP)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn thumbnail(item: &GalleryImage, index: usize, size: f32) -> Element<'_, Message> {
    let preview = image(item.thumbnail.clone())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .content_fit(ContentFit::Contain);

    button(preview)
        .padding(0)
        .style(styles::button::thumbnail)
        .on_press(Message::ThumbnailClicked(index))
        .into()
}

fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("empty-state-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("empty-state-subtitle")).size(typography::BODY));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center(Length::Fill)
        .into()
}
