// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::gallery::{Direction, ViewMode};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use crate::ui::{detail_view, gallery_grid};
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Text},
    Element, Length,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a Screen,
    pub clock: Instant,
    pub columns: u32,
    pub thumbnail_size: u32,
    pub detail_width: u32,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Loading { started } => {
            view_loading(ctx.i18n, ctx.clock.saturating_duration_since(*started))
        }
        Screen::Gallery(controller) => match (controller.mode(), controller.current()) {
            (ViewMode::Detail, Some(image)) => detail_view::view(detail_view::ViewContext {
                i18n: ctx.i18n,
                image,
                index: controller.current_index().unwrap_or_default(),
                total: controller.len(),
                rotation: controller.displayed_rotation(ctx.clock),
                detail_width: ctx.detail_width,
                can_previous: controller.can_step(Direction::Previous),
                can_next: controller.can_step(Direction::Next),
            })
            .map(Message::Detail),
            _ => gallery_grid::view(gallery_grid::ViewContext {
                i18n: ctx.i18n,
                images: controller.images(),
                columns: ctx.columns,
                thumbnail_size: ctx.thumbnail_size,
            })
            .map(Message::Grid),
        },
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_loading(i18n: &I18n, elapsed: std::time::Duration) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(AnimatedSpinner::new(palette::PRIMARY_500, elapsed).into_element())
        .push(Text::new(i18n.tr("loading-title")).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center(Length::Fill)
        .into()
}
