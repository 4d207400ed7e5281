// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler forwards to the gallery controller and logs the effect it
//! returns. The view reads the controller directly, so effects carry no
//! further work here.

use super::{Message, Screen};
use crate::gallery::{Controller, Direction, Effect, SpinSettings};
use crate::media::GalleryImage;
use crate::ui::{detail_view, gallery_grid};
use iced::Task;
use std::time::Instant;

/// Mutable application state shared by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    /// Time of the latest tick or user action.
    pub clock: &'a mut Instant,
    pub spin_settings: SpinSettings,
}

/// Builds the gallery once the manifest has been resolved.
pub fn handle_gallery_loaded(
    ctx: &mut UpdateContext<'_>,
    images: Vec<GalleryImage>,
) -> Task<Message> {
    if images.is_empty() {
        log::warn!("No images could be loaded; showing empty gallery");
    }
    *ctx.screen = Screen::Gallery(Controller::new(images, ctx.spin_settings));
    Task::none()
}

pub fn handle_grid_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_grid::Message,
) -> Task<Message> {
    match gallery_grid::update(message) {
        gallery_grid::Event::OpenDetail(index) => open_detail(ctx, index),
    }
}

pub fn handle_detail_message(
    ctx: &mut UpdateContext<'_>,
    message: detail_view::Message,
) -> Task<Message> {
    match detail_view::update(message) {
        detail_view::Event::Step(direction) => handle_step(ctx, direction),
        detail_view::Event::BackToGallery => handle_back(ctx),
    }
}

/// Steps to a neighbouring image, spinning the current one first.
pub fn handle_step(ctx: &mut UpdateContext<'_>, direction: Direction) -> Task<Message> {
    let now = Instant::now();
    *ctx.clock = now;
    if let Some(controller) = ctx.screen.gallery_mut() {
        log_effect(controller.step(direction, now));
    }
    Task::none()
}

pub fn handle_back(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(controller) = ctx.screen.gallery_mut() {
        log_effect(controller.close_detail());
    }
    Task::none()
}

/// Advances running spins to `now`.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.clock = now;
    if let Some(controller) = ctx.screen.gallery_mut() {
        log_effect(controller.tick(now));
    }
    Task::none()
}

fn open_detail(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    *ctx.clock = Instant::now();
    if let Some(controller) = ctx.screen.gallery_mut() {
        match controller.open_detail(index) {
            Ok(effect) => log_effect(effect),
            Err(error) => log::error!("Cannot open image: {}", error),
        }
    }
    Task::none()
}

fn log_effect(effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::RenderGrid => log::debug!("Showing thumbnail grid"),
        Effect::RenderDetail { index, rotation } => {
            log::debug!("Showing image {} at {}°", index, rotation);
        }
        Effect::AnimateRotation { from, to, duration } => {
            log::debug!("Spinning {}° -> {}° over {:?}", from, to, duration);
        }
    }
}
