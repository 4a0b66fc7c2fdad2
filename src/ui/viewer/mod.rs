// SPDX-License-Identifier: MPL-2.0
//! Slide viewer: the splash screen, the intro diagram and one slide per
//! fabric, plus the static screen shown when the catalog cannot be loaded.

pub mod component;
mod error_state;
mod slide;
mod splash;

use crate::i18n::fluent::I18n;
use crate::media::ImageState;
use crate::ui::design_tokens::{palette, spacing, typography};
use component::Message;
use iced::widget::{image, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Renders a slide picture, or a placeholder while it loads or after it
/// failed.
fn picture<'a>(state: Option<&'a ImageState>, fit: ContentFit, i18n: &I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match state {
        Some(ImageState::Ready(data)) => {
            return image::Image::new(data.handle.clone())
                .content_fit(fit)
                .width(Length::Fill)
                .height(Length::Fill)
                .into();
        }
        Some(ImageState::Failed { location, .. }) => Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(i18n.tr("fabric-image-error"))
                    .size(typography::BODY)
                    .color(palette::ERROR_500),
            )
            .push(
                Text::new(location.to_string())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .into(),
        Some(ImageState::Loading) | None => Text::new(i18n.tr("image-loading"))
            .size(typography::CAPTION)
            .color(palette::GRAY_400)
            .into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
