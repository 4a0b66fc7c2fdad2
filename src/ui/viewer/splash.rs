// SPDX-License-Identifier: MPL-2.0
//! Splash screen: a welcome card over a dimmed background photo.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::media::ImageState;
use crate::navigation::Intent;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

const PARAGRAPH_KEYS: [&str; 3] = [
    "splash-paragraph-1",
    "splash-paragraph-2",
    "splash-paragraph-3",
];

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub background: Option<&'a ImageState>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    // A missing background is not worth a message on the welcome screen.
    let background: Element<'_, Message> = match ctx.background {
        Some(ImageState::Ready(_)) => super::picture(ctx.background, ContentFit::Cover, ctx.i18n),
        _ => Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let scrim = Container::new(Text::new(""))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::scrim);

    let title = Text::new(ctx.i18n.tr("splash-title")).size(typography::TITLE_LG);

    let paragraphs = PARAGRAPH_KEYS.iter().fold(
        Column::new().spacing(spacing::SM),
        |column, key| column.push(Text::new(ctx.i18n.tr(key)).size(typography::BODY_LG)),
    );

    let begin = button(Text::new(ctx.i18n.tr("splash-begin-button")))
        .padding([spacing::SM, spacing::LG])
        .height(sizing::BUTTON_HEIGHT + spacing::SM)
        .style(styles::button::primary)
        .on_press(Message::Navigate(Intent::Next));

    let card = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(paragraphs)
            .push(begin),
    )
    .padding([spacing::XL, spacing::XL + spacing::XS])
    .max_width(sizing::SPLASH_CARD_MAX_WIDTH)
    .style(styles::container::splash_card);

    let foreground = Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(background)
        .push(scrim)
        .push(foreground)
        .into()
}
