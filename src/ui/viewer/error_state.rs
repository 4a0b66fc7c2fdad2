// SPDX-License-Identifier: MPL-2.0
//! Static screen shown when the catalog could not be loaded.

use super::component::Message;
use crate::error::CatalogError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(error: &CatalogError, i18n: &I18n) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr("error-catalog-heading"))
        .size(typography::TITLE_SM)
        .color(palette::ERROR_500);

    let friendly = Text::new(i18n.tr(error.i18n_key())).size(typography::BODY);

    let technical = error.to_string();
    let details = Text::new(i18n.tr_with_args("error-details", &[("details", technical.as_str())]))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let panel = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(heading)
            .push(friendly)
            .push(details),
    )
    .padding(spacing::LG)
    .max_width(sizing::ERROR_PANEL_MAX_WIDTH)
    .style(styles::container::panel);

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
