// SPDX-License-Identifier: MPL-2.0
//! Intro and fabric slides.
//!
//! Both slides share the same layering: the picture fills the window, a
//! caption strip sits at the bottom and the previous/next buttons float over
//! the left and right edges.

use super::component::Message;
use crate::catalog::CatalogEntry;
use crate::i18n::fluent::I18n;
use crate::media::ImageState;
use crate::navigation::{FabricPosition, Intent};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

pub struct IntroContext<'a> {
    pub i18n: &'a I18n,
    pub picture: Option<&'a ImageState>,
    /// The manifest request has not completed yet.
    pub catalog_pending: bool,
    /// The manifest loaded but lists no fabrics.
    pub catalog_empty: bool,
    pub has_next: bool,
}

pub fn intro(ctx: IntroContext<'_>) -> Element<'_, Message> {
    let status_key = if ctx.catalog_pending {
        "intro-loading"
    } else if ctx.catalog_empty {
        "intro-empty"
    } else {
        "intro-hint"
    };

    let caption = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("intro-heading")).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr(status_key)).size(typography::BODY));

    layered(
        ctx.i18n,
        super::picture(ctx.picture, ContentFit::Contain, ctx.i18n),
        None,
        caption,
        ctx.has_next,
    )
}

pub struct FabricContext<'a> {
    pub i18n: &'a I18n,
    pub entry: &'a CatalogEntry,
    pub picture: Option<&'a ImageState>,
    pub position: Option<FabricPosition>,
    pub show_quantity: bool,
    pub show_position: bool,
    pub has_next: bool,
}

pub fn fabric(ctx: FabricContext<'_>) -> Element<'_, Message> {
    let mut caption = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(ctx.entry.name.as_str()).size(typography::TITLE_MD));

    if ctx.show_quantity {
        caption = caption.push(
            Text::new(ctx.i18n.tr_with_count(
                "fabric-stock",
                "count",
                ctx.entry.quantity,
            ))
            .size(typography::BODY),
        );
    }

    caption = caption.push(
        Text::new(ctx.i18n.tr("fabric-swipe-hint"))
            .size(typography::CAPTION)
            .color(palette::GRAY_200),
    );

    let badge = ctx
        .position
        .filter(|_| ctx.show_position)
        .map(|position| position_badge(ctx.i18n, position));

    layered(
        ctx.i18n,
        super::picture(ctx.picture, ContentFit::Contain, ctx.i18n),
        badge,
        caption,
        ctx.has_next,
    )
}

fn position_badge<'a>(i18n: &I18n, position: FabricPosition) -> Element<'a, Message> {
    let index = position.index.to_string();
    let total = position.total.to_string();
    let label = i18n.tr_with_args(
        "fabric-position",
        &[("index", index.as_str()), ("total", total.as_str())],
    );

    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::caption(radius::FULL))
        .into()
}

fn nav_button<'a>(glyph: String, intent: Intent, enabled: bool) -> Element<'a, Message> {
    let nav = button(
        Container::new(Text::new(glyph).size(sizing::NAV_GLYPH))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(sizing::NAV_BUTTON)
    .height(sizing::NAV_BUTTON)
    .padding(0.0)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ));

    if enabled {
        nav.on_press(Message::Navigate(intent)).into()
    } else {
        nav.into()
    }
}

/// Stacks the picture, the optional top-right badge, the bottom caption and
/// the navigation buttons.
fn layered<'a>(
    i18n: &I18n,
    picture: Element<'a, Message>,
    badge: Option<Element<'a, Message>>,
    caption: Column<'a, Message>,
    has_next: bool,
) -> Element<'a, Message> {
    let mut top = Row::new()
        .push(Space::new().width(Length::Fill))
        .padding(spacing::MD);
    if let Some(badge) = badge {
        top = top.push(badge);
    }

    let bottom = Container::new(
        Container::new(caption)
            .padding([spacing::SM, spacing::LG])
            .style(styles::container::caption(radius::LG)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Bottom);

    // Previous is always possible from the intro or a fabric (back toward the splash).
    let controls = Container::new(
        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(nav_button(i18n.tr("nav-previous"), Intent::Previous, true))
            .push(Space::new().width(Length::Fill))
            .push(nav_button(i18n.tr("nav-next"), Intent::Next, has_next)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_y(alignment::Vertical::Center);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(picture)
        .push(Column::new().push(top))
        .push(bottom)
        .push(controls)
        .into()
}
