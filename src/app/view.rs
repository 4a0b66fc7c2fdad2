// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::viewer::component;
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a component::State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let viewer = ctx
        .viewer
        .view(component::ViewEnv { i18n: ctx.i18n })
        .map(Message::Viewer);

    Container::new(viewer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
