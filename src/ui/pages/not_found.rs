// SPDX-License-Identifier: MPL-2.0
//! Fallback screen for an unrecognized navigation target.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the not-found screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the not-found screen.
#[derive(Debug, Clone)]
pub enum Message {
    GoHome,
    GoToContact,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    GoHome,
    GoToContact,
}

/// Process a not-found message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::GoHome => Event::GoHome,
        Message::GoToContact => Event::GoToContact,
    }
}

/// Render the not-found screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Text::new("404")
                .size(typography::DISPLAY)
                .color(palette::PRIMARY_500),
        )
        .push(Text::new(ctx.i18n.tr("not-found-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("not-found-subtitle")).size(typography::BODY_LG))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(
                    button(Text::new(ctx.i18n.tr("not-found-home")).size(typography::BODY_LG))
                        .on_press(Message::GoHome)
                        .padding([spacing::SM, spacing::LG])
                        .style(styles::button::primary),
                )
                .push(
                    button(Text::new(ctx.i18n.tr("not-found-contact")).size(typography::BODY_LG))
                        .on_press(Message::GoToContact)
                        .padding([spacing::SM, spacing::LG])
                        .style(styles::button::unselected),
                ),
        );

    Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::XXL)
        .into()
}
