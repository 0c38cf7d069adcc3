// SPDX-License-Identifier: MPL-2.0
//! Application footer: tagline, quick links, social handles, copyright.

use crate::app::Screen;
use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use iced::{
    alignment::Horizontal,
    widget::{button, rule, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the footer.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Screen),
}

/// Process a footer message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Navigate(screen) => Event::Navigate(*screen),
    }
}

/// Render the footer.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand_column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(
            Text::new("VortexAgency")
                .size(typography::TITLE_MD)
                .color(palette::PRIMARY_500),
        )
        .push(Text::new(ctx.i18n.tr("footer-tagline")).size(typography::BODY));

    let mut links_column = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("footer-links-title")).size(typography::TITLE_SM));
    for screen in Screen::NAV_ORDER {
        links_column = links_column.push(
            button(Text::new(ctx.i18n.tr(screen.i18n_key())).size(typography::BODY))
                .on_press(Message::Navigate(*screen))
                .padding([spacing::XXS, 0.0])
                .style(styles::button::ghost),
        );
    }

    let mut social_column = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("footer-social-title")).size(typography::TITLE_SM));
    for social in content::SOCIAL_LINKS {
        social_column = social_column.push(
            Row::new()
                .spacing(spacing::XS)
                .push(Text::new(social.label).size(typography::BODY))
                .push(
                    Text::new(social.handle)
                        .size(typography::BODY_SM)
                        .color(palette::GRAY_400),
                ),
        );
    }

    let columns = Row::new()
        .spacing(spacing::XL)
        .push(brand_column)
        .push(links_column)
        .push(social_column);

    let year = chrono::Local::now().year();
    let copyright = Text::new(format!("© {} {}", year, ctx.i18n.tr("footer-copyright")))
        .size(typography::BODY_SM)
        .color(palette::GRAY_400);

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .push(columns)
            .push(rule::horizontal(1))
            .push(
                Container::new(copyright)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            ),
    )
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_links_navigate() {
        let event = update(&Message::Navigate(Screen::About));
        assert!(matches!(event, Event::Navigate(Screen::About)));
    }
}
