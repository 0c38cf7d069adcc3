// SPDX-License-Identifier: MPL-2.0
//! Home page: hero, stats row, services grid, closing call-to-action.

use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the home page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the home page.
#[derive(Debug, Clone)]
pub enum Message {
    StartProject,
    ViewWork,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    GoToContact,
    GoToPortfolio,
}

/// Process a home page message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::StartProject => Event::GoToContact,
        Message::ViewWork => Event::GoToPortfolio,
    }
}

/// Render the home page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::XXL)
        .padding(spacing::XL)
        .width(Length::Fill)
        .push(build_hero(&ctx))
        .push(build_stats(&ctx))
        .push(build_services(&ctx))
        .push(build_closing_cta(&ctx))
        .into()
}

fn build_hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let badge = Container::new(
        Text::new(ctx.i18n.tr("hero-badge")).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::badge);

    let title = Text::new(ctx.i18n.tr("hero-title")).size(typography::DISPLAY);
    let highlight = Text::new(ctx.i18n.tr("hero-title-highlight"))
        .size(typography::DISPLAY)
        .color(palette::PRIMARY_500);
    let subtitle = Text::new(ctx.i18n.tr("hero-subtitle")).size(typography::BODY_LG);

    let cta_row = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(ctx.i18n.tr("hero-cta")).size(typography::BODY_LG))
                .on_press(Message::StartProject)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("hero-cta-secondary")).size(typography::BODY_LG))
                .on_press(Message::ViewWork)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::unselected),
        );

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(badge)
            .push(title)
            .push(highlight)
            .push(subtitle)
            .push(cta_row),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(Horizontal::Center)
    .style(styles::container::hero)
    .into()
}

fn build_stats<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XL);

    for stat in content::STATS {
        row = row.push(
            Column::new()
                .align_x(Horizontal::Center)
                .width(Length::Fill)
                .push(
                    Text::new(stat.value)
                        .size(typography::TITLE_LG)
                        .color(palette::PRIMARY_500),
                )
                .push(Text::new(ctx.i18n.tr(stat.label_key)).size(typography::BODY)),
        );
    }

    row.into()
}

fn build_services<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("services-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("services-subtitle")).size(typography::BODY_LG));

    // Two cards per row, like the original three-column grid collapsed for
    // a desktop window.
    let mut grid = Column::new().spacing(spacing::MD);
    for pair in content::SERVICES.chunks(2) {
        let mut row = Row::new().spacing(spacing::MD);
        for service in pair {
            row = row.push(service_card(ctx, service));
        }
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::LG)
        .push(heading)
        .push(grid)
        .into()
}

fn service_card<'a>(ctx: &ViewContext<'a>, service: &content::Service) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(ctx.i18n.tr(service.title_key)).size(typography::TITLE_SM))
            .push(Text::new(ctx.i18n.tr(service.desc_key)).size(typography::BODY)),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn build_closing_cta<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(Text::new(ctx.i18n.tr("home-cta-title")).size(typography::TITLE_MD))
            .push(Text::new(ctx.i18n.tr("home-cta-subtitle")).size(typography::BODY))
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        button(Text::new(ctx.i18n.tr("home-cta-button")).size(typography::BODY_LG))
                            .on_press(Message::StartProject)
                            .padding([spacing::SM, spacing::LG])
                            .style(styles::button::primary),
                    )
                    .push(
                        button(Text::new(ctx.i18n.tr("home-explore")).size(typography::BODY_LG))
                            .on_press(Message::ViewWork)
                            .padding([spacing::SM, spacing::LG])
                            .style(styles::button::unselected),
                    ),
            ),
    )
    .width(Length::Fill)
    .max_width(sizing::CONTENT_MAX_WIDTH)
    .padding(spacing::XL)
    .align_x(Horizontal::Center)
    .style(styles::container::hero)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctas_route_to_the_right_screens() {
        assert!(matches!(update(&Message::StartProject), Event::GoToContact));
        assert!(matches!(update(&Message::ViewWork), Event::GoToPortfolio));
    }

    #[test]
    fn view_renders_without_panicking() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
