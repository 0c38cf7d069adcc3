// SPDX-License-Identifier: MPL-2.0
//! Pricing page: the three plan cards and the custom-quote call-to-action.

use crate::content::{self, PricingPlan};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the pricing page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the pricing page.
#[derive(Debug, Clone)]
pub enum Message {
    GetStarted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    GoToContact,
}

/// Process a pricing page message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::GetStarted => Event::GoToContact,
    }
}

/// Render the pricing page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("pricing-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("pricing-subtitle")).size(typography::BODY_LG));

    let mut plans_row = Row::new().spacing(spacing::MD);
    for plan in content::PLANS {
        plans_row = plans_row.push(plan_card(&ctx, plan));
    }

    let custom = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new(ctx.i18n.tr("pricing-custom")).size(typography::TITLE_MD))
            .push(Text::new(ctx.i18n.tr("pricing-custom-desc")).size(typography::BODY))
            .push(
                button(Text::new(ctx.i18n.tr("pricing-cta")).size(typography::BODY_LG))
                    .on_press(Message::GetStarted)
                    .padding([spacing::SM, spacing::LG])
                    .style(styles::button::primary),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(Horizontal::Center)
    .style(styles::container::hero);

    Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .width(Length::Fill)
        .push(heading)
        .push(plans_row)
        .push(custom)
        .into()
}

fn plan_card<'a>(ctx: &ViewContext<'a>, plan: &'static PricingPlan) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS);

    if plan.popular {
        column = column.push(
            Container::new(
                Text::new(ctx.i18n.tr("pricing-popular")).size(typography::CAPTION),
            )
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::badge),
        );
    }

    column = column
        .push(Text::new(ctx.i18n.tr(plan.title_key)).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr(plan.desc_key)).size(typography::BODY))
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(ctx.i18n.tr("pricing-from"))
                        .size(typography::BODY_SM)
                        .color(palette::GRAY_400),
                )
                .push(
                    Text::new(plan.price)
                        .size(typography::TITLE_LG)
                        .color(palette::PRIMARY_500),
                ),
        )
        .push(Text::new(ctx.i18n.tr("pricing-includes")).size(typography::BODY_SM));

    for feature in plan.features {
        column = column.push(Text::new(format!("• {feature}")).size(typography::BODY_SM));
    }

    column = column.push(
        button(Text::new(ctx.i18n.tr("pricing-cta")).size(typography::BODY))
            .on_press(Message::GetStarted)
            .padding([spacing::XS, spacing::MD])
            .style(if plan.popular {
                styles::button::primary
            } else {
                styles::button::unselected
            }),
    );

    Container::new(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(if plan.popular {
            styles::container::popular_card
        } else {
            styles::container::card
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_started_routes_to_contact() {
        assert!(matches!(update(&Message::GetStarted), Event::GoToContact));
    }

    #[test]
    fn view_renders_without_panicking() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
