// SPDX-License-Identifier: MPL-2.0
//! About page: intro, mission, values, team grid.

use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the about page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the about page. Purely presentational; emits no messages.
pub fn view<Message: 'static>(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("about-subtitle")).size(typography::BODY_LG));

    let intro = Text::new(ctx.i18n.tr("about-intro")).size(typography::BODY_LG);

    let mission = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(ctx.i18n.tr("about-mission-title")).size(typography::TITLE_SM))
            .push(Text::new(ctx.i18n.tr("about-mission-desc")).size(typography::BODY)),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card);

    let mut values_row = Row::new().spacing(spacing::MD);
    for key in content::VALUE_KEYS {
        values_row = values_row.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::BODY_LG)
                    .color(palette::PRIMARY_500),
            )
            .padding(spacing::MD)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .style(styles::container::card),
        );
    }

    let values = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("about-values-title")).size(typography::TITLE_SM))
        .push(values_row);

    let mut team_grid = Column::new().spacing(spacing::MD);
    for pair in content::TEAM.chunks(2) {
        let mut row = Row::new().spacing(spacing::MD);
        for member in pair {
            row = row.push(team_card(member));
        }
        team_grid = team_grid.push(row);
    }

    let team = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("about-team-title")).size(typography::TITLE_SM))
        .push(team_grid);

    Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .width(Length::Fill)
        .push(heading)
        .push(intro)
        .push(mission)
        .push(values)
        .push(team)
        .into()
}

fn team_card<Message: 'static>(member: &content::TeamMember) -> Element<'_, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(member.name).size(typography::TITLE_SM))
            .push(
                Text::new(member.role)
                    .size(typography::BODY)
                    .color(palette::PRIMARY_500),
            )
            .push(Text::new(member.bio).size(typography::BODY_SM)),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_without_panicking() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(ViewContext { i18n: &i18n });
    }
}
