// SPDX-License-Identifier: MPL-2.0
//! Portfolio page: category filter over the project grid.

use crate::content::{self, Project, ProjectCategory};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Active portfolio filter. `All` shows every project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl Filter {
    /// Every selectable filter, in display order.
    #[must_use]
    pub fn all() -> Vec<Filter> {
        let mut filters = vec![Filter::All];
        filters.extend(ProjectCategory::ALL.iter().copied().map(Filter::Category));
        filters
    }

    /// Whether a project passes this filter.
    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => project.category == category,
        }
    }

    /// Translation key for the filter's display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Filter::All => "portfolio-filter-all",
            Filter::Category(category) => category.i18n_key(),
        }
    }
}

/// View state of the portfolio page.
#[derive(Debug, Default)]
pub struct State {
    active_filter: Filter,
}

impl State {
    #[must_use]
    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    /// Projects visible under the active filter.
    pub fn visible_projects(&self) -> impl Iterator<Item = &'static Project> + '_ {
        content::PROJECTS
            .iter()
            .filter(|project| self.active_filter.matches(project))
    }
}

/// Messages emitted by the portfolio page.
#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(Filter),
    StartProject,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    GoToContact,
}

/// Process a portfolio message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FilterSelected(filter) => {
            state.active_filter = filter;
            Event::None
        }
        Message::StartProject => Event::GoToContact,
    }
}

/// Contextual data needed to render the portfolio page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the portfolio page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("portfolio-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("portfolio-subtitle")).size(typography::BODY_LG))
        .push(Text::new(ctx.i18n.tr("portfolio-experience")).size(typography::BODY));

    let mut filter_row = Row::new().spacing(spacing::XS);
    for filter in Filter::all() {
        let label = Text::new(ctx.i18n.tr(filter.i18n_key())).size(typography::BODY);
        let mut item = button(label).padding([spacing::XXS, spacing::SM]);
        if filter == ctx.state.active_filter() {
            item = item.style(styles::button::selected);
        } else {
            item = item
                .on_press(Message::FilterSelected(filter))
                .style(styles::button::unselected);
        }
        filter_row = filter_row.push(item);
    }

    let visible: Vec<&Project> = ctx.state.visible_projects().collect();
    let mut grid = Column::new().spacing(spacing::MD);
    for pair in visible.chunks(2) {
        let mut row = Row::new().spacing(spacing::MD);
        for project in pair {
            row = row.push(project_card(&ctx, *project));
        }
        grid = grid.push(row);
    }

    let cta = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("portfolio-cta-question")).size(typography::BODY_LG))
        .push(
            button(Text::new(ctx.i18n.tr("portfolio-cta-button")).size(typography::BODY_LG))
                .on_press(Message::StartProject)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        );

    Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .width(Length::Fill)
        .push(heading)
        .push(filter_row)
        .push(grid)
        .push(cta)
        .into()
}

fn project_card<'a>(ctx: &ViewContext<'a>, project: &'static Project) -> Element<'a, Message> {
    let category_badge = Container::new(
        Text::new(ctx.i18n.tr(project.category.i18n_key())).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::container::badge);

    let mut tech_row = Row::new().spacing(spacing::XXS);
    for tech in project.technologies {
        tech_row = tech_row.push(
            Text::new(*tech)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(Text::new(project.name).size(typography::TITLE_SM))
                    .push(category_badge),
            )
            .push(
                Text::new(project.client)
                    .size(typography::BODY_SM)
                    .color(palette::GRAY_400),
            )
            .push(Text::new(project.description).size(typography::BODY))
            .push(tech_row)
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(Text::new(project.duration).size(typography::BODY_SM))
                    .push(
                        Text::new(project.outcome)
                            .size(typography::BODY_SM)
                            .color(palette::SUCCESS_500),
                    ),
            ),
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
    fn default_filter_shows_every_project() {
        let state = State::default();
        assert_eq!(state.visible_projects().count(), content::PROJECTS.len());
    }

    #[test]
    fn category_filter_shows_exactly_that_category() {
        let mut state = State::default();
        for category in ProjectCategory::ALL {
            update(&mut state, Message::FilterSelected(Filter::Category(*category)));
            assert!(state
                .visible_projects()
                .all(|project| project.category == *category));
            let expected = content::PROJECTS
                .iter()
                .filter(|project| project.category == *category)
                .count();
            assert_eq!(state.visible_projects().count(), expected);
        }
    }

    #[test]
    fn filter_list_starts_with_all() {
        let filters = Filter::all();
        assert_eq!(filters[0], Filter::All);
        assert_eq!(filters.len(), 1 + ProjectCategory::ALL.len());
    }

    #[test]
    fn start_project_routes_to_contact() {
        let mut state = State::default();
        assert!(matches!(
            update(&mut state, Message::StartProject),
            Event::GoToContact
        ));
    }
}
