// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The navbar shows the brand, one button per page, and the two quick
//! toggles (language, theme). On narrow layouts the same destinations are
//! reachable through the hamburger dropdown; the open/closed flag is view
//! state owned by the application root and closes on navigation.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
    pub menu_open: bool,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    Navigate(Screen),
    ToggleLanguage,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
    ToggleLanguage,
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Navigate(screen) => {
            *menu_open = false;
            Event::Navigate(screen)
        }
        Message::ToggleLanguage => Event::ToggleLanguage,
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new("VortexAgency")
        .size(typography::TITLE_MD)
        .color(palette::PRIMARY_500);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            button(Text::new("≡").size(typography::TITLE_MD))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::ghost),
        )
        .push(brand)
        .push(Space::new().width(spacing::MD));

    for screen in Screen::NAV_ORDER {
        row = row.push(nav_button(ctx, *screen));
    }

    // Language toggle shows the locale it switches to, mirroring the
    // original site's EN ↔ RU switch.
    let language_label = ctx.i18n.toggled().to_string().to_uppercase();
    let theme_label = ctx.i18n.tr(ctx.theme_mode.toggled().i18n_key());

    row = row
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(language_label).size(typography::BODY))
                .on_press(Message::ToggleLanguage)
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::unselected),
        )
        .push(
            button(Text::new(theme_label).size(typography::BODY))
                .on_press(Message::ToggleTheme)
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::unselected),
        );

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

fn nav_button<'a>(ctx: &ViewContext<'a>, screen: Screen) -> Element<'a, Message> {
    let label = ctx.i18n.tr(screen.i18n_key());
    let mut item = button(Text::new(label).size(typography::BODY)).padding([spacing::XXS, spacing::XS]);

    if ctx.active == screen {
        item = item.style(styles::button::selected);
    } else {
        item = item.on_press(Message::Navigate(screen)).style(styles::button::ghost);
    }

    item.into()
}

/// Build the dropdown menu mirroring the nav destinations.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);

    for screen in Screen::NAV_ORDER {
        menu_column = menu_column.push(build_menu_item(ctx.i18n.tr(screen.i18n_key()), *screen));
    }

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

fn build_menu_item<'a>(label: String, screen: Screen) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(Message::Navigate(screen))
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::ghost)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_menu_flips_the_flag_without_an_event() {
        let mut menu_open = false;
        assert!(matches!(update(Message::ToggleMenu, &mut menu_open), Event::None));
        assert!(menu_open);
        assert!(matches!(update(Message::ToggleMenu, &mut menu_open), Event::None));
        assert!(!menu_open);
    }

    #[test]
    fn navigation_closes_the_menu() {
        let mut menu_open = true;
        let event = update(Message::Navigate(Screen::Pricing), &mut menu_open);
        assert!(matches!(event, Event::Navigate(Screen::Pricing)));
        assert!(!menu_open);
    }

    #[test]
    fn toggles_propagate_as_events() {
        let mut menu_open = false;
        assert!(matches!(
            update(Message::ToggleLanguage, &mut menu_open),
            Event::ToggleLanguage
        ));
        assert!(matches!(
            update(Message::ToggleTheme, &mut menu_open),
            Event::ToggleTheme
        ));
    }
}
