// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module renders the current screen with the navbar above and the
//! footer below the page content.

use super::{App, Message, Screen};
use crate::ui::footer;
use crate::ui::navbar;
use crate::ui::pages::{about, contact, home, not_found, portfolio, pricing};
use iced::{
    widget::{scrollable, Column, Container},
    Element, Length,
};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        active: app.screen,
        menu_open: app.menu_open,
        theme_mode: app.theme_mode,
    })
    .map(Message::Navbar);

    let page: Element<'_, Message> = match app.screen {
        Screen::Home => home::view(home::ViewContext { i18n: &app.i18n }).map(Message::Home),
        Screen::About => about::view(about::ViewContext { i18n: &app.i18n }),
        Screen::Portfolio => portfolio::view(portfolio::ViewContext {
            i18n: &app.i18n,
            state: &app.portfolio,
        })
        .map(Message::Portfolio),
        Screen::Pricing => {
            pricing::view(pricing::ViewContext { i18n: &app.i18n }).map(Message::Pricing)
        }
        Screen::Contact => contact::view(contact::ViewContext {
            i18n: &app.i18n,
            state: &app.contact,
        })
        .map(Message::Contact),
        Screen::NotFound => {
            not_found::view(not_found::ViewContext { i18n: &app.i18n }).map(Message::NotFound)
        }
    };

    let footer_view = footer::view(footer::ViewContext { i18n: &app.i18n }).map(Message::Footer);

    let content = scrollable(
        Column::new()
            .width(Length::Fill)
            .push(page)
            .push(footer_view),
    )
    .height(Length::Fill);

    Container::new(
        Column::new()
            .push(navbar_view)
            .push(content)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
