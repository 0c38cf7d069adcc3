// SPDX-License-Identifier: MPL-2.0
//! Single update entrypoint dispatching component events.

use super::{persistence, App, Message, Screen};
use crate::ui::footer;
use crate::ui::navbar;
use crate::ui::pages::{contact, home, not_found, portfolio, pricing};
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(msg) => match navbar::update(msg, &mut app.menu_open) {
            navbar::Event::None => Task::none(),
            navbar::Event::Navigate(screen) => {
                app.screen = screen;
                Task::none()
            }
            navbar::Event::ToggleLanguage => {
                let target = app.i18n.toggled();
                persistence::apply_language_change(&mut app.i18n, target)
            }
            navbar::Event::ToggleTheme => {
                app.theme_mode = app.theme_mode.toggled();
                persistence::persist_theme_mode(app.theme_mode)
            }
        },
        Message::Footer(msg) => {
            let footer::Event::Navigate(screen) = footer::update(&msg);
            app.screen = screen;
            Task::none()
        }
        Message::Home(msg) => {
            app.screen = match home::update(&msg) {
                home::Event::GoToContact => Screen::Contact,
                home::Event::GoToPortfolio => Screen::Portfolio,
            };
            Task::none()
        }
        Message::Portfolio(msg) => match portfolio::update(&mut app.portfolio, msg) {
            portfolio::Event::None => Task::none(),
            portfolio::Event::GoToContact => {
                app.screen = Screen::Contact;
                Task::none()
            }
        },
        Message::Pricing(msg) => {
            let pricing::Event::GoToContact = pricing::update(&msg);
            app.screen = Screen::Contact;
            Task::none()
        }
        Message::NotFound(msg) => {
            app.screen = match not_found::update(&msg) {
                not_found::Event::GoHome => Screen::Home,
                not_found::Event::GoToContact => Screen::Contact,
            };
            Task::none()
        }
        Message::Contact(msg) => handle_contact_effect(app, msg),
    }
}

/// Runs the contact-form effects: the simulated submission delay and the
/// post-success reset delay. Both always resolve; no cancellation is exposed.
fn handle_contact_effect(app: &mut App, msg: contact::Message) -> Task<Message> {
    match contact::update(&mut app.contact, msg) {
        contact::Effect::None => Task::none(),
        contact::Effect::StartSubmission => Task::perform(
            tokio::time::sleep(contact::SUBMIT_DELAY),
            |()| Message::Contact(contact::Message::SubmissionCompleted),
        ),
        contact::Effect::ScheduleReset => Task::perform(
            tokio::time::sleep(contact::RESET_DELAY),
            |()| Message::Contact(contact::Message::ResetRequested),
        ),
    }
}
