// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::footer;
use crate::ui::navbar;
use crate::ui::pages::{contact, home, not_found, portfolio, pricing};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Footer(footer::Message),
    Home(home::Message),
    Portfolio(portfolio::Message),
    Pricing(pricing::Message),
    Contact(contact::Message),
    NotFound(not_found::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ru`, `en-US`).
    pub lang: Option<String>,
}
