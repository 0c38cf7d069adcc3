// SPDX-License-Identifier: MPL-2.0
//! One module per screen. Static pages expose a `view` function; pages with
//! view state (`portfolio`, `contact`) follow the `State`/`Message`/`update`
//! component pattern.

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod portfolio;
pub mod pricing;
