// SPDX-License-Identifier: MPL-2.0
//! `vortex_agency` is a digital agency showcase application built with the
//! Iced GUI framework.
//!
//! It renders the agency's presentational pages (home, about, portfolio,
//! pricing, contact) and demonstrates internationalization with Fluent,
//! user preference management, and modular UI design.

pub mod app;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
