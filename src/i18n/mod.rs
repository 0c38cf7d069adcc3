// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation loading, and string lookup.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation tables for English and Russian
//! - Runtime language switching, persisted via the config layer
//! - Graceful fallback (the raw key) when a translation is missing

pub mod fluent;
