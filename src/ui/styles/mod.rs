// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles built on the design tokens.

pub mod button;
pub mod container;
