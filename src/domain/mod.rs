// SPDX-License-Identifier: MPL-2.0
//! Pure domain logic, free of rendering concerns.

pub mod contact;
