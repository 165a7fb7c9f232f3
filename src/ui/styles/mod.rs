// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the editor widgets.

pub mod button;
pub mod container;
