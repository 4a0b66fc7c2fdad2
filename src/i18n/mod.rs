// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files live in `assets/i18n/` and are embedded at build time.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Placeholder substitution for messages such as "{ $count } in stock"
//! - Fallback to the default locale when a key is missing

pub mod fluent;
