// SPDX-License-Identifier: MPL-2.0
//! `swatchbook` is a swipeable catalog viewer built with the Iced GUI framework.
//!
//! It loads a JSON manifest of fabrics, then walks through a splash screen, an
//! intro diagram and one slide per fabric, driven by arrow keys, mouse drags
//! or touch swipes.

#![doc(html_root_url = "https://docs.rs/swatchbook/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod navigation;
pub mod ui;
