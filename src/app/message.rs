// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::viewer::component;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Manifest URL or path, overriding `[catalog] manifest`.
    pub manifest: Option<String>,
    /// Image base URL or directory, overriding `[catalog] image_base`.
    pub image_base: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SWATCHBOOK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
