// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::toast::{self, Position, Status};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Toast(toast::Message),
    /// Show a text toast with the given status at the selected position.
    ShowStatus(Status),
    /// Show a toast carrying a custom progress payload.
    ShowProgress,
    SelectPosition(Position),
    DismissAll,
    /// Start or stop the background service that toasts through the registry.
    ToggleService,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Directory holding `settings.toml`.
    pub config_dir: Option<String>,
    /// Overrides the configured default position.
    pub position: Option<Position>,
    /// Overrides the configured default duration, in milliseconds.
    pub duration_ms: Option<u64>,
}
