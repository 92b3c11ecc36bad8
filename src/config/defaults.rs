// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for every configuration setting.

use crate::ui::design_tokens::{sizing, spacing};

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Display time for toasts that do not set one (milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 2000;

/// Shortest accepted default display time (milliseconds).
pub const MIN_DURATION_MS: u64 = 100;

/// Longest accepted default display time (milliseconds).
pub const MAX_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Vertical gap between stacked toasts (pixels).
pub const DEFAULT_GAP: f32 = spacing::XS;

/// Distance between the first toast and the screen edge (pixels).
pub const DEFAULT_EDGE_MARGIN: f32 = spacing::LG;

/// Toast card width (pixels).
pub const DEFAULT_WIDTH: f32 = sizing::TOAST_WIDTH;

/// Height assumed before a toast has been measured (pixels).
pub const DEFAULT_ESTIMATED_HEIGHT: f32 = sizing::TOAST_ESTIMATED_HEIGHT;

pub const MAX_GAP: f32 = 64.0;
pub const MAX_EDGE_MARGIN: f32 = 256.0;
pub const MIN_WIDTH: f32 = 120.0;
pub const MAX_WIDTH: f32 = 960.0;
pub const MIN_ESTIMATED_HEIGHT: f32 = 16.0;
pub const MAX_ESTIMATED_HEIGHT: f32 = 400.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Period of the provider tick that drives timers (milliseconds).
pub const DEFAULT_TICK_MS: u64 = 50;

pub const MIN_TICK_MS: u64 = 10;
pub const MAX_TICK_MS: u64 = 500;

/// Fade-in and fade-out length (milliseconds). Matches the 500 ms
/// appearance animation of classic mobile toasts.
pub const DEFAULT_FADE_MS: u64 = 500;

pub const MAX_FADE_MS: u64 = 2000;
