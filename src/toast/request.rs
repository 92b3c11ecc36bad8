// SPDX-License-Identifier: MPL-2.0
//! Toast data structures.
//!
//! A [`ToastRequest`] is what callers build: every field is optional and no
//! identifier exists yet. Showing it through the queue resolves it into a
//! [`Toast`], which carries a fresh [`ToastId`] and has all defaults applied.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::BuildHasher;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

/// Display time applied when a request leaves `duration` unset.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// Unique identifier for an active toast.
///
/// Combines a random component, the creation timestamp, and a process-wide
/// sequence number. The sequence number alone keeps ids distinct even when
/// several toasts are created within the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId {
    random: u64,
    stamp_ms: i64,
    seq: u64,
}

impl ToastId {
    /// Creates a new unique toast ID.
    #[must_use]
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        static SEED: OnceLock<RandomState> = OnceLock::new();

        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        let random = SEED.get_or_init(RandomState::new).hash_one(seq);

        Self {
            random,
            stamp_ms: chrono::Utc::now().timestamp_millis(),
            seq,
        }
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}-{:x}-{}", self.random, self.stamp_ms, self.seq)
    }
}

/// Screen edge a toast is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Top,
    #[default]
    Bottom,
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(Position::Top),
            "bottom" => Ok(Position::Bottom),
            other => Err(format!("invalid position: {other}")),
        }
    }
}

/// Status level, which only affects the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Default,
    Success,
    Error,
    Warning,
    Info,
}

impl Status {
    /// Returns the accent color for this status.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Status::Default => palette::NEUTRAL_500,
            Status::Success => palette::SUCCESS_500,
            Status::Error => palette::ERROR_500,
            Status::Warning => palette::WARNING_500,
            Status::Info => palette::INFO_500,
        }
    }
}

/// Opaque renderable payload.
///
/// The queue never looks inside; the host application's content renderer
/// downcasts it back to whatever it stored.
#[derive(Clone)]
pub struct Content(Arc<dyn Any + Send + Sync>);

impl Content {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Content(..)")
    }
}

/// Presentation overrides for the toast container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerStyle {
    pub background: Option<Color>,
    pub border_color: Option<Color>,
    pub border_radius: Option<f32>,
    pub padding: Option<f32>,
}

/// Presentation overrides for the toast message text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub size: Option<f32>,
}

/// Style overrides carried by a request. Only the view reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleOverrides {
    pub container: ContainerStyle,
    pub text: TextStyle,
}

/// Values applied to fields a request leaves unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defaults {
    pub duration: Duration,
    pub position: Position,
    pub status: Status,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            position: Position::default(),
            status: Status::default(),
        }
    }
}

/// A partial toast description, as handed to `show`.
#[derive(Debug, Clone, Default)]
pub struct ToastRequest {
    pub(crate) message: Option<String>,
    pub(crate) content: Option<Content>,
    pub(crate) duration: Option<Duration>,
    pub(crate) position: Option<Position>,
    pub(crate) status: Option<Status>,
    pub(crate) style: StyleOverrides,
}

impl ToastRequest {
    /// Creates a request displaying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Creates a request displaying a custom payload instead of text.
    pub fn from_content(content: Content) -> Self {
        Self {
            content: Some(content),
            ..Self::default()
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).status(Status::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).status(Status::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).status(Status::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).status(Status::Info)
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches a custom payload. When both a payload and a message are set,
    /// the payload is what gets rendered.
    #[must_use]
    pub fn with_content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn style(mut self, style: StyleOverrides) -> Self {
        self.style = style;
        self
    }
}

/// What a toast displays, after applying content-over-message precedence.
#[derive(Debug, Clone, Copy)]
pub enum Body<'a> {
    Content(&'a Content),
    Message(&'a str),
    Empty,
}

/// An active toast: a request resolved against the queue's defaults.
///
/// `duration` and `position` are fixed once resolved. Changing them means
/// dismissing the toast and showing a new one.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    message: Option<String>,
    content: Option<Content>,
    duration: Duration,
    position: Position,
    status: Status,
    style: StyleOverrides,
    shown_at: Instant,
}

impl Toast {
    pub(crate) fn resolve(
        id: ToastId,
        request: ToastRequest,
        defaults: &Defaults,
        now: Instant,
    ) -> Self {
        Self {
            id,
            message: request.message,
            content: request.content,
            duration: request.duration.unwrap_or(defaults.duration),
            position: request.position.unwrap_or(defaults.position),
            status: request.status.unwrap_or(defaults.status),
            style: request.style,
            shown_at: now,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn style(&self) -> &StyleOverrides {
        &self.style
    }

    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    /// Time since the toast was shown, saturating at zero.
    #[must_use]
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.shown_at)
    }

    /// Resolves what this toast displays. Content wins over message.
    #[must_use]
    pub fn body(&self) -> Body<'_> {
        match (&self.content, &self.message) {
            (Some(content), _) => Body::Content(content),
            (None, Some(message)) => Body::Message(message),
            (None, None) => Body::Empty,
        }
    }
}
