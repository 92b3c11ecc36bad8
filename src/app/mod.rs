// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the toast overlay.
//!
//! The `App` owns a mounted toast [`Provider`] and a row of buttons that
//! exercise it: one per status, a position switch, a custom-content toast,
//! dismiss-all, and a background service that toasts from another thread
//! through the global registry.

mod message;
pub mod service;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::toast::{self, Position, Provider, Status, ToastRequest};
use iced::{window, Element, Subscription, Task, Theme};
use service::Service;
use std::fmt;

/// Payload rendered by the demo's custom content renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub label: String,
    pub percent: f32,
}

pub struct App {
    config: Config,
    toasts: Provider,
    position: Position,
    service: Option<Service>,
    shown: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("position", &self.position)
            .field("active_toasts", &self.toasts.queue().len())
            .field("service_running", &self.service.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        config::paths::init_cli_override(flags.config_dir.clone());
        let (config, warning) = config::load();
        (Self::with_config(config, warning, &flags), Task::none())
    }

    /// Builds the app from an already-loaded config. A load warning is
    /// surfaced as the first toast.
    fn with_config(mut config: Config, warning: Option<String>, flags: &Flags) -> Self {
        if let Some(position) = flags.position {
            config.toast.position = Some(position);
        }
        if let Some(duration_ms) = flags.duration_ms {
            config.toast.duration_ms = Some(duration_ms);
        }

        let mut toasts = Provider::mount(&config);
        if let Some(warning) = warning {
            tracing::warn!(%warning, "falling back to default settings");
            toasts.update(toast::Message::Show(
                ToastRequest::warning(format!("Settings not loaded: {warning}"))
                    .duration(std::time::Duration::from_secs(5)),
            ));
        }

        Self {
            position: config.defaults().position,
            config,
            toasts,
            service: None,
            shown: 0,
        }
    }

    fn title(&self) -> String {
        let count = self.toasts.queue().len();
        if count == 0 {
            "Iced Toast".to_string()
        } else {
            format!("Iced Toast ({count})")
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toasts.subscription().map(Message::Toast)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(message) => {
                self.toasts.update(message);
            }
            Message::ShowStatus(status) => {
                self.shown += 1;
                let request = ToastRequest::new(status_message(status, self.shown))
                    .status(status)
                    .position(self.position);
                self.toasts.update(toast::Message::Show(request));
            }
            Message::ShowProgress => {
                self.shown += 1;
                let progress = Progress {
                    label: format!("Upload #{}", self.shown),
                    percent: (self.shown * 17 % 100) as f32,
                };
                // The message is a fallback the custom renderer never shows
                let request = ToastRequest::from_content(toast::Content::new(progress))
                    .with_message("Uploading")
                    .status(Status::Info)
                    .position(self.position);
                self.toasts.update(toast::Message::Show(request));
            }
            Message::SelectPosition(position) => {
                self.position = position;
            }
            Message::DismissAll => {
                self.toasts.update(toast::Message::DismissAll);
            }
            Message::ToggleService => {
                self.service = match self.service.take() {
                    Some(_running) => None,
                    None => Some(Service::start(service::REPORT_INTERVAL)),
                };
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toasts: &self.toasts,
            position: self.position,
            service_running: self.service.is_some(),
            default_duration: self.config.defaults().duration,
        })
    }
}

fn status_message(status: Status, n: u32) -> String {
    match status {
        Status::Default => format!("Toast #{n}"),
        Status::Success => format!("Saved successfully (#{n})"),
        Status::Error => format!("Something went wrong (#{n})"),
        Status::Warning => format!("Disk almost full (#{n})"),
        Status::Info => format!("New version available (#{n})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_config(Config::default(), None, &Flags::default())
    }

    #[test]
    fn status_buttons_show_toasts_at_selected_position() {
        let mut app = app();
        let _ = app.update(Message::SelectPosition(Position::Top));
        let _ = app.update(Message::ShowStatus(Status::Success));

        let toast = app.toasts.queue().iter().next().expect("one toast");
        assert_eq!(toast.position(), Position::Top);
        assert_eq!(toast.status(), Status::Success);
    }

    #[test]
    fn progress_toast_renders_content() {
        let mut app = app();
        let _ = app.update(Message::ShowProgress);

        let toast = app.toasts.queue().iter().next().expect("one toast");
        match toast.body() {
            toast::Body::Content(content) => {
                assert!(content.downcast_ref::<Progress>().is_some());
            }
            other => panic!("expected content body, got {other:?}"),
        }
    }

    #[test]
    fn dismiss_all_clears_overlay() {
        let mut app = app();
        let _ = app.update(Message::ShowStatus(Status::Info));
        let _ = app.update(Message::ShowStatus(Status::Error));

        let _ = app.update(Message::DismissAll);
        assert!(app.toasts.queue().is_empty());
    }

    #[test]
    fn flags_override_config_defaults() {
        let flags = Flags {
            position: Some(Position::Top),
            duration_ms: Some(4000),
            ..Flags::default()
        };
        let app = App::with_config(Config::default(), None, &flags);

        assert_eq!(app.position, Position::Top);
        assert_eq!(
            app.config.defaults().duration,
            std::time::Duration::from_millis(4000)
        );
    }

    #[test]
    fn config_warning_becomes_toast() {
        let app = App::with_config(
            Config::default(),
            Some("bad settings".into()),
            &Flags::default(),
        );

        let toast = app.toasts.queue().iter().next().expect("warning toast");
        assert_eq!(toast.status(), Status::Warning);
    }

    #[test]
    fn title_counts_active_toasts() {
        let mut app = app();
        assert_eq!(app.title(), "Iced Toast");

        let _ = app.update(Message::ShowStatus(Status::Default));
        assert_eq!(app.title(), "Iced Toast (1)");
    }
}
