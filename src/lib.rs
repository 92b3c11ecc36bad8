// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` provides transient, stackable toast notifications for the
//! Iced GUI framework.
//!
//! Toasts are queued by a [`toast::Provider`] mounted in the application
//! state, stacked per screen edge, and dismissed automatically when their
//! display time runs out. A process-wide [`toast::Registry`] lets code
//! outside the view tree show toasts too.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod toast;
pub mod ui;
