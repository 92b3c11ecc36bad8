// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Toasts are small transient cards anchored to the top or bottom screen
//! edge. They stack in insertion order per edge and disappear on their own
//! once their display time runs out.
//!
//! # Components
//!
//! - [`request`] - `ToastRequest` builder, resolved `Toast`, ids and statuses
//! - [`queue`] - `Queue` of active toasts and their expiry
//! - [`timer`] - per-toast `SuspensionTimer`
//! - [`stacking`] - rank and offset math
//! - [`registry`] - process-wide access for code outside the view tree
//! - [`provider`] - the Iced component tying it all together
//! - [`view`] - toast card widgets
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::toast::{self, Provider, ToastRequest};
//!
//! // In the application state
//! let toasts = Provider::mount(&config);
//!
//! // In update
//! toasts.update(toast::Message::Show(ToastRequest::success("Saved")));
//!
//! // From anywhere in the process, e.g. a background thread
//! toast::show_global_toast(ToastRequest::error("Connection lost"));
//!
//! // In view, layered over the main content
//! stack![content, toasts.view(&render_content).map(Message::Toast)]
//! ```

pub mod provider;
pub mod queue;
pub mod registry;
pub mod request;
pub mod stacking;
pub mod timer;
pub mod view;

pub use provider::{Handle, Message, Provider};
pub use queue::Queue;
pub use registry::{
    remove_all_toasts, remove_toast, show_global_toast, Registration, Registry, ToastSink,
};
pub use request::{
    Body, ContainerStyle, Content, Defaults, Position, Status, StyleOverrides, TextStyle, Toast,
    ToastId, ToastRequest,
};
pub use stacking::Layout;
