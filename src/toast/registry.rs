// SPDX-License-Identifier: MPL-2.0
//! Process-wide access to the mounted toast provider.
//!
//! Code outside the view tree (background services, worker threads) cannot
//! send messages to the provider directly. The registry is a single slot
//! holding the operations of whichever provider mounted last:
//!
//! - a provider registers a [`ToastSink`] on mount and keeps the returned
//!   [`Registration`] alive for as long as it is mounted;
//! - dropping the registration unregisters, unless a newer provider has
//!   taken the slot in the meantime;
//! - calls made while nothing is registered are dropped. `show` logs a
//!   warning, `dismiss` and `dismiss_all` stay silent.
//!
//! The free functions [`show_global_toast`], [`remove_toast`] and
//! [`remove_all_toasts`] target the [`global`] registry.

use super::request::{ToastId, ToastRequest};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};
use tokio::sync::mpsc;

/// Receiver of forwarded toast operations.
pub trait ToastSink: Send + Sync {
    fn show(&self, request: ToastRequest) -> ToastId;
    fn dismiss(&self, id: ToastId);
    fn dismiss_all(&self);
}

/// A toast operation in transit to the provider.
#[derive(Debug, Clone)]
pub enum Command {
    Show(ToastId, ToastRequest),
    Dismiss(ToastId),
    DismissAll,
}

/// Sending half of a provider's command channel.
///
/// Ids for forwarded shows are generated here, so the caller gets its id
/// back immediately even though the toast is queued on the next tick.
#[derive(Debug, Clone)]
pub struct CommandSender(mpsc::UnboundedSender<Command>);

impl CommandSender {
    fn send(&self, command: Command) {
        if self.0.send(command).is_err() {
            tracing::warn!("toast provider is gone, dropping command");
        }
    }
}

impl ToastSink for CommandSender {
    fn show(&self, request: ToastRequest) -> ToastId {
        let id = ToastId::new();
        self.send(Command::Show(id, request));
        id
    }

    fn dismiss(&self, id: ToastId) {
        self.send(Command::Dismiss(id));
    }

    fn dismiss_all(&self) {
        self.send(Command::DismissAll);
    }
}

/// Receiving half of a provider's command channel.
#[derive(Debug)]
pub struct CommandReceiver(mpsc::UnboundedReceiver<Command>);

impl CommandReceiver {
    /// Takes the next pending command without blocking.
    pub fn try_next(&mut self) -> Option<Command> {
        self.0.try_recv().ok()
    }

    /// Takes every pending command without blocking.
    pub fn drain(&mut self) -> Vec<Command> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}

/// Creates a command channel.
#[must_use]
pub fn channel() -> (CommandSender, CommandReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (CommandSender(tx), CommandReceiver(rx))
}

struct Slot {
    generation: u64,
    sink: Arc<dyn ToastSink>,
}

#[derive(Default)]
struct Inner {
    slot: RwLock<Option<Slot>>,
    generations: AtomicU64,
}

/// Single-slot, last-writer-wins holder of a [`ToastSink`].
///
/// Cloning yields another handle to the same slot.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("registered", &self.is_registered())
            .finish()
    }
}

impl Registry {
    /// Creates an empty, unregistered registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `sink`, replacing any previous registration.
    pub fn register(&self, sink: Arc<dyn ToastSink>) -> Registration {
        let generation = self.inner.generations.fetch_add(1, Ordering::Relaxed) + 1;
        let previous = self
            .inner
            .slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(Slot { generation, sink });
        if previous.is_some() {
            tracing::debug!(generation, "toast registry taken over by a new provider");
        }

        Registration {
            registry: self.clone(),
            generation,
        }
    }

    fn unregister(&self, generation: u64) {
        let mut slot = self
            .inner
            .slot
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if slot.as_ref().is_some_and(|s| s.generation == generation) {
            *slot = None;
            tracing::debug!(generation, "toast provider unregistered");
        }
    }

    fn current(&self) -> Option<Arc<dyn ToastSink>> {
        self.inner
            .slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| Arc::clone(&s.sink))
    }

    fn current_generation(&self) -> Option<u64> {
        self.inner
            .slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.generation)
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.current_generation().is_some()
    }

    /// Forwards a show to the registered provider.
    ///
    /// Returns `None`, and logs a warning, when no provider is registered.
    pub fn show(&self, request: ToastRequest) -> Option<ToastId> {
        match self.current() {
            Some(sink) => Some(sink.show(request)),
            None => {
                tracing::warn!("toast provider not registered, dropping toast");
                None
            }
        }
    }

    pub fn dismiss(&self, id: ToastId) {
        if let Some(sink) = self.current() {
            sink.dismiss(id);
        }
    }

    pub fn dismiss_all(&self) {
        if let Some(sink) = self.current() {
            sink.dismiss_all();
        }
    }
}

/// Keeps a sink registered. Dropping it unregisters the sink, unless a
/// later registration replaced it.
#[must_use = "the sink is unregistered as soon as the registration is dropped"]
#[derive(Debug)]
pub struct Registration {
    registry: Registry,
    generation: u64,
}

impl Registration {
    /// Returns whether this registration still owns the slot.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.registry.current_generation() == Some(self.generation)
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.registry.unregister(self.generation);
    }
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The process-wide registry used by [`Provider::mount`](super::Provider::mount)
/// and the free functions below.
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Shows a toast on the globally registered provider.
///
/// Returns `None` (with a logged warning) if no provider is mounted.
pub fn show_global_toast(request: ToastRequest) -> Option<ToastId> {
    global().show(request)
}

/// Dismisses a toast on the globally registered provider, if any.
pub fn remove_toast(id: ToastId) {
    global().dismiss(id);
}

/// Dismisses every toast on the globally registered provider, if any.
pub fn remove_all_toasts() {
    global().dismiss_all();
}
