// SPDX-License-Identifier: MPL-2.0
//! The queue of active toasts.
//!
//! The `Queue` is the authoritative list of toasts currently eligible for
//! display, in insertion order. It is not thread-safe: it lives inside the
//! provider and is only mutated from the UI update loop. Other threads reach
//! it through the registry's command channel.

use super::registry::Command;
use super::request::{Defaults, Toast, ToastId, ToastRequest};
use super::stacking;
use super::timer::SuspensionTimer;
use std::time::Instant;

#[derive(Debug)]
struct Entry {
    toast: Toast,
    timer: SuspensionTimer,
}

/// Insertion-ordered collection of active toasts.
#[derive(Debug, Default)]
pub struct Queue {
    entries: Vec<Entry>,
    defaults: Defaults,
}

impl Queue {
    /// Creates an empty queue using the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue applying `defaults` to unset request fields.
    #[must_use]
    pub fn with_defaults(defaults: Defaults) -> Self {
        Self {
            entries: Vec::new(),
            defaults,
        }
    }

    #[must_use]
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Shows a toast and returns its new id. Never fails.
    pub fn show(&mut self, request: ToastRequest) -> ToastId {
        self.show_at(request, Instant::now())
    }

    /// Same as [`Queue::show`] with an explicit clock reading; the toast's
    /// timer starts at `now`.
    pub fn show_at(&mut self, request: ToastRequest, now: Instant) -> ToastId {
        let id = ToastId::new();
        self.insert(id, request, now);
        id
    }

    /// Inserts a toast whose id was generated by the caller (forwarded
    /// registry commands carry their id so the remote call can return it).
    fn insert(&mut self, id: ToastId, request: ToastRequest, now: Instant) {
        if self.contains(id) {
            tracing::warn!(%id, "ignoring toast with an id that is already active");
            return;
        }

        let toast = Toast::resolve(id, request, &self.defaults, now);
        let timer = SuspensionTimer::arm(now, toast.duration());
        tracing::debug!(
            %id,
            position = ?toast.position(),
            duration_ms = toast.duration().as_millis() as u64,
            "toast shown"
        );
        self.entries.push(Entry { toast, timer });
    }

    /// Removes the toast with `id`, cancelling its timer.
    ///
    /// Returns `true` if a toast was removed. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.toast.id() == id) else {
            return false;
        };
        let mut entry = self.entries.remove(pos);
        entry.timer.cancel();
        tracing::debug!(%id, "toast dismissed");
        true
    }

    /// Removes every toast, cancelling all timers. Returns how many were removed.
    pub fn dismiss_all(&mut self) -> usize {
        let count = self.entries.len();
        for entry in &mut self.entries {
            entry.timer.cancel();
        }
        self.entries.clear();
        if count > 0 {
            tracing::debug!(count, "all toasts dismissed");
        }
        count
    }

    /// Called when a toast's timer fires.
    pub(crate) fn on_expire(&mut self, id: ToastId) -> bool {
        tracing::debug!(%id, "toast expired");
        self.dismiss(id)
    }

    /// Fires every timer whose deadline has passed and expires its toast.
    ///
    /// Returns the ids that expired, in queue order.
    pub fn advance(&mut self, now: Instant) -> Vec<ToastId> {
        let expired: Vec<ToastId> = self
            .entries
            .iter_mut()
            .filter_map(|entry| entry.timer.poll(now).then(|| entry.toast.id()))
            .collect();

        for id in &expired {
            self.on_expire(*id);
        }
        expired
    }

    /// Executes a command forwarded through the registry.
    pub fn apply(&mut self, command: Command, now: Instant) {
        match command {
            Command::Show(id, request) => self.insert(id, request, now),
            Command::Dismiss(id) => {
                self.dismiss(id);
            }
            Command::DismissAll => {
                self.dismiss_all();
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.entries.iter().any(|e| e.toast.id() == id)
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.iter().find(|toast| toast.id() == id)
    }

    /// Active toasts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter().map(|e| &e.toast)
    }

    /// Stacking rank of `id` among toasts at the same position.
    #[must_use]
    pub fn rank(&self, id: ToastId) -> Option<usize> {
        stacking::rank(self.iter(), id)
    }

    /// Earliest pending timer deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries
            .iter()
            .filter(|e| e.timer.is_armed())
            .filter_map(|e| e.timer.deadline())
            .min()
    }
}
