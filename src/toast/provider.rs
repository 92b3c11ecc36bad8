// SPDX-License-Identifier: MPL-2.0
//! The toast provider: an Iced component owning the queue.
//!
//! Embed a `Provider` in the application state, route [`Message`]s to
//! [`Provider::update`], add [`Provider::subscription`] to the application's
//! subscriptions, and layer [`Provider::view`] on top of the main content.
//!
//! Mounting registers the provider with a [`Registry`]; dropping it
//! unregisters. Code inside the view tree can send [`Message::Show`] or use a
//! [`Handle`]; code outside it uses the registry's free functions.

use super::queue::Queue;
use super::registry::{self, CommandReceiver, CommandSender, Registration, Registry, ToastSink};
use super::request::{Body, Content, ToastId, ToastRequest};
use super::stacking::Layout;
use super::view;
use crate::config::Config;
use iced::widget::{text, Stack};
use iced::{time, Element, Length, Size, Subscription};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    Show(ToastRequest),
    Dismiss(ToastId),
    DismissAll,
    /// Periodic tick driving timers and forwarded commands.
    Tick(Instant),
    /// A toast card reported its rendered size.
    Measured(ToastId, Size),
}

/// Settings resolved from [`Config`] at mount time.
#[derive(Debug, Clone, Copy)]
struct Settings {
    tick: Duration,
    fade: Duration,
    edge_margin: f32,
    width: f32,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            tick: config.tick(),
            fade: config.fade(),
            edge_margin: config.edge_margin(),
            width: config.width(),
        }
    }
}

/// Cloneable access to a provider's `show`, `dismiss`, and `dismiss_all`.
///
/// Operations are queued and take effect on the provider's next tick, up to
/// one tick period later. Code that runs inside `update` and needs a toast
/// gone right away should send [`Message::Dismiss`] or
/// [`Message::DismissAll`] instead.
#[derive(Debug, Clone)]
pub struct Handle {
    sender: CommandSender,
}

impl Handle {
    pub fn show(&self, request: ToastRequest) -> ToastId {
        self.sender.show(request)
    }

    pub fn dismiss(&self, id: ToastId) {
        self.sender.dismiss(id);
    }

    pub fn dismiss_all(&self) {
        self.sender.dismiss_all();
    }
}

/// Owner of the active toasts for one mounted overlay.
#[derive(Debug)]
pub struct Provider {
    queue: Queue,
    layout: Layout,
    settings: Settings,
    sender: CommandSender,
    commands: CommandReceiver,
    /// Clock reading of the last tick, used for fade animation.
    now: Instant,
    registration: Registration,
}

impl Provider {
    /// Mounts a provider and registers it with the global registry.
    #[must_use]
    pub fn mount(config: &Config) -> Self {
        Self::mount_in(registry::global(), config)
    }

    /// Mounts a provider and registers it with `registry`.
    #[must_use]
    pub fn mount_in(registry: &Registry, config: &Config) -> Self {
        let (sender, commands) = registry::channel();
        let registration = registry.register(Arc::new(sender.clone()));
        tracing::debug!("toast provider mounted");

        Self {
            queue: Queue::with_defaults(config.defaults()),
            layout: Layout::new(config.gap(), config.estimated_height()),
            settings: Settings::from(config),
            sender,
            commands,
            now: Instant::now(),
            registration,
        }
    }

    /// Returns access bound to this provider.
    #[must_use]
    pub fn handle(&self) -> Handle {
        Handle {
            sender: self.sender.clone(),
        }
    }

    #[must_use]
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Whether this provider still owns its registry slot.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.registration.is_current()
    }

    /// Handles a toast message. Returns the new id for [`Message::Show`].
    pub fn update(&mut self, message: Message) -> Option<ToastId> {
        match message {
            Message::Show(request) => return Some(self.queue.show(request)),
            Message::Dismiss(id) => {
                if self.queue.dismiss(id) {
                    self.layout.forget(id);
                }
            }
            Message::DismissAll => {
                self.queue.dismiss_all();
                self.layout.clear();
            }
            Message::Tick(now) => {
                self.sync(now);
            }
            Message::Measured(id, size) => {
                if self.queue.contains(id) {
                    self.layout.record_measurement(id, size.height);
                }
            }
        }
        None
    }

    /// Applies forwarded commands, then fires due timers.
    ///
    /// Returns the ids that expired.
    pub fn sync(&mut self, now: Instant) -> Vec<ToastId> {
        self.now = now;
        let commands = self.commands.drain();
        let forwarded = !commands.is_empty();
        for command in commands {
            self.queue.apply(command, now);
        }
        let expired = self.queue.advance(now);
        if forwarded || !expired.is_empty() {
            self.layout.retain(self.queue.iter());
        }
        expired
    }

    /// Periodic tick. Runs for as long as the provider is mounted, since
    /// forwarded commands may arrive at any time.
    pub fn subscription(&self) -> Subscription<Message> {
        time::every(self.settings.tick).map(Message::Tick)
    }

    /// Renders every active toast, stacked from its screen edge.
    ///
    /// `render_content` turns a custom [`Content`] payload into an element;
    /// plain messages are rendered as text.
    pub fn view<'a>(
        &'a self,
        render_content: &dyn Fn(&Content) -> Element<'a, Message>,
    ) -> Element<'a, Message> {
        if self.queue.is_empty() {
            return text("").width(Length::Shrink).height(Length::Shrink).into();
        }

        let offsets = self.layout.offsets(self.queue.iter());
        let layers: Vec<Element<'a, Message>> = self
            .queue
            .iter()
            .zip(offsets)
            .map(|(toast, (_, offset))| {
                let age = toast.age(self.now);
                let alpha = view::opacity(age, toast.duration(), self.settings.fade);
                let body = match toast.body() {
                    Body::Content(content) => render_content(content),
                    Body::Message(message) => {
                        view::message_text(message, &toast.style().text, alpha)
                    }
                    Body::Empty => text("").into(),
                };
                view::anchored(
                    view::toast(toast, body, alpha, self.settings.width),
                    toast.position(),
                    self.settings.edge_margin + offset,
                )
            })
            .collect();

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::request::Position;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn mount() -> (Registry, Provider) {
        let registry = Registry::new();
        let provider = Provider::mount_in(&registry, &Config::default());
        (registry, provider)
    }

    #[test]
    fn mount_registers_and_drop_unregisters() {
        let (registry, provider) = mount();
        assert!(registry.is_registered());
        assert!(provider.is_registered());

        drop(provider);
        assert!(!registry.is_registered());
    }

    #[test]
    fn show_message_returns_id() {
        let (_registry, mut provider) = mount();
        let id = provider
            .update(Message::Show(ToastRequest::new("hello")))
            .expect("show returns an id");

        assert!(provider.queue().contains(id));
    }

    #[test]
    fn registry_show_before_mount_is_dropped() {
        let registry = Registry::new();
        assert!(registry.show(ToastRequest::new("too early")).is_none());

        let mut provider = Provider::mount_in(&registry, &Config::default());
        provider.sync(Instant::now());
        assert!(provider.queue().is_empty());
    }

    #[test]
    fn registry_show_after_mount_adds_one_toast() {
        let (registry, mut provider) = mount();
        let id = registry
            .show(ToastRequest::success("from a service"))
            .expect("provider is registered");

        provider.update(Message::Tick(Instant::now()));
        assert_eq!(provider.queue().len(), 1);
        assert!(provider.queue().contains(id));
    }

    #[test]
    fn registry_dismiss_reaches_provider() {
        let (registry, mut provider) = mount();
        let keep = provider
            .update(Message::Show(ToastRequest::new("keep")))
            .expect("id");
        let id = registry.show(ToastRequest::new("remote")).expect("registered");
        provider.sync(Instant::now());

        registry.dismiss(id);
        provider.sync(Instant::now());
        assert!(!provider.queue().contains(id));
        assert!(provider.queue().contains(keep));

        registry.dismiss_all();
        provider.sync(Instant::now());
        assert!(provider.queue().is_empty());
    }

    #[test]
    fn handle_operations_apply_on_tick() {
        let (_registry, mut provider) = mount();
        let handle = provider.handle();

        let id = handle.show(ToastRequest::new("via handle"));
        assert!(!provider.queue().contains(id));

        provider.sync(Instant::now());
        assert!(provider.queue().contains(id));

        handle.dismiss(id);
        provider.sync(Instant::now());
        assert!(provider.queue().is_empty());
    }

    #[test]
    fn handle_dismiss_waits_for_tick_but_message_is_immediate() {
        let (_registry, mut provider) = mount();
        let handle = provider.handle();
        let first = provider
            .update(Message::Show(ToastRequest::new("first")))
            .expect("id");
        let second = provider
            .update(Message::Show(ToastRequest::new("second")))
            .expect("id");

        handle.dismiss(first);
        assert!(provider.queue().contains(first));

        provider.update(Message::Dismiss(second));
        assert!(!provider.queue().contains(second));

        provider.sync(Instant::now());
        assert!(!provider.queue().contains(first));
    }

    #[test]
    fn tick_expires_toasts() {
        let (_registry, mut provider) = mount();
        let id = provider
            .update(Message::Show(ToastRequest::new("brief").duration(ms(100))))
            .expect("id");
        let shown_at = provider.queue().get(id).expect("active").shown_at();

        provider.update(Message::Tick(shown_at + ms(50)));
        assert!(provider.queue().contains(id));

        provider.update(Message::Tick(shown_at + ms(150)));
        assert!(!provider.queue().contains(id));
    }

    #[test]
    fn dismiss_message_cancels_expiry() {
        let (_registry, mut provider) = mount();
        let id = provider
            .update(Message::Show(ToastRequest::new("long").duration(ms(1000))))
            .expect("id");
        let shown_at = provider.queue().get(id).expect("active").shown_at();

        provider.update(Message::Dismiss(id));
        assert!(provider.sync(shown_at + ms(1000)).is_empty());
        assert!(provider.queue().is_empty());
    }

    #[test]
    fn measurements_shift_following_toasts() {
        let (_registry, mut provider) = mount();
        let first = provider
            .update(Message::Show(ToastRequest::new("first").position(Position::Top)))
            .expect("id");
        let second = provider
            .update(Message::Show(ToastRequest::new("second").position(Position::Top)))
            .expect("id");

        let gap = provider.layout().gap();
        let estimated = Config::default().estimated_height();
        let tentative = provider.layout().offset(provider.queue().iter(), second);
        assert_eq!(tentative, Some(estimated + gap));

        provider.update(Message::Measured(first, Size::new(320.0, 80.0)));
        let measured = provider.layout().offset(provider.queue().iter(), second);
        assert_eq!(measured, Some(80.0 + gap));
    }

    #[test]
    fn measurements_for_unknown_toasts_are_ignored() {
        let (_registry, mut provider) = mount();
        let stray = ToastId::new();

        provider.update(Message::Measured(stray, Size::new(320.0, 80.0)));
        assert!(!provider.layout().is_measured(stray));
    }

    #[test]
    fn dismiss_all_message_clears_queue_and_layout() {
        let (_registry, mut provider) = mount();
        let id = provider
            .update(Message::Show(ToastRequest::new("a")))
            .expect("id");
        provider.update(Message::Show(ToastRequest::new("b")));
        provider.update(Message::Measured(id, Size::new(320.0, 50.0)));

        provider.update(Message::DismissAll);
        assert!(provider.queue().is_empty());
        assert!(!provider.layout().is_measured(id));
    }

    #[test]
    fn forwarded_dismissals_drop_measurements() {
        let (registry, mut provider) = mount();
        let handle = provider.handle();
        let ids: Vec<ToastId> = (0..10)
            .map(|i| handle.show(ToastRequest::new(format!("remote {i}"))))
            .collect();
        provider.sync(Instant::now());
        for id in &ids {
            provider.update(Message::Measured(*id, Size::new(320.0, 50.0)));
        }
        assert!(ids.iter().all(|id| provider.layout().is_measured(*id)));

        registry.dismiss(ids[0]);
        provider.sync(Instant::now());
        assert!(!provider.layout().is_measured(ids[0]));
        assert!(provider.layout().is_measured(ids[1]));

        registry.dismiss_all();
        provider.sync(Instant::now());
        assert!(provider.queue().is_empty());
        assert!(ids.iter().all(|id| !provider.layout().is_measured(*id)));
    }

    #[test]
    fn configured_estimated_height_seeds_layout() {
        let mut config = Config::default();
        config.layout.estimated_height = Some(90.0);
        let registry = Registry::new();
        let mut provider = Provider::mount_in(&registry, &config);

        let first = provider
            .update(Message::Show(ToastRequest::new("first")))
            .expect("id");
        let second = provider
            .update(Message::Show(ToastRequest::new("second")))
            .expect("id");

        assert_eq!(provider.layout().height_of(first), 90.0);
        let gap = provider.layout().gap();
        assert_eq!(
            provider.layout().offset(provider.queue().iter(), second),
            Some(90.0 + gap)
        );
    }

    #[test]
    fn view_renders_without_panicking() {
        let (_registry, mut provider) = mount();
        provider.update(Message::Show(ToastRequest::new("text")));
        provider.update(Message::Show(
            ToastRequest::from_content(Content::new("payload")).position(Position::Top),
        ));
        provider.update(Message::Show(ToastRequest::default()));

        let _element = provider.view(&|_content| text("custom").into());
    }
}
