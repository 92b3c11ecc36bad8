// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::{self, Config};
use iced_toast::toast::{Body, Content, Position, Queue, Status, ToastRequest};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn test_fifo_stacking_per_position() {
    let mut queue = Queue::new();
    let a = queue.show(ToastRequest::new("A"));
    let top = queue.show(ToastRequest::new("T").position(Position::Top));
    let b = queue.show(ToastRequest::new("B"));
    let c = queue.show(ToastRequest::new("C"));

    assert_eq!(
        [queue.rank(a), queue.rank(b), queue.rank(c)],
        [Some(0), Some(1), Some(2)]
    );
    assert_eq!(queue.rank(top), Some(0));

    queue.dismiss(b);
    assert_eq!([queue.rank(a), queue.rank(c)], [Some(0), Some(1)]);
    assert_eq!(queue.rank(top), Some(0));
}

#[test]
fn test_lifecycle_with_mixed_durations() {
    let mut queue = Queue::new();
    let start = Instant::now();
    let quick = queue.show_at(ToastRequest::success("quick").duration(ms(100)), start);
    let dismissed = queue.show_at(ToastRequest::new("dismissed").duration(ms(1000)), start);
    let slow = queue.show_at(ToastRequest::new("slow"), start);

    queue.advance(start + ms(10));
    queue.dismiss(dismissed);

    assert!(queue.contains(quick));
    assert_eq!(queue.advance(start + ms(150)), vec![quick]);
    assert!(queue.advance(start + ms(1000)).is_empty());
    assert_eq!(queue.advance(start + ms(2000)), vec![slow]);
    assert!(queue.is_empty());
}

#[test]
fn test_many_shows_in_one_tick_get_distinct_ids() {
    let mut queue = Queue::new();
    let now = Instant::now();
    let ids: HashSet<_> = (0..1000)
        .map(|_| queue.show_at(ToastRequest::default(), now))
        .collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn test_content_wins_over_message() {
    let mut queue = Queue::new();
    let id = queue.show(
        ToastRequest::new("fallback")
            .with_content(Content::new(String::from("rich")))
            .status(Status::Warning),
    );

    let toast = queue.get(id).expect("toast is active");
    assert!(matches!(toast.body(), Body::Content(c) if c.downcast_ref::<String>().is_some()));
}

#[test]
fn test_config_defaults_flow_into_queue() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[toast]\nduration_ms = 900\nposition = \"top\"\nstatus = \"success\"\n",
    )
    .expect("Failed to write config file");

    let config: Config = config::load_from_path(&path).expect("Failed to load config");
    let mut queue = Queue::with_defaults(config.defaults());
    let id = queue.show(ToastRequest::new("configured"));

    let toast = queue.get(id).expect("toast is active");
    assert_eq!(toast.duration(), ms(900));
    assert_eq!(toast.position(), Position::Top);
    assert_eq!(toast.status(), Status::Success);
}
