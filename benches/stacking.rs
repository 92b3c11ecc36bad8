// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for rank and offset computation over a busy queue.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toast::toast::{stacking, Layout, Position, Queue, ToastRequest};
use std::hint::black_box;

fn filled_queue(size: usize) -> Queue {
    let mut queue = Queue::new();
    for i in 0..size {
        let position = if i % 3 == 0 {
            Position::Top
        } else {
            Position::Bottom
        };
        queue.show(ToastRequest::new(format!("toast {i}")).position(position));
    }
    queue
}

fn bench_stacking(c: &mut Criterion) {
    let queue = filled_queue(64);
    let last = queue.iter().last().map(|t| t.id()).expect("non-empty queue");
    let layout = Layout::new(8.0, 44.0);

    c.bench_function("rank_last_of_64", |b| {
        b.iter(|| stacking::rank(black_box(queue.iter()), black_box(last)))
    });

    c.bench_function("ranks_all_64", |b| {
        b.iter(|| stacking::ranks(black_box(queue.iter())))
    });

    c.bench_function("offsets_all_64", |b| {
        b.iter(|| layout.offsets(black_box(queue.iter())))
    });
}

fn bench_show_dismiss(c: &mut Criterion) {
    c.bench_function("show_then_dismiss", |b| {
        let mut queue = filled_queue(16);
        b.iter(|| {
            let id = queue.show(ToastRequest::new("bench"));
            queue.dismiss(black_box(id))
        })
    });
}

criterion_group!(benches, bench_stacking, bench_show_dismiss);
criterion_main!(benches);
