// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for story navigation and playback bookkeeping.
//!
//! Measures the performance of:
//! - Parsing the story list wire format
//! - Walking a whole session with `next()`
//! - Driving the viewer state machine through one story

use criterion::{criterion_group, criterion_main, Criterion};
use iced_stories::application::query::{NavigationOutcome, StoryNavigator};
use iced_stories::config::PlaybackTiming;
use iced_stories::domain::{Story, StoryId, StoryUser, UserId};
use iced_stories::source;
use iced_stories::ui::story_viewer::{Message, State};
use std::hint::black_box;
use std::time::Instant;

fn sample_users(users: usize, stories: usize) -> Vec<StoryUser> {
    (0..users)
        .map(|u| StoryUser {
            id: UserId::new(u.to_string()),
            username: format!("user{u}"),
            avatar: format!("https://example.com/avatar/{u}.jpg"),
            stories: (0..stories)
                .map(|s| Story {
                    id: StoryId::new(format!("{u}-{s}")),
                    image: format!("https://example.com/{u}/{s}.jpg"),
                    timestamp: format!("{s}h"),
                })
                .collect(),
        })
        .collect()
}

fn bench_parse_users(c: &mut Criterion) {
    let mut group = c.benchmark_group("story_navigation");
    let json = serde_json::to_vec(&sample_users(200, 5)).unwrap();

    group.bench_function("parse_users", |b| {
        b.iter(|| black_box(source::parse_users(black_box(&json)).unwrap()));
    });

    group.finish();
}

/// Pure navigation time over 1000 stories, without image loading.
fn bench_walk_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("story_navigation");
    let mut navigator = StoryNavigator::new();
    navigator.set_users(sample_users(200, 5));

    group.bench_function("walk_session", |b| {
        b.iter(|| {
            navigator.select(&UserId::new("0"));
            while let NavigationOutcome::Moved(session) = navigator.next() {
                black_box(session);
            }
            navigator.close();
        });
    });

    group.finish();
}

/// One story from load to auto-advance at the default tick rate.
fn bench_viewer_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("story_navigation");
    let timing = PlaybackTiming::default();
    let ticks = (timing.story_duration.as_millis() / timing.tick_interval.as_millis()) as u32 + 1;

    group.bench_function("viewer_ticks_per_story", |b| {
        b.iter(|| {
            let t0 = Instant::now();
            let mut viewer = State::new(timing);
            viewer.show("story.jpg", t0);
            viewer.image_ready("story.jpg", t0);
            let start = t0 + timing.settle_delay;
            for i in 0..=ticks {
                let at = start + timing.tick_interval * i;
                black_box(viewer.handle(Message::Tick(viewer.generation()), at));
            }
            black_box(viewer.progress());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_users,
    bench_walk_session,
    bench_viewer_ticks
);
criterion_main!(benches);
