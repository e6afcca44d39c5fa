// SPDX-License-Identifier: MPL-2.0
//! Story viewer state machine.
//!
//! ```text
//!            show()                 image ready + settle delay
//!   Closed ─────────► Loading ───────────────────────────────► Playing ◄──┐
//!                       │  ▲                                    │ press │ release / pointer left
//!         error/timeout │  │ show()                             ▼       │
//!                       ▼  │                                  Paused ───┘
//!                     Failed
//!
//!   any open phase ── close / Escape / end of list ──► Closing ── close delay ──► Closed
//! ```
//!
//! The viewer never navigates by itself: it emits [`Effect::Next`] and
//! [`Effect::Previous`] and the owner answers with [`State::show`] (or
//! [`State::begin_close`] when the list is exhausted).
//!
//! Time is always passed in, so every transition can be driven from tests.
//! Deadlines (settle, auto-advance, load timeout, close delay) are checked
//! on [`Message::Tick`]; ticks tagged with an older [`Generation`] are
//! dropped.

use super::clock::PlaybackClock;
use crate::config::PlaybackTiming;
use crate::domain::{Generation, Progress};
use crate::error::{Error, FetchError};
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Length of the fade-in when the viewer opens.
const FADE_IN: Duration = Duration::from_millis(300);

/// Spinner speed in radians per second.
const SPINNER_SPEED: f32 = TAU;

/// Viewer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Image of the current story is not ready yet (or settling).
    Loading,
    Playing,
    /// Pointer held down while playing.
    Paused,
    /// Image could not be loaded; no auto-advance.
    Failed,
    /// Exit animation in flight; input is ignored.
    Closing,
    Closed,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick from the viewer's timer subscription.
    Tick(Generation),
    /// Pointer pressed on the story surface.
    Pressed,
    /// Pointer released on the story surface.
    Released,
    /// Pointer moved over the story surface (`x` relative to its left edge).
    CursorMoved { x: f32, width: f32 },
    /// Pointer left the story surface.
    PointerLeft,
    Next,
    Previous,
    Close,
}

/// Requests emitted to the owner of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Next,
    Previous,
    /// Close delay elapsed; tear down the session.
    Closed,
}

#[derive(Debug, Clone, Copy, Default)]
struct Pointer {
    held: bool,
    x: Option<f32>,
    width: f32,
}

impl Pointer {
    /// Left half navigates back. An unknown position counts as the right half.
    fn on_left_half(&self) -> bool {
        match self.x {
            Some(x) if self.width > 0.0 => x < self.width / 2.0,
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct State {
    timing: PlaybackTiming,
    phase: Phase,
    generation: Generation,
    image_uri: String,
    clock: PlaybackClock,
    progress: Progress,
    loading_since: Option<Instant>,
    settle_at: Option<Instant>,
    closing_since: Option<Instant>,
    opened_at: Option<Instant>,
    failure: Option<Error>,
    pointer: Pointer,
    advance_requested: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(PlaybackTiming::default())
    }
}

impl State {
    #[must_use]
    pub fn new(timing: PlaybackTiming) -> Self {
        Self {
            timing,
            phase: Phase::Closed,
            generation: Generation::default(),
            image_uri: String::new(),
            clock: PlaybackClock::default(),
            progress: Progress::ZERO,
            loading_since: None,
            settle_at: None,
            closing_since: None,
            opened_at: None,
            failure: None,
            pointer: Pointer::default(),
            advance_requested: false,
        }
    }

    #[must_use]
    pub fn timing(&self) -> PlaybackTiming {
        self.timing
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Tag expected on incoming ticks.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// URI of the image the current story is waiting for or showing.
    #[must_use]
    pub fn image_uri(&self) -> &str {
        &self.image_uri
    }

    #[must_use]
    pub fn failure(&self) -> Option<&Error> {
        self.failure.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    /// Whether the timer subscription should run.
    ///
    /// Paused and failed stories need no ticks, except to finish the
    /// opening fade.
    #[must_use]
    pub fn is_ticking(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Loading | Phase::Playing | Phase::Closing => true,
            Phase::Paused | Phase::Failed => self.is_fading_in(now),
            Phase::Closed => false,
        }
    }

    fn is_fading_in(&self, now: Instant) -> bool {
        self.opened_at
            .is_some_and(|opened| now.saturating_duration_since(opened) < FADE_IN)
    }

    /// Shows a story: enters `Loading` with progress at zero and cancels
    /// every pending timer.
    pub fn show(&mut self, image_uri: impl Into<String>, now: Instant) {
        if matches!(self.phase, Phase::Closed | Phase::Closing) {
            self.opened_at = Some(now);
        }
        self.phase = Phase::Loading;
        self.image_uri = image_uri.into();
        self.clock.reset();
        self.progress = Progress::ZERO;
        self.loading_since = Some(now);
        self.settle_at = None;
        self.closing_since = None;
        self.failure = None;
        self.pointer.held = false;
        self.advance_requested = false;
        self.bump_generation();
    }

    /// Reports that `uri` finished loading. Playback starts after the settle
    /// delay. Returns `false` when the image belongs to another story.
    pub fn image_ready(&mut self, uri: &str, now: Instant) -> bool {
        if self.phase != Phase::Loading || uri != self.image_uri || self.settle_at.is_some() {
            return false;
        }
        self.settle_at = Some(now + self.timing.settle_delay);
        true
    }

    /// Reports that `uri` could not be loaded. Returns `false` when the
    /// image belongs to another story.
    pub fn image_failed(&mut self, uri: &str, error: Error) -> bool {
        if self.phase != Phase::Loading || uri != self.image_uri {
            return false;
        }
        self.fail(error);
        true
    }

    /// Starts the exit delay. No-op when already closing or closed.
    pub fn begin_close(&mut self, now: Instant) {
        if matches!(self.phase, Phase::Closing | Phase::Closed) {
            return;
        }
        self.clock.pause(now);
        self.pointer.held = false;
        self.phase = Phase::Closing;
        self.closing_since = Some(now);
        self.bump_generation();
    }

    pub fn handle(&mut self, message: Message, now: Instant) -> Effect {
        if message_is_input(&message) && matches!(self.phase, Phase::Closing | Phase::Closed) {
            return Effect::None;
        }

        match message {
            Message::Tick(generation) => {
                if generation != self.generation {
                    return Effect::None;
                }
                self.on_tick(now)
            }
            Message::CursorMoved { x, width } => {
                self.pointer.x = Some(x);
                self.pointer.width = width;
                Effect::None
            }
            Message::Pressed => {
                self.pointer.held = true;
                if self.phase == Phase::Playing {
                    self.clock.pause(now);
                    self.phase = Phase::Paused;
                    self.bump_generation();
                }
                Effect::None
            }
            Message::Released => {
                if !self.pointer.held {
                    return Effect::None;
                }
                self.pointer.held = false;
                self.resume_if_paused(now);
                if self.pointer.on_left_half() {
                    Effect::Previous
                } else {
                    Effect::Next
                }
            }
            Message::PointerLeft => {
                self.pointer.x = None;
                if self.pointer.held {
                    self.pointer.held = false;
                    self.resume_if_paused(now);
                }
                Effect::None
            }
            Message::Next => Effect::Next,
            Message::Previous => Effect::Previous,
            Message::Close => {
                self.begin_close(now);
                Effect::None
            }
        }
    }

    fn on_tick(&mut self, now: Instant) -> Effect {
        match self.phase {
            Phase::Loading => {
                if let Some(settle_at) = self.settle_at {
                    if now >= settle_at {
                        self.start_playback(now);
                    }
                } else if let Some(since) = self.loading_since {
                    if now.saturating_duration_since(since) >= self.timing.image_load_timeout {
                        let secs = self.timing.image_load_timeout.as_secs();
                        log::warn!("Story image {} timed out after {secs}s", self.image_uri);
                        self.fail(FetchError::TimedOut(secs).into());
                    }
                }
                Effect::None
            }
            Phase::Playing => {
                let elapsed = self.clock.elapsed(now);
                self.progress = Progress::from_elapsed(elapsed, self.timing.story_duration);
                if elapsed >= self.timing.story_duration && !self.advance_requested {
                    self.progress = Progress::COMPLETE;
                    self.advance_requested = true;
                    return Effect::Next;
                }
                Effect::None
            }
            Phase::Closing => {
                let done = self
                    .closing_since
                    .is_none_or(|since| now.saturating_duration_since(since) >= self.timing.close_delay);
                if done {
                    self.close_now();
                    return Effect::Closed;
                }
                Effect::None
            }
            Phase::Paused | Phase::Failed | Phase::Closed => Effect::None,
        }
    }

    fn start_playback(&mut self, now: Instant) {
        self.settle_at = None;
        self.loading_since = None;
        self.progress = Progress::ZERO;
        if self.pointer.held {
            self.clock = PlaybackClock::default();
            self.phase = Phase::Paused;
            self.bump_generation();
        } else {
            self.clock = PlaybackClock::started(now);
            self.phase = Phase::Playing;
        }
    }

    fn resume_if_paused(&mut self, now: Instant) {
        if self.phase == Phase::Paused {
            self.clock.resume(now);
            self.phase = Phase::Playing;
            self.bump_generation();
        }
    }

    fn fail(&mut self, error: Error) {
        self.phase = Phase::Failed;
        self.failure = Some(error);
        self.settle_at = None;
        self.loading_since = None;
        self.progress = Progress::ZERO;
        self.bump_generation();
    }

    fn close_now(&mut self) {
        self.phase = Phase::Closed;
        self.image_uri.clear();
        self.clock.reset();
        self.progress = Progress::ZERO;
        self.closing_since = None;
        self.opened_at = None;
        self.failure = None;
        self.pointer = Pointer::default();
        self.bump_generation();
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.next();
    }

    /// Spinner angle for the loading indicator.
    #[must_use]
    pub fn spinner_rotation(&self, now: Instant) -> f32 {
        let elapsed = self
            .loading_since
            .map_or(0.0, |since| now.saturating_duration_since(since).as_secs_f32());
        (elapsed * SPINNER_SPEED) % TAU
    }

    /// Overall viewer opacity: fades in on open and out while closing.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Closed => 0.0,
            Phase::Closing => {
                let delay = self.timing.close_delay.as_secs_f32();
                let since = self
                    .closing_since
                    .map_or(delay, |since| now.saturating_duration_since(since).as_secs_f32());
                if delay <= 0.0 {
                    0.0
                } else {
                    (1.0 - since / delay).clamp(0.0, 1.0)
                }
            }
            _ => self.opened_at.map_or(1.0, |opened| {
                (now.saturating_duration_since(opened).as_secs_f32() / FADE_IN.as_secs_f32())
                    .clamp(0.0, 1.0)
            }),
        }
    }
}

fn message_is_input(message: &Message) -> bool {
    !matches!(message, Message::Tick(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn timing() -> PlaybackTiming {
        PlaybackTiming {
            story_duration: ms(5000),
            tick_interval: ms(50),
            settle_delay: ms(100),
            close_delay: ms(200),
            image_load_timeout: Duration::from_secs(10),
        }
    }

    /// Viewer showing `a.jpg`, image ready at `t0` and playing from `t0 + 100ms`.
    fn playing(t0: Instant) -> State {
        let mut state = State::new(timing());
        state.show("a.jpg", t0);
        assert!(state.image_ready("a.jpg", t0));
        tick(&mut state, t0 + ms(100));
        assert_eq!(state.phase(), Phase::Playing);
        state
    }

    fn tick(state: &mut State, at: Instant) -> Effect {
        let generation = state.generation();
        state.handle(Message::Tick(generation), at)
    }

    #[test]
    fn new_viewer_is_closed_and_idle() {
        let state = State::default();
        assert_eq!(state.phase(), Phase::Closed);
        assert!(!state.is_open());
        assert!(!state.is_ticking(Instant::now()));
    }

    #[test]
    fn show_enters_loading_with_zero_progress() {
        let t0 = Instant::now();
        let mut state = playing(t0);
        tick(&mut state, t0 + ms(2000));
        assert!(state.progress().value() > 0.0);

        state.show("b.jpg", t0 + ms(2000));
        assert_eq!(state.phase(), Phase::Loading);
        assert_eq!(state.progress(), Progress::ZERO);
        assert_eq!(state.image_uri(), "b.jpg");
    }

    #[test]
    fn playback_waits_for_settle_delay() {
        let t0 = Instant::now();
        let mut state = State::new(timing());
        state.show("a.jpg", t0);
        state.image_ready("a.jpg", t0 + ms(500));

        tick(&mut state, t0 + ms(550));
        assert_eq!(state.phase(), Phase::Loading);
        tick(&mut state, t0 + ms(600));
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.progress(), Progress::ZERO);
    }

    #[test]
    fn image_for_another_story_is_ignored() {
        let t0 = Instant::now();
        let mut state = State::new(timing());
        state.show("a.jpg", t0);
        assert!(!state.image_ready("b.jpg", t0));
        assert!(!state.image_failed("b.jpg", Error::Image("bad".into())));
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn progress_is_linear_and_monotone() {
        let t0 = Instant::now();
        let mut state = playing(t0);
        let start = t0 + ms(100);

        let mut last = Progress::ZERO;
        for step in 1..=40 {
            tick(&mut state, start + ms(step * 100));
            assert!(state.progress() >= last);
            last = state.progress();
        }
        assert!((last.value() - 80.0).abs() < 0.01);
    }

    #[test]
    fn auto_advance_fires_once_at_duration() {
        let t0 = Instant::now();
        let mut state = playing(t0);
        let start = t0 + ms(100);

        assert_eq!(tick(&mut state, start + ms(4950)), Effect::None);
        assert_eq!(tick(&mut state, start + ms(5000)), Effect::Next);
        assert!(state.progress().is_complete());
        assert_eq!(tick(&mut state, start + ms(5050)), Effect::None);
    }

    #[test]
    fn stale_ticks_never_change_state() {
        let t0 = Instant::now();
        let mut state = playing(t0);
        let stale = state.generation();

        state.show("b.jpg", t0 + ms(1000));
        let before = state.clone();
        let effect = state.handle(Message::Tick(stale), t0 + ms(20_000));

        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), before.phase());
        assert_eq!(state.progress(), before.progress());
    }

    #[test]
    fn press_pauses_and_freezes_progress() {
        let t0 = Instant::now();
        let mut state = playing(t0);
        let start = t0 + ms(100);
        tick(&mut state, start + ms(1000));

        state.handle(Message::Pressed, start + ms(1000));
        assert_eq!(state.phase(), Phase::Paused);
        assert!(!state.is_ticking(start + ms(5000)));

        let frozen = state.progress();
        assert_eq!(tick(&mut state, start + ms(9000)), Effect::None);
        assert_eq!(state.progress(), frozen);
    }

    #[test]
    fn pointer_leaving_resumes_without_navigation_or_jump_back() {
        let t0 = Instant::now();
        let mut state = playing(t0);
        let start = t0 + ms(100);
        tick(&mut state, start + ms(2000));
        let before_pause = state.progress();

        state.handle(Message::Pressed, start + ms(2000));
        assert_eq!(state.handle(Message::PointerLeft, start + ms(7000)), Effect::None);
        assert_eq!(state.phase(), Phase::Playing);

        tick(&mut state, start + ms(7050));
        assert!(state.progress() >= before_pause);
        assert!((state.progress().value() - 41.0).abs() < 0.01);
    }

    #[test]
    fn release_on_left_half_goes_back() {
        let t0 = Instant::now();
        let mut state = playing(t0);
        state.handle(Message::CursorMoved { x: 100.0, width: 400.0 }, t0);
        state.handle(Message::Pressed, t0 + ms(500));
        assert_eq!(state.handle(Message::Released, t0 + ms(600)), Effect::Previous);
    }

    #[test]
    fn release_on_right_half_goes_forward() {
        let t0 = Instant::now();
        let mut state = playing(t0);
        state.handle(Message::CursorMoved { x: 200.0, width: 400.0 }, t0);
        state.handle(Message::Pressed, t0 + ms(500));
        assert_eq!(state.handle(Message::Released, t0 + ms(600)), Effect::Next);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let t0 = Instant::now();
        let mut state = playing(t0);
        assert_eq!(state.handle(Message::Released, t0 + ms(300)), Effect::None);
    }

    #[test]
    fn release_after_pointer_left_does_not_navigate() {
        let t0 = Instant::now();
        let mut state = playing(t0);
        state.handle(Message::Pressed, t0 + ms(300));
        state.handle(Message::PointerLeft, t0 + ms(400));
        assert_eq!(state.handle(Message::Released, t0 + ms(500)), Effect::None);
    }

    #[test]
    fn press_during_loading_starts_paused_after_settle() {
        let t0 = Instant::now();
        let mut state = State::new(timing());
        state.show("a.jpg", t0);
        state.handle(Message::Pressed, t0 + ms(10));
        state.image_ready("a.jpg", t0 + ms(20));
        tick(&mut state, t0 + ms(150));

        assert_eq!(state.phase(), Phase::Paused);
        assert_eq!(state.progress(), Progress::ZERO);
    }

    #[test]
    fn keyboard_navigation_is_forwarded() {
        let t0 = Instant::now();
        let mut state = playing(t0);
        assert_eq!(state.handle(Message::Next, t0), Effect::Next);
        assert_eq!(state.handle(Message::Previous, t0), Effect::Previous);
    }

    #[test]
    fn close_waits_for_close_delay_and_ignores_input() {
        let t0 = Instant::now();
        let mut state = playing(t0);

        state.handle(Message::Close, t0 + ms(1000));
        assert_eq!(state.phase(), Phase::Closing);
        assert_eq!(state.handle(Message::Next, t0 + ms(1050)), Effect::None);
        assert_eq!(state.handle(Message::Pressed, t0 + ms(1050)), Effect::None);
        assert_eq!(state.phase(), Phase::Closing);

        assert_eq!(tick(&mut state, t0 + ms(1150)), Effect::None);
        assert_eq!(tick(&mut state, t0 + ms(1200)), Effect::Closed);
        assert_eq!(state.phase(), Phase::Closed);
        assert!(!state.is_open());
    }

    #[test]
    fn begin_close_twice_keeps_first_deadline() {
        let t0 = Instant::now();
        let mut state = playing(t0);
        state.begin_close(t0 + ms(1000));
        state.begin_close(t0 + ms(1150));
        assert_eq!(tick(&mut state, t0 + ms(1200)), Effect::Closed);
    }

    #[test]
    fn load_timeout_moves_to_failed() {
        let t0 = Instant::now();
        let mut state = State::new(timing());
        state.show("slow.jpg", t0);

        tick(&mut state, t0 + ms(9_950));
        assert_eq!(state.phase(), Phase::Loading);
        tick(&mut state, t0 + ms(10_000));
        assert_eq!(state.phase(), Phase::Failed);
        assert!(matches!(
            state.failure(),
            Some(Error::Fetch(FetchError::TimedOut(10)))
        ));
    }

    #[test]
    fn failed_story_never_auto_advances_but_accepts_navigation() {
        let t0 = Instant::now();
        let mut state = State::new(timing());
        state.show("a.jpg", t0);
        state.image_failed("a.jpg", Error::Image("corrupt".into()));
        assert_eq!(state.phase(), Phase::Failed);

        for step in 1..=200 {
            assert_eq!(tick(&mut state, t0 + ms(step * 100)), Effect::None);
        }
        assert_eq!(state.handle(Message::Next, t0 + ms(30_000)), Effect::Next);

        state.handle(Message::Pressed, t0 + ms(30_000));
        assert_eq!(state.handle(Message::Released, t0 + ms(30_100)), Effect::Next);
    }

    #[test]
    fn late_image_after_failure_is_ignored() {
        let t0 = Instant::now();
        let mut state = State::new(timing());
        state.show("a.jpg", t0);
        tick(&mut state, t0 + ms(10_000));
        assert!(!state.image_ready("a.jpg", t0 + ms(10_500)));
        assert_eq!(state.phase(), Phase::Failed);
    }

    #[test]
    fn every_transition_bumps_generation() {
        let t0 = Instant::now();
        let mut state = State::new(timing());
        let mut seen = vec![state.generation()];

        state.show("a.jpg", t0);
        seen.push(state.generation());
        state.image_ready("a.jpg", t0);
        tick(&mut state, t0 + ms(100));
        state.handle(Message::Pressed, t0 + ms(200));
        seen.push(state.generation());
        state.handle(Message::Released, t0 + ms(300));
        seen.push(state.generation());
        state.begin_close(t0 + ms(400));
        seen.push(state.generation());

        let unique: std::collections::HashSet<_> = seen.iter().collect();
        assert_eq!(unique.len(), seen.len());
    }

    #[test]
    fn opacity_fades_in_and_out() {
        let t0 = Instant::now();
        let mut state = State::new(timing());
        state.show("a.jpg", t0);
        assert_eq!(state.opacity(t0), 0.0);
        assert!((state.opacity(t0 + ms(150)) - 0.5).abs() < 0.01);
        assert_eq!(state.opacity(t0 + ms(400)), 1.0);

        state.begin_close(t0 + ms(1000));
        assert!((state.opacity(t0 + ms(1100)) - 0.5).abs() < 0.01);
        assert_eq!(state.opacity(t0 + ms(1300)), 0.0);
    }

    #[test]
    fn showing_next_story_keeps_viewer_visible() {
        let t0 = Instant::now();
        let mut state = playing(t0);
        state.show("b.jpg", t0 + ms(2000));
        assert_eq!(state.opacity(t0 + ms(2000)), 1.0);
    }

    #[test]
    fn spinner_rotation_stays_within_full_turn() {
        let t0 = Instant::now();
        let mut state = State::new(timing());
        state.show("a.jpg", t0);
        let angle = state.spinner_rotation(t0 + ms(2750));
        assert!((0.0..TAU).contains(&angle));
    }
}
