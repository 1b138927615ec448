/**
 * Suggestion Trigger Controller
 *
 * Decides, from live typing input, when a suggestion request should be
 * sent. Word boundaries (a trailing space or terminal punctuation) fire
 * immediately; anything else waits for a typing pause.
 *
 * The controller is a pure state machine: the embedding UI feeds it text
 * changes with the current `Instant` and drives `poll` from its own
 * timer/tick source. No I/O happens here, which keeps the timing rules
 * testable without a UI or a clock.
 */

use std::time::{Duration, Instant};

/// Typing pause after which a pending request fires
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(800);

/// Characters that end a sentence and fire a request immediately
const TERMINAL_PUNCTUATION: [char; 4] = ['.', '!', '?', '।'];

#[derive(Debug, Clone)]
struct Pending {
    text: String,
    deadline: Instant,
}

/// Debounce state machine for suggestion requests
///
/// # Rules
///
/// - Text ending in a space or terminal punctuation fires immediately and
///   cancels any pending timer.
/// - Any other text change (re)arms the debounce timer; the request fires
///   via [`poll`](Self::poll) once the pause elapses with no further input.
/// - Whitespace-only input clears pending state and never fires.
///
/// A new keystroke supersedes the pending timer but not an in-flight
/// network call; discarding a stale response is the caller's concern.
#[derive(Debug, Clone)]
pub struct TriggerController {
    pause: Duration,
    pending: Option<Pending>,
}

impl TriggerController {
    pub fn new() -> Self {
        Self::with_pause(DEFAULT_PAUSE)
    }

    pub fn with_pause(pause: Duration) -> Self {
        Self {
            pause,
            pending: None,
        }
    }

    /// Record a text change.
    ///
    /// Returns `Some(text)` when the change should fire a suggestion
    /// request right away; otherwise the request is deferred and will be
    /// returned by a later [`poll`](Self::poll).
    pub fn on_input(&mut self, text: &str, now: Instant) -> Option<String> {
        self.pending = None;

        if text.trim().is_empty() {
            return None;
        }

        if Self::is_boundary(text) {
            return Some(text.to_string());
        }

        self.pending = Some(Pending {
            text: text.to_string(),
            deadline: now + self.pause,
        });
        None
    }

    /// Check whether the debounce timer has expired.
    ///
    /// Returns `Some(text)` exactly once when the pause has elapsed with
    /// no further input since the last change.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            return self.pending.take().map(|p| p.text);
        }
        None
    }

    /// Deadline of the pending request, if one is armed.
    ///
    /// UIs can use this to schedule their next `poll` instead of ticking.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    fn is_boundary(text: &str) -> bool {
        text.ends_with(' ')
            || text
                .chars()
                .last()
                .is_some_and(|c| TERMINAL_PUNCTUATION.contains(&c))
    }
}

impl Default for TriggerController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_fires_immediately() {
        let mut controller = TriggerController::new();
        let now = Instant::now();
        assert_eq!(controller.on_input("hello ", now), Some("hello ".to_string()));
        assert!(controller.deadline().is_none());
    }

    #[test]
    fn test_terminal_punctuation_fires_immediately() {
        let mut controller = TriggerController::new();
        let now = Instant::now();
        assert!(controller.on_input("done.", now).is_some());
        assert!(controller.on_input("kya?", now).is_some());
        assert!(controller.on_input("चला।", now).is_some());
    }

    #[test]
    fn test_mid_word_defers_until_pause() {
        let mut controller = TriggerController::with_pause(Duration::from_millis(800));
        let now = Instant::now();

        assert!(controller.on_input("hel", now).is_none());
        assert!(controller.poll(now + Duration::from_millis(500)).is_none());

        let fired = controller.poll(now + Duration::from_millis(800));
        assert_eq!(fired, Some("hel".to_string()));
        // Fires exactly once
        assert!(controller.poll(now + Duration::from_millis(900)).is_none());
    }

    #[test]
    fn test_new_keystroke_resets_timer() {
        let mut controller = TriggerController::with_pause(Duration::from_millis(800));
        let start = Instant::now();

        assert!(controller.on_input("hel", start).is_none());
        assert!(controller
            .on_input("hell", start + Duration::from_millis(600))
            .is_none());

        // The first deadline has passed, but the second keystroke superseded it
        assert!(controller.poll(start + Duration::from_millis(900)).is_none());
        assert_eq!(
            controller.poll(start + Duration::from_millis(1400)),
            Some("hell".to_string())
        );
    }

    #[test]
    fn test_immediate_fire_cancels_pending() {
        let mut controller = TriggerController::with_pause(Duration::from_millis(800));
        let now = Instant::now();

        assert!(controller.on_input("hel", now).is_none());
        assert!(controller.on_input("hello ", now).is_some());
        assert!(controller.poll(now + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_whitespace_only_never_fires() {
        let mut controller = TriggerController::new();
        let now = Instant::now();

        assert!(controller.on_input("hel", now).is_none());
        assert!(controller.on_input("  ", now).is_none());
        assert!(controller.poll(now + Duration::from_secs(5)).is_none());
    }
}
