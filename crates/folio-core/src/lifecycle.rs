//! Request lifecycle shared by the demo widgets.
//!
//! Each widget owns one [`WidgetState`] and moves it through
//! `Idle -> Pending -> Settled`. A new attempt replaces the previous outcome
//! instead of merging with it.
//!
//! Every [`WidgetState::begin`] hands out a [`Ticket`] stamped with a
//! generation number. A settlement is only applied when its ticket is from the
//! latest generation and the widget is still pending, so a settlement can be
//! applied at most once and never to a later attempt.
//!
//! There is no cancellation: once a call is in flight the widget stays
//! `Pending` until that call settles.
//!
//! ```
//! use folio_core::lifecycle::WidgetState;
//!
//! let mut state: WidgetState<String> = WidgetState::new("Failed to generate image");
//! assert!(state.can_submit(true));
//!
//! let ticket = state.begin().unwrap();
//! assert!(!state.can_submit(true));
//!
//! state.settle(ticket, Ok::<_, String>("data:image/png;base64,XYZ".to_string()));
//! assert_eq!(state.result().map(String::as_str), Some("data:image/png;base64,XYZ"));
//! assert!(state.error().is_none());
//! ```

use std::fmt::Display;

/// Where a widget is in its request cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase<T> {
    #[default]
    Idle,
    Pending,
    Succeeded(T),
    Failed(String),
}

/// Proof that a settlement belongs to a specific attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a ticket is needed to settle the request"]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Request/pending/result/error state for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState<T> {
    phase: Phase<T>,
    generation: u64,
    fallback_error: &'static str,
}

impl<T> WidgetState<T> {
    /// `fallback_error` is shown when a failure carries no description.
    pub fn new(fallback_error: &'static str) -> Self {
        Self {
            phase: Phase::Idle,
            generation: 0,
            fallback_error,
        }
    }

    pub fn phase(&self) -> &Phase<T> {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending)
    }

    /// Submit is enabled only with the required input and no call in flight.
    pub fn can_submit(&self, input_ready: bool) -> bool {
        input_ready && !self.is_pending()
    }

    /// Enters `Pending`, clearing the previous outcome.
    ///
    /// Returns `None` while an attempt is already in flight.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.is_pending() {
            return None;
        }
        self.generation += 1;
        self.phase = Phase::Pending;
        Some(Ticket(self.generation))
    }

    /// Applies the outcome of the attempt identified by `ticket`.
    ///
    /// Returns `false` (and changes nothing) when the ticket is stale or
    /// already settled.
    pub fn settle<E: Display>(&mut self, ticket: Ticket, outcome: Result<T, E>) -> bool {
        if ticket.0 != self.generation || !self.is_pending() {
            tracing::debug!(
                "Discarding stale settlement (generation {} != {})",
                ticket.0,
                self.generation
            );
            return false;
        }

        self.phase = match outcome {
            Ok(value) => Phase::Succeeded(value),
            Err(err) => {
                let message = err.to_string();
                if message.trim().is_empty() {
                    Phase::Failed(self.fallback_error.to_string())
                } else {
                    Phase::Failed(message)
                }
            }
        };
        true
    }

    /// Drops a settled result or error, returning to `Idle`.
    ///
    /// Does nothing while a call is in flight; that call still settles.
    pub fn clear_result(&mut self) {
        if !self.is_pending() {
            self.phase = Phase::Idle;
        }
    }

    pub fn result(&self) -> Option<&T> {
        match &self.phase {
            Phase::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> WidgetState<u32> {
        WidgetState::new("Something went wrong")
    }

    #[test]
    fn test_submit_disabled_without_input() {
        let state = state();
        assert!(!state.can_submit(false));
        assert!(state.can_submit(true));
    }

    #[test]
    fn test_submit_disabled_while_pending() {
        let mut state = state();
        let _ticket = state.begin().unwrap();
        assert!(state.is_pending());
        assert!(!state.can_submit(true));
        assert!(state.begin().is_none());
    }

    #[test]
    fn test_success_then_error_never_both() {
        let mut state = state();
        let ticket = state.begin().unwrap();
        assert!(state.settle(ticket, Ok::<_, String>(7)));
        assert_eq!(state.result(), Some(&7));
        assert!(state.error().is_none());

        let ticket = state.begin().unwrap();
        assert!(state.result().is_none(), "begin clears previous result");
        assert!(state.settle(ticket, Err::<u32, _>("quota exceeded")));
        assert_eq!(state.error(), Some("quota exceeded"));
        assert!(state.result().is_none());
    }

    #[test]
    fn test_empty_error_uses_fallback() {
        let mut state = state();
        let ticket = state.begin().unwrap();
        state.settle(ticket, Err::<u32, _>(""));
        assert_eq!(state.error(), Some("Something went wrong"));
    }

    #[test]
    fn test_stale_ticket_discarded() {
        let mut state = state();
        let first = state.begin().unwrap();
        assert!(state.settle(first, Ok::<_, String>(1)));
        let second = state.begin().unwrap();

        assert!(!state.settle(first, Ok::<_, String>(9)));
        assert!(state.is_pending());

        assert!(state.settle(second, Ok::<_, String>(2)));
        assert_eq!(state.result(), Some(&2));
        assert_ne!(first.generation(), second.generation());
    }

    #[test]
    fn test_ticket_settles_once() {
        let mut state = state();
        let ticket = state.begin().unwrap();
        assert!(state.settle(ticket, Ok::<_, String>(1)));
        assert!(!state.settle(ticket, Err::<u32, _>("late")));
        assert_eq!(state.result(), Some(&1));
    }

    #[test]
    fn test_clear_result_returns_to_idle() {
        let mut state = state();
        let ticket = state.begin().unwrap();
        state.settle(ticket, Ok::<_, String>(3));
        state.clear_result();
        assert_eq!(state.phase(), &Phase::Idle);
        assert!(state.can_submit(true));
    }

    #[test]
    fn test_clear_result_keeps_call_in_flight() {
        let mut state = state();
        let ticket = state.begin().unwrap();
        state.clear_result();

        assert!(state.is_pending());
        assert!(!state.can_submit(true));
        assert!(state.begin().is_none());

        assert!(state.settle(ticket, Ok::<_, String>(4)));
        assert_eq!(state.result(), Some(&4));
        assert!(state.can_submit(true));
    }
}
