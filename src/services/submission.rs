//! Simulated contact form submission.
//!
//! Nothing is sent anywhere. A valid submit walks the send button through
//! `Idle -> Sending -> Sent -> Idle`, each step driven by a timer.

use std::cell::RefCell;
use std::rc::Rc;

use super::scheduler::{Millis, Scheduler};
use crate::models::{ContactDraft, ValidationErrors};

pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_LABEL: &str = "Message Sent!";

const IDLE_BACKGROUND: &str = "linear-gradient(45deg, #dc2626, #ef4444)";
const SENT_BACKGROUND: &str = "linear-gradient(45deg, #10b981, #059669)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// How long the button stays in each timed phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTimings {
    pub sending_ms: Millis,
    pub sent_ms: Millis,
}

impl Default for SubmitTimings {
    fn default() -> Self {
        Self {
            sending_ms: 1500,
            sent_ms: 2000,
        }
    }
}

impl SubmitPhase {
    /// Phase entered once this one's timer elapses.
    pub fn next(self) -> SubmitPhase {
        match self {
            SubmitPhase::Idle => SubmitPhase::Idle,
            SubmitPhase::Sending => SubmitPhase::Sent,
            SubmitPhase::Sent => SubmitPhase::Idle,
        }
    }

    /// Time spent in this phase before moving on. `Idle` waits for the user.
    pub fn hold(self, timings: &SubmitTimings) -> Option<Millis> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Sending => Some(timings.sending_ms),
            SubmitPhase::Sent => Some(timings.sent_ms),
        }
    }

    pub fn is_busy(self) -> bool {
        self != SubmitPhase::Idle
    }

    /// The button stays disabled until the sequence is back to `Idle`.
    pub fn is_disabled(self) -> bool {
        self.is_busy()
    }

    pub fn label(self, idle_label: &str) -> &str {
        match self {
            SubmitPhase::Idle => idle_label,
            SubmitPhase::Sending => SENDING_LABEL,
            SubmitPhase::Sent => SENT_LABEL,
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            SubmitPhase::Sent => SENT_BACKGROUND,
            SubmitPhase::Idle | SubmitPhase::Sending => IDLE_BACKGROUND,
        }
    }
}

type PhaseSink = Rc<RefCell<dyn FnMut(SubmitPhase)>>;

/// Start the sequence: `on_phase(Sending)` runs immediately, then `Sent` and
/// finally `Idle` as their timers elapse. There is no way to stop it once
/// started.
pub fn run_submission(
    scheduler: Rc<dyn Scheduler>,
    timings: SubmitTimings,
    on_phase: impl FnMut(SubmitPhase) + 'static,
) {
    let on_phase: PhaseSink = Rc::new(RefCell::new(on_phase));
    enter(scheduler, timings, SubmitPhase::Sending, on_phase);
}

fn enter(
    scheduler: Rc<dyn Scheduler>,
    timings: SubmitTimings,
    phase: SubmitPhase,
    on_phase: PhaseSink,
) {
    (on_phase.borrow_mut())(phase);

    let Some(hold) = phase.hold(&timings) else {
        return;
    };
    let next = phase.next();
    let handle = scheduler.clone();
    scheduler.schedule(
        hold,
        Box::new(move || enter(handle, timings, next, on_phase)),
    );
}

/// State a contact form exposes to [`submit_contact`].
///
/// Handles are cheap to clone; the clone kept by a running sequence must
/// write to the same form.
pub trait ContactFormHandle: Clone + 'static {
    fn phase(&self) -> SubmitPhase;
    fn set_phase(&self, phase: SubmitPhase);
    fn draft(&self) -> ContactDraft;
    fn set_errors(&self, errors: ValidationErrors);
    fn clear_fields(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A send was already running; nothing changed.
    Ignored,
    Rejected(ValidationErrors),
    Sending,
}

/// Handle one press of the send button.
///
/// Errors from the previous attempt are cleared first. A valid draft starts
/// the timed sequence, and the fields are emptied when it returns to `Idle`.
pub fn submit_contact<F: ContactFormHandle>(
    form: &F,
    scheduler: Rc<dyn Scheduler>,
    timings: SubmitTimings,
) -> SubmitOutcome {
    if form.phase().is_busy() {
        return SubmitOutcome::Ignored;
    }

    form.set_errors(ValidationErrors::default());

    match form.draft().validate() {
        Err(errors) => {
            form.set_errors(errors.clone());
            SubmitOutcome::Rejected(errors)
        }
        Ok(_) => {
            let form = form.clone();
            run_submission(scheduler, timings, move |phase| {
                form.set_phase(phase);
                if phase == SubmitPhase::Idle {
                    form.clear_fields();
                }
            });
            SubmitOutcome::Sending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_cycle_back_to_idle() {
        assert_eq!(SubmitPhase::Sending.next(), SubmitPhase::Sent);
        assert_eq!(SubmitPhase::Sent.next(), SubmitPhase::Idle);
        assert_eq!(SubmitPhase::Idle.next(), SubmitPhase::Idle);
    }

    #[test]
    fn labels_per_phase() {
        assert_eq!(SubmitPhase::Idle.label("Send Message"), "Send Message");
        assert_eq!(SubmitPhase::Sending.label("Send Message"), "Sending...");
        assert_eq!(SubmitPhase::Sent.label("Send Message"), "Message Sent!");
    }

    #[test]
    fn only_idle_accepts_input() {
        assert!(!SubmitPhase::Idle.is_disabled());
        assert!(SubmitPhase::Sending.is_disabled());
        assert!(SubmitPhase::Sent.is_disabled());
    }

    #[test]
    fn success_styling_only_while_sent() {
        assert_eq!(SubmitPhase::Sent.background(), SENT_BACKGROUND);
        assert_eq!(SubmitPhase::Idle.background(), IDLE_BACKGROUND);
        assert_eq!(SubmitPhase::Sending.background(), IDLE_BACKGROUND);
    }

    #[test]
    fn hold_times_come_from_timings() {
        let timings = SubmitTimings::default();
        assert_eq!(SubmitPhase::Sending.hold(&timings), Some(1500));
        assert_eq!(SubmitPhase::Sent.hold(&timings), Some(2000));
        assert_eq!(SubmitPhase::Idle.hold(&timings), None);
    }
}
