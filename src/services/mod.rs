pub mod debounce;
pub mod motion;
pub mod scheduler;
pub mod submission;
pub mod typewriter;

pub use debounce::Debouncer;
pub use scheduler::{Millis, Scheduler, TimerId, VirtualScheduler};
pub use submission::{
    run_submission, submit_contact, ContactFormHandle, SubmitOutcome, SubmitPhase, SubmitTimings,
};
pub use typewriter::{start_typewriter, Typewriter};
