//! ChatBox UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: ChatBoxVm with RwSignals
//! - view.rs: Main component ChatBox
//! - submission.rs: Submission lifecycle state machine

mod model;
mod submission;
mod view;
mod view_model;

pub use submission::{PendingSubmission, SubmissionController, SubmitPhase};
pub use view::ChatBox;
pub use view_model::ChatBoxVm;
