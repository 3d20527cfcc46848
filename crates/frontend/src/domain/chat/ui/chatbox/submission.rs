//! Submission lifecycle of the chat widget.
//!
//! The lifecycle is an explicit state machine rather than a handful of
//! booleans: a submission is idle, in flight, or settled with the outcome
//! of the last attempt. The controller also owns the upload-completion
//! flag, which is only meaningful relative to the currently held
//! attachment.

/// Фаза жизненного цикла отправки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Pre-request snapshot of everything the completion path needs.
///
/// `file_was_uploaded` captures the upload-completion flag before the
/// request went out; the attachment-drop decision compares against this
/// snapshot, never against live state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub question: String,
    pub include_file: bool,
    pub file_was_uploaded: bool,
}

/// Tracks the submission phase and whether the current attachment has
/// already been transmitted once.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionController {
    phase: SubmitPhase,
    file_uploaded: bool,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// True exactly while a request is outstanding.
    pub fn in_flight(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Whether the current attachment has already been sent.
    pub fn file_uploaded(&self) -> bool {
        self.file_uploaded
    }

    /// A submit is permitted iff the draft is non-empty and no request is
    /// outstanding. The settled phases behave like `Idle` here.
    pub fn can_submit(&self, draft: &str) -> bool {
        !draft.is_empty() && !self.in_flight()
    }

    /// The attachment was replaced or removed; whatever is held now has
    /// never been sent.
    pub fn file_changed(&mut self) {
        self.file_uploaded = false;
    }

    /// Start a submission.
    ///
    /// Returns `None` when ineligible (empty draft, or a request already
    /// in flight) and leaves all state untouched. Otherwise enters
    /// `Submitting` and returns the snapshot the completion path works
    /// from. An already-uploaded file is never included again.
    pub fn begin(&mut self, draft: &str, has_file: bool) -> Option<PendingSubmission> {
        if !self.can_submit(draft) {
            return None;
        }
        let pending = PendingSubmission {
            question: draft.to_owned(),
            include_file: has_file && !self.file_uploaded,
            file_was_uploaded: self.file_uploaded,
        };
        self.phase = SubmitPhase::Submitting;
        Some(pending)
    }

    /// Settle the in-flight submission.
    ///
    /// On success the included attachment is marked uploaded. The return
    /// value says whether the attachment must now be dropped: an
    /// attachment survives only until its first successful use, so the
    /// drop fires when the pre-request snapshot already said "uploaded".
    /// The decision applies to failures as well.
    pub fn complete(&mut self, pending: &PendingSubmission, succeeded: bool) -> bool {
        self.phase = if succeeded {
            SubmitPhase::Succeeded
        } else {
            SubmitPhase::Failed
        };
        if succeeded && pending.include_file {
            self.file_uploaded = true;
        }
        pending.file_was_uploaded
    }
}
