//! ChatBox - View Model

use contracts::domain::chat::aggregate::ChatLog;
use leptos::prelude::*;

use super::submission::SubmissionController;

#[derive(Clone, Copy)]
pub struct ChatBoxVm {
    pub draft: RwSignal<String>,
    /// Current attachment. `web_sys::File` is a JS handle, so the signal
    /// lives in local storage and must only be touched on the UI thread.
    pub attachment: RwSignal<Option<web_sys::File>, LocalStorage>,
    pub log: RwSignal<ChatLog>,
    pub error: RwSignal<Option<String>>,
    pub submission: RwSignal<SubmissionController>,
}

impl ChatBoxVm {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(String::new()),
            attachment: RwSignal::new_local(None),
            log: RwSignal::new(ChatLog::new()),
            error: RwSignal::new(None),
            submission: RwSignal::new(SubmissionController::new()),
        }
    }
}
