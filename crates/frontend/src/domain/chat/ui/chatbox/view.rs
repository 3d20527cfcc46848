//! ChatBox - View Component

use super::model;
use super::view_model::ChatBoxVm;
use crate::shared::icons::icon;
use contracts::domain::chat::aggregate::ChatRole;
use leptos::prelude::*;
use thaw::*;

const FILE_INPUT_ID: &str = "chatbox-file-input";

/// Clear the visible selection of the hidden file input.
fn clear_file_input() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(input) = document.get_element_by_id(FILE_INPUT_ID) {
            use wasm_bindgen::JsCast;
            if let Ok(input) = input.dyn_into::<web_sys::HtmlInputElement>() {
                input.set_value("");
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ChatBox() -> impl IntoView {
    let vm = ChatBoxVm::new();
    let body_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest turn visible whenever the log grows.
    Effect::new(move |_| {
        vm.log.with(|log| log.len());
        if let Some(container) = body_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_send = Callback::new(move |_: ()| {
        let question = vm.draft.get();
        let mut submission = vm.submission.get();
        let Some(pending) = submission.begin(&question, vm.attachment.with(|f| f.is_some()))
        else {
            return;
        };
        vm.submission.set(submission);
        vm.error.set(None);

        let file = if pending.include_file {
            vm.attachment.get()
        } else {
            None
        };
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::ask(&pending.question, file.as_ref()).await;

            let mut submission = vm.submission.get();
            let drop_attachment = submission.complete(&pending, result.is_ok());
            match result {
                Ok(answer) => {
                    let mut log = vm.log.get();
                    log.append_exchange(pending.question.clone(), answer);
                    vm.log.set(log);
                }
                Err(reason) => {
                    log::error!("Error fetching response from server: {reason}");
                    vm.error.set(Some(format!("Error fetching response: {reason}")));
                }
            }

            // Cleanup runs the same way on success and failure.
            vm.draft.set(String::new());
            if drop_attachment {
                vm.attachment.set(None);
                submission.file_changed();
            }
            vm.submission.set(submission);
            clear_file_input();
        });
    });

    let send_disabled = Signal::derive(move || {
        let submission = vm.submission.get();
        vm.draft.with(|draft| !submission.can_submit(draft))
    });

    view! {
        <div style="width: 100%; max-width: 520px; height: 100%; display: flex; flex-direction: column; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; overflow: hidden;">
            // Header
            <div style="padding: 12px 16px; background: var(--colorBrandBackground2); font-weight: bold; border-bottom: 1px solid var(--colorNeutralStroke2);">
                <span>"ChatBox POC"</span>
            </div>

            // Conversation
            <div
                node_ref=body_ref
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 8px; padding: 12px;"
            >
                <For each=move || vm.log.get() key=|turn| turn.id let:turn>
                    {{
                        let is_user = turn.role == ChatRole::User;
                        view! {
                            <div style=if is_user {
                                "align-self: flex-end; max-width: 80%;"
                            } else {
                                "align-self: flex-start; max-width: 80%;"
                            }>
                                <div style=if is_user {
                                    "background: var(--colorBrandBackground2); padding: 8px 12px; border-radius: 12px;"
                                } else {
                                    "background: var(--colorNeutralBackground2); padding: 8px 12px; border-radius: 12px;"
                                }>
                                    <strong>{turn.role.label()}": "</strong>
                                    <span style="white-space: pre-wrap;">{turn.content}</span>
                                </div>
                            </div>
                        }
                    }}
                </For>

                // Error display, below the turns and never part of the log
                {move || {
                    vm.error
                        .get()
                        .map(|e| {
                            view! {
                                <div style="padding: 8px 12px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                                    <span style="color: var(--color-error);">{e}</span>
                                </div>
                            }
                        })
                }}
            </div>

            // Input area
            <div style="padding: 12px; border-top: 1px solid var(--colorNeutralStroke2);">
                <Flex align=FlexAlign::Center style="gap: 8px;">
                    <input
                        type="file"
                        id=FILE_INPUT_ID
                        style="display: none;"
                        on:change=move |ev| {
                            use wasm_bindgen::JsCast;
                            let input: web_sys::HtmlInputElement =
                                ev.target().unwrap().dyn_into().unwrap();
                            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                                // A fresh selection has never been sent.
                                vm.attachment.set(Some(file));
                                let mut submission = vm.submission.get();
                                submission.file_changed();
                                vm.submission.set(submission);
                            }
                        }
                    />

                    <div style="flex: 1;">
                        <Input
                            value=vm.draft
                            placeholder="Ask me anything..."
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    handle_send.run(());
                                }
                            }
                        />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            if let Some(window) = web_sys::window() {
                                if let Some(document) = window.document() {
                                    if let Some(input) = document.get_element_by_id(FILE_INPUT_ID) {
                                        use wasm_bindgen::JsCast;
                                        if let Ok(input) = input.dyn_into::<web_sys::HtmlElement>() {
                                            input.click();
                                        }
                                    }
                                }
                            }
                        }
                    >
                        {icon("attach")}
                    </Button>

                    // Attachment status: pending until its first successful use
                    {move || {
                        let uploaded = vm.submission.get().file_uploaded();
                        vm.attachment
                            .get()
                            .map(|file| {
                                let text = if uploaded {
                                    format!("{} (Uploaded)", file.name())
                                } else {
                                    format!("{} (Ready to upload)", file.name())
                                };
                                view! {
                                    <span style="font-size: 13px; color: var(--colorNeutralForeground3); display: inline-flex; align-items: center; gap: 4px;">
                                        {icon("document")}
                                        {text}
                                    </span>
                                }
                            })
                    }}

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=send_disabled
                        on_click=move |_| handle_send.run(())
                    >
                        {icon("send")}
                        {move || {
                            if vm.submission.get().in_flight() { " Sending..." } else { " Send" }
                        }}
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
