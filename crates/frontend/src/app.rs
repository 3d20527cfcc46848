use crate::domain::chat::ui::ChatBox;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div style="height: 100vh; box-sizing: border-box; padding: 24px; background: var(--colorNeutralBackground3); display: flex; justify-content: center;">
            <ChatBox />
        </div>
    }
}
