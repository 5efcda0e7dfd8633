//! 送信中インジケーター

use leptos::prelude::*;

#[component]
pub fn ProgressBar(active: Signal<bool>) -> impl IntoView {
    view! {
        <div class="progress-container" class:hidden=move || !active.get()>
            <div class="progress-bar">
                <div class="progress-fill indeterminate" />
            </div>
            <p class="progress-text">"Recognizing text..."</p>
        </div>
    }
}
