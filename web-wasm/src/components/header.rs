//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"OCR Tool made by Team III"</h1>
            <p class="text-muted">"Convert your Image to Text files with incredible accuracy"</p>
        </header>
    }
}
