//! プレビューコンポーネント

use leptos::prelude::*;

#[component]
pub fn Preview(preview_url: Signal<Option<String>>) -> impl IntoView {
    move || {
        preview_url.get().map(|url| {
            view! {
                <section class="preview">
                    <h3>"Preview:"</h3>
                    <img src=url alt="Selected image preview" />
                </section>
            }
        })
    }
}
