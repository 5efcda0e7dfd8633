//! 認識結果パネル
//!
//! 結果テキストの表示とクリップボードへのコピー

use leptos::prelude::*;

#[component]
pub fn ResultPanel<FC>(
    result: Signal<Option<String>>,
    copied: Signal<bool>,
    on_copy: FC,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone,
{
    let has_result = move || result.with(|r| r.is_some());

    view! {
        <section class="result-panel" class:hidden=move || !has_result()>
            <div class="result-header">
                <h3>"OCR Result:"</h3>
                <button
                    class="btn btn-small btn-secondary"
                    disabled=move || !has_result()
                    on:click=move |_| on_copy(())
                >
                    {move || if copied.get() { "Copied" } else { "Copy" }}
                </button>
            </div>
            <p class="result-text">{move || result.get().unwrap_or_default()}</p>
        </section>
    }
}
