//! 認識履歴リスト

use leptos::prelude::*;
use ocr_client_common::HistoryEntry;

#[component]
pub fn HistoryList<FC>(entries: Signal<Vec<HistoryEntry>>, on_clear: FC) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone,
{
    view! {
        <section class="history" class:hidden=move || entries.with(|e| e.is_empty())>
            <div class="history-header">
                <h3>"History"</h3>
                <button class="btn btn-small btn-tertiary" on:click=move |_| on_clear(())>
                    "Clear"
                </button>
            </div>
            <ul class="history-list">
                <For
                    each=move || entries.get()
                    key=|entry| (entry.id, entry.text.clone())
                    children=move |entry| view! { <HistoryItem entry=entry /> }
                />
            </ul>
        </section>
    }
}

#[component]
fn HistoryItem(entry: HistoryEntry) -> impl IntoView {
    view! {
        <li class="history-item">
            <img src=entry.image_url.clone() alt="OCR source image" />
            <div class="history-info">
                <div class="history-meta">
                    <span>{entry.timestamp.clone()}</span>
                    <span class="language-badge">{entry.language.label()}</span>
                </div>
                <p>{entry.text.clone()}</p>
            </div>
        </li>
    }
}
