//! アップロードエリアコンポーネント
//!
//! ファイル選択とドラッグ&ドロップの両方から1枚受け付ける。

use leptos::prelude::*;
use ocr_client_common::ACCEPT_ATTR;
use web_sys::{DragEvent, File, HtmlInputElement};

#[component]
pub fn UploadArea<FT, F>(
    show_upload: Signal<bool>,
    on_toggle_upload: FT,
    on_file: F,
) -> impl IntoView
where
    FT: Fn(()) + 'static + Clone,
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                on_file(file);
            }
        }
    };

    // ドロップを有効にするためブラウザ既定の処理を止める
    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file(file);
        }
    };

    view! {
        <div class="upload">
            <button class="btn btn-primary btn-upload" on:click=move |_| on_toggle_upload(())>
                {move || if show_upload.get() { "Hide Upload" } else { "Upload IMG File" }}
            </button>

            <label
                for="dropzone-file"
                class="upload-area"
                class:dragover=move || is_dragover.get()
                class:hidden=move || !show_upload.get()
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
            >
                <div class="upload-icon">"📷"</div>
                <p>
                    <span class="font-semibold">"Click to upload"</span>
                    " or drag and drop"
                </p>
                <p class="text-muted">"SVG, PNG, JPG or GIF"</p>
                <input
                    id="dropzone-file"
                    type="file"
                    class="hidden"
                    accept=ACCEPT_ATTR
                    on:change=on_change
                />
            </label>
        </div>
    }
}
