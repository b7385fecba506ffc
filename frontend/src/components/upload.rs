//! Document upload component.
//!
//! A visible button opens the hidden file input; picking a file starts
//! the upload flow, which ends on the results page or with an alert.

use leptos::*;
use web_sys::{Event, HtmlInputElement};
use crate::{FlowConfig, FlowStage, StatusEntry};
use crate::components::push_status;
use crate::services::{open_file_picker, BrowserUploadFlow};

#[component]
pub fn UploadSection(
    config: FlowConfig,
    set_status: WriteSignal<Vec<StatusEntry>>,
) -> impl IntoView {
    let (stage, set_stage) = create_signal(FlowStage::Idle);
    let input_id = config.file_input_id.clone();
    let picker_id = store_value(config.file_input_id.clone());
    let button_id = store_value(config.upload_button_id.clone());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        // Clear the input so picking the same file again fires `change`
        input.set_value("");

        let flow = BrowserUploadFlow::browser(config.clone()).on_stage(move |next| {
            set_stage.set(next);
            push_status(set_status, next);
        });

        spawn_local(async move {
            flow.run(file.as_ref()).await;
        });
    };

    let trigger_file_input = move |_| {
        if let Err(e) = picker_id.with_value(|id| open_file_picker(id)) {
            log::error!("Upload button or file input element not found: {}", e);
        }
    };

    view! {
        <div class="upload-section" id="uploadZone">
            <div class="upload-icon">"📄"</div>
            <div class="upload-text">
                {move || stage.get().label()}
            </div>

            <input
                type="file"
                id=input_id
                accept=".pdf,.png,.jpg,.jpeg,.tif,.tiff"
                style="display:none"
                on:change=on_file_change
            />

            // Hidden while a run is in flight, so repeated clicks cannot stack runs
            <Show
                when=move || !stage.get().is_busy()
                fallback=|| view! { }
            >
                <div class="upload-hint">"PDF, PNG, JPEG or TIFF"</div>
                <button
                    type="button"
                    class="upload-button"
                    id=button_id.get_value()
                    on:click=trigger_file_input
                >
                    "Upload document"
                </button>
            </Show>
        </div>
    }
}
