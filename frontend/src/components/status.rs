//! Upload flow status panel.
//!
//! Keeps the stages of every run on this page, newest last, up to
//! [`MAX_STATUS_ENTRIES`] lines. Older lines fall off the top.

use leptos::*;
use crate::{FlowStage, StatusEntry, MAX_STATUS_ENTRIES};

#[component]
pub fn StatusPanel(entries: ReadSignal<Vec<StatusEntry>>) -> impl IntoView {
    view! {
        <div class="status-section show" id="statusSection">
            <div class="status" id="status">
                <For
                    each=move || entries.get()
                    key=|entry| entry.seq
                    children=move |entry| {
                        let class_name = format!("status-entry {}", entry.stage.css_class());
                        view! {
                            <div class=class_name>
                                "[" {entry.timestamp} "] #" {entry.run} " " {entry.stage.label()}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

/// Append a timestamped stage to the panel.
pub fn push_status(set_entries: WriteSignal<Vec<StatusEntry>>, stage: FlowStage) {
    let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();

    set_entries.update(|entries| push_capped(entries, stage, timestamp));
}

/// Number the entry, append it, and drop the oldest past the cap.
///
/// `Encoding` opens a new run.
fn push_capped(entries: &mut Vec<StatusEntry>, stage: FlowStage, timestamp: String) {
    let (last_run, last_seq) = entries
        .last()
        .map(|last| (last.run, last.seq))
        .unwrap_or((0, 0));
    let run = if stage == FlowStage::Encoding || last_run == 0 {
        last_run + 1
    } else {
        last_run
    };

    entries.push(StatusEntry {
        run,
        seq: last_seq + 1,
        stage,
        timestamp,
    });
    if entries.len() > MAX_STATUS_ENTRIES {
        entries.remove(0);
    }
}
