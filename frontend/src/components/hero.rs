//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Scribe - Document Correction"</h1>
            <p class="subtitle">
                "Upload a scanned page or PDF. "
                "The text is extracted, spell-checked and shown with every correction highlighted."
            </p>
        </div>
    }
}
