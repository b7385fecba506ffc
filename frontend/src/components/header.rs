//! Navigation bar with the backend's account pages.
//!
//! Login, registration and logout are rendered by the backend, so the links
//! are `rel="external"` to make the router hand them to the browser.

use leptos::*;
use crate::{LOGIN_PATH, LOGOUT_PATH, REGISTER_PATH};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">"SCRIBE"</a>
            </div>
            <div class="header-right">
                <a href=LOGIN_PATH rel="external" class="header-link">"Log in"</a>
                <a href=REGISTER_PATH rel="external" class="header-link">"Register"</a>
                <a href=LOGOUT_PATH rel="external" class="header-link">"Log out"</a>
            </div>
        </header>
    }
}
