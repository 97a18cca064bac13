//! Message Banner Component
//!
//! Shows the current status message; hidden when the banner is empty.

use leptos::*;

use crate::state::GlobalState;

/// Status message banner
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || match state.current_message() {
            Some(message) => view! {
                <div id="message" class=message.css_class() role="status">
                    {message.text}
                </div>
            }
            .into_view(),
            None => view! { <div id="message" class="hidden" /> }.into_view(),
        }}
    }
}
