//! Loading Component

use leptos::*;

/// Spinner shown while the catalog is fetched
#[component]
pub fn Loading(#[prop(default = "Loading activities...")] label: &'static str) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner" />
            <p>{label}</p>
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="loading-spinner inline" />
    }
}
