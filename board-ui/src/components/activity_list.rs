//! Activity List Component

use leptos::*;

use crate::components::{ActivityCard, Loading};
use crate::state::GlobalState;

/// All activity cards, the load error, or a spinner
#[component]
pub fn ActivityList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div id="activities-list">
            {move || {
                if let Some(error) = state.load_error.get() {
                    return view! { <p class="error">{error}</p> }.into_view();
                }
                match state.board_view.get() {
                    Some(view) => view
                        .cards
                        .into_iter()
                        .map(|card| view! { <ActivityCard card=card /> })
                        .collect_view(),
                    None if state.loading.get() => view! { <Loading /> }.into_view(),
                    None => view! {}.into_view(),
                }
            }}
        </div>
    }
}
