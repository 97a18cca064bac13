//! Signup Form Component
//!
//! Activity select plus email input. Validation happens in the board, so the
//! form is submitted with `novalidate`.

use activity_board::render::SELECT_PLACEHOLDER;
use activity_board::{BoardError, SignupForm};
use leptos::*;

use crate::api::console_error;
use crate::components::loading::InlineLoading;
use crate::state::{GlobalState, SharedBoard};

#[component]
pub fn SignupPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let board = use_context::<SharedBoard>().expect("board not found");

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if state.submitting.get_untracked() {
            return;
        }

        let form = SignupForm::new(state.selected_activity.get_untracked(), state.email.get_untracked());
        let board = board.clone();
        state.submitting.set(true);

        spawn_local(async move {
            match board.submit_signup(&form).await {
                Ok(_) => {}
                Err(BoardError::Validation(_)) | Err(BoardError::Request { .. }) => {}
                Err(e) => console_error(&format!("Signup failed: {}", e)),
            }
            state.submitting.set(false);
        });
    };

    view! {
        <form id="signup-form" novalidate=true on:submit=on_submit>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    prop:value=move || state.selected_activity.get()
                    on:change=move |ev| state.selected_activity.set(event_target_value(&ev))
                >
                    <option value="">{SELECT_PLACEHOLDER}</option>
                    {move || {
                        state
                            .board_view
                            .with(|view| view.as_ref().map(|v| v.options.clone()).unwrap_or_default())
                            .into_iter()
                            .map(|option| {
                                let selected = state.selected_activity.get() == option.value;
                                view! {
                                    <option value=option.value selected=selected>{option.label}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="your-email@mergington.edu"
                    prop:value=move || state.email.get()
                    on:input=move |ev| state.email.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" disabled=move || state.submitting.get()>
                {move || state.submitting.get().then(|| view! { <InlineLoading /> })}
                "Sign Up"
            </button>
        </form>
    }
}
