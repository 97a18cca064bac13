//! Activity Card Component
//!
//! One activity with its participant roster and removal buttons.

use activity_board::render::ROSTER_HEADER;
use activity_board::{ActivityCardView, BoardError, ParticipantRow};
use leptos::*;

use crate::api::console_error;
use crate::state::SharedBoard;

#[component]
pub fn ActivityCard(card: ActivityCardView) -> impl IntoView {
    let placeholder = card.placeholder();
    let title = card.title.clone();

    view! {
        <div class="activity-card">
            <h4>{card.title}</h4>
            <p>{card.description}</p>
            <p class="meta">{card.meta}</p>
            <div class="participants-section">
                <strong>{ROSTER_HEADER}</strong>
                {match placeholder {
                    Some(text) => view! { <p class="muted">{text}</p> }.into_view(),
                    None => view! {
                        <ul class="participants-list">
                            {card
                                .participants
                                .into_iter()
                                .map(|row| view! { <Participant activity=title.clone() row=row /> })
                                .collect_view()}
                        </ul>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn Participant(activity: String, row: ParticipantRow) -> impl IntoView {
    let board = use_context::<SharedBoard>().expect("board not found");
    let email = row.email.clone();

    let on_remove = move |_| {
        let board = board.clone();
        let activity = activity.clone();
        let email = email.clone();
        spawn_local(async move {
            match board.remove_participant(&activity, &email).await {
                Ok(_) => {}
                // already on the banner
                Err(BoardError::Request { .. }) => {}
                Err(e) => console_error(&format!("Failed to remove participant: {}", e)),
            }
        });
    };

    view! {
        <li class="participant-item">
            <span class="participant-avatar">{row.avatar}</span>
            <span class="participant-email">{row.email}</span>
            <button
                class="participant-remove"
                title="Remove participant"
                aria-label="Remove participant"
                on:click=on_remove
            >
                "✕"
            </button>
        </li>
    }
}
