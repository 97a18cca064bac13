//! Board rendering
//!
//! [`render_activities`] turns a catalog into a [`BoardView`]: the cards for
//! the activity list and the options for the signup select control. It reads
//! its input only. Front ends draw the view with whatever toolkit they use.

use serde::Serialize;

use crate::model::{Activity, ActivityCatalog};

/// Shown instead of the roster when nobody has signed up
pub const EMPTY_ROSTER_TEXT: &str = "No participants yet.";

/// Leading option of the select control, with an empty value
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Replaces the activity list when the catalog cannot be fetched
pub const LOAD_ERROR_TEXT: &str = "Could not load activities.";

pub const ROSTER_HEADER: &str = "Participants";

/// Everything needed to draw the board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub cards: Vec<ActivityCardView>,
    /// One option per activity; the placeholder is not included
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCardView {
    pub title: String,
    pub description: String,
    pub meta: String,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCardView {
    /// Placeholder text when the roster is empty
    pub fn placeholder(&self) -> Option<&'static str> {
        self.participants.is_empty().then_some(EMPTY_ROSTER_TEXT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantRow {
    pub avatar: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// `"{schedule} • Capacity: {count}/{max}"`
pub fn meta_line(activity: &Activity) -> String {
    format!(
        "{} • Capacity: {}/{}",
        activity.schedule,
        activity.participants.len(),
        activity.max_participants
    )
}

/// First character of the email, uppercased
pub fn avatar(email: &str) -> String {
    email
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

fn card(name: &str, activity: &Activity) -> ActivityCardView {
    ActivityCardView {
        title: name.to_string(),
        description: activity.description.clone(),
        meta: meta_line(activity),
        participants: activity
            .participants
            .iter()
            .map(|email| ParticipantRow {
                avatar: avatar(email),
                email: email.clone(),
            })
            .collect(),
    }
}

/// Build the cards and select options for `catalog`, in catalog order
pub fn render_activities(catalog: &ActivityCatalog) -> BoardView {
    let mut view = BoardView {
        cards: Vec::with_capacity(catalog.len()),
        options: Vec::with_capacity(catalog.len()),
    };

    for (name, activity) in catalog.iter() {
        view.cards.push(card(name, activity));
        view.options.push(SelectOption {
            value: name.to_string(),
            label: name.to_string(),
        });
    }

    view
}
