//! Activity board controller
//!
//! [`ActivityBoard`] ties the HTTP contract, the catalog store and the
//! renderer together. It owns no UI: everything visible goes through a
//! [`BoardSurface`], which the terminal and browser front ends implement.
//!
//! Operations take `&self`. The store sits behind a `RefCell` whose borrows
//! never cross an `.await`, so several operations may be in flight on one
//! board inside a single-threaded executor. Responses that were overtaken by
//! a newer request for the same resource are dropped by the store.

use serde::Deserialize;
use std::cell::RefCell;
use thiserror::Error;

use crate::api::{ActivitiesApi, ApiError, ServerMessage};
use crate::message::{Message, MESSAGE_TIMEOUT_MS};
use crate::model::ActivityCatalog;
use crate::render::{render_activities, BoardView, LOAD_ERROR_TEXT};
use crate::store::{CatalogStore, Mutation, RequestToken, Resource};

const SIGNUP_OK: &str = "Signed up!";
const SIGNUP_FAILED: &str = "Signup failed";
const SIGNUP_NETWORK_ERROR: &str = "Network error during signup.";
const REMOVAL_OK: &str = "Participant removed.";
const REMOVAL_FAILED: &str = "Failed to remove participant.";
const REMOVAL_NETWORK_ERROR: &str = "Network error while removing participant.";

/// Where the board draws itself
pub trait BoardSurface {
    /// Replace the activity list and the select options
    fn render(&self, view: &BoardView);

    /// Replace the activity list with a static error
    fn show_load_error(&self, text: &str);

    /// Show a transient status message
    fn show_message(&self, message: Message);

    /// Ask the user a yes/no question
    fn confirm(&self, prompt: &str) -> bool;

    /// Clear the signup form after a successful signup
    fn reset_form(&self);

    /// Catalog fetch started or finished
    fn set_loading(&self, _loading: bool) {}
}

/// How the cached catalog catches up after a successful signup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconcileStrategy {
    /// Re-fetch the authoritative catalog
    #[default]
    Refetch,
    /// Append the email to the cached roster; re-fetch if nothing is cached
    Optimistic,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardOptions {
    #[serde(default = "default_message_timeout")]
    pub message_timeout_ms: u64,

    #[serde(default)]
    pub signup_reconcile: ReconcileStrategy,
}

fn default_message_timeout() -> u64 {
    MESSAGE_TIMEOUT_MS
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            message_timeout_ms: default_message_timeout(),
            signup_reconcile: ReconcileStrategy::default(),
        }
    }
}

/// Raw contents of the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub activity: String,
    pub email: String,
}

/// A form that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub activity: String,
    pub email: String,
}

impl SignupForm {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        if self.activity.is_empty() {
            return Err(ValidationError::MissingActivity);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        Ok(SignupRequest {
            activity: self.activity.clone(),
            email: email.to_string(),
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please choose an activity.")]
    MissingActivity,

    #[error("Please enter your email.")]
    MissingEmail,
}

/// Failures of a board operation. All of them have already been shown on
/// the surface by the time the caller sees them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Failed to load activities: {0}")]
    Load(ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Request rejected ({status}): {message}")]
    Request { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),
}

/// How an operation ended when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// A newer request for the same resource took over; nothing was shown
    Stale,
    /// The user declined the confirmation
    Cancelled,
}

/// Confirmation asked before a removal
pub fn removal_prompt(activity: &str, email: &str) -> String {
    format!("Unregister {} from {}?", email, activity)
}

/// Server `message`, or `fallback` when it is missing or empty
fn success_text<'a>(reply: &'a ServerMessage, fallback: &'a str) -> &'a str {
    reply
        .message
        .as_deref()
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback)
}

pub struct ActivityBoard<A, S> {
    api: A,
    surface: S,
    options: BoardOptions,
    store: RefCell<CatalogStore>,
}

impl<A: ActivitiesApi, S: BoardSurface> ActivityBoard<A, S> {
    pub fn new(api: A, surface: S, options: BoardOptions) -> Self {
        Self {
            api,
            surface,
            options,
            store: RefCell::new(CatalogStore::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn options(&self) -> &BoardOptions {
        &self.options
    }

    /// Copy of the cached catalog
    pub fn catalog(&self) -> Option<ActivityCatalog> {
        self.store.borrow().catalog().cloned()
    }

    /// View of the cached catalog
    pub fn view(&self) -> Option<BoardView> {
        self.store.borrow().catalog().map(render_activities)
    }

    /// Fetch the catalog, cache it and render it
    pub async fn load_activities(&self) -> Result<Outcome, BoardError> {
        let token = self.store.borrow_mut().begin(Resource::Catalog);
        self.surface.set_loading(true);

        let result = self.api.list_activities().await;

        match result {
            Ok(catalog) => {
                let view = render_activities(&catalog);
                if !self.store.borrow_mut().refresh(&token, catalog) {
                    return Ok(Outcome::Stale);
                }
                self.surface.set_loading(false);
                self.surface.render(&view);
                tracing::info!(activities = view.cards.len(), "catalog loaded");
                Ok(Outcome::Applied)
            }
            Err(e) => {
                if !self.store.borrow_mut().settle(&token) {
                    return Ok(Outcome::Stale);
                }
                self.surface.set_loading(false);
                tracing::error!(error = %e, "failed to load activities");
                self.surface.show_load_error(LOAD_ERROR_TEXT);
                Err(BoardError::Load(e))
            }
        }
    }

    /// Validate and submit the signup form
    pub async fn submit_signup(&self, form: &SignupForm) -> Result<Outcome, BoardError> {
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                self.surface.show_message(Message::error(e.to_string()));
                return Err(e.into());
            }
        };

        let token = self
            .store
            .borrow_mut()
            .begin(Resource::participant(&request.activity, &request.email));

        let result = self.api.signup(&request.activity, &request.email).await;

        let reply = match result {
            Ok(reply) => reply,
            Err(e) => return self.fail_request(&token, e, SIGNUP_FAILED, SIGNUP_NETWORK_ERROR),
        };

        if !self.store.borrow().is_current(&token) {
            self.store.borrow_mut().settle(&token);
            return Ok(Outcome::Stale);
        }

        tracing::info!(activity = %request.activity, email = %request.email, "signed up");
        self.surface
            .show_message(Message::success(success_text(&reply, SIGNUP_OK)));

        match self.options.signup_reconcile {
            ReconcileStrategy::Refetch => {
                self.store.borrow_mut().settle(&token);
                self.reload_after_mutation().await;
            }
            ReconcileStrategy::Optimistic => {
                let mutation = Mutation::AddParticipant {
                    activity: request.activity.clone(),
                    email: request.email.clone(),
                };
                self.patch_or_reload(&token, &mutation).await;
            }
        }

        self.surface.reset_form();
        Ok(Outcome::Applied)
    }

    /// Confirm, then unregister `email` from `activity`
    pub async fn remove_participant(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<Outcome, BoardError> {
        if !self.surface.confirm(&removal_prompt(activity, email)) {
            tracing::debug!(%activity, %email, "removal cancelled");
            return Ok(Outcome::Cancelled);
        }

        let token = self
            .store
            .borrow_mut()
            .begin(Resource::participant(activity, email));

        let result = self.api.unregister(activity, email).await;

        let reply = match result {
            Ok(reply) => reply,
            Err(e) => return self.fail_request(&token, e, REMOVAL_FAILED, REMOVAL_NETWORK_ERROR),
        };

        if !self.store.borrow().is_current(&token) {
            self.store.borrow_mut().settle(&token);
            return Ok(Outcome::Stale);
        }

        tracing::info!(%activity, %email, "participant removed");
        self.surface
            .show_message(Message::success(success_text(&reply, REMOVAL_OK)));

        let mutation = Mutation::RemoveParticipant {
            activity: activity.to_string(),
            email: email.to_string(),
        };
        self.patch_or_reload(&token, &mutation).await;
        Ok(Outcome::Applied)
    }

    /// Apply `mutation` to the cache, or re-fetch when the cache can't take it
    async fn patch_or_reload(&self, token: &RequestToken, mutation: &Mutation) {
        let patched = self.store.borrow_mut().apply_mutation(token, mutation);
        match patched {
            Ok(true) => self.render_cached(),
            Ok(false) => {}
            Err(e) => {
                tracing::debug!(error = %e, "cache cannot be patched, re-fetching");
                self.reload_after_mutation().await;
            }
        }
    }

    async fn reload_after_mutation(&self) {
        if let Err(e) = self.load_activities().await {
            tracing::warn!(error = %e, "catalog refresh after mutation failed");
        }
    }

    fn render_cached(&self) {
        let view = self.view();
        if let Some(view) = view {
            self.surface.render(&view);
        }
    }

    /// Surface a failed signup/removal unless it was superseded
    fn fail_request(
        &self,
        token: &RequestToken,
        error: ApiError,
        fallback: &str,
        network_text: &str,
    ) -> Result<Outcome, BoardError> {
        if !self.store.borrow_mut().settle(token) {
            return Ok(Outcome::Stale);
        }

        match error {
            ApiError::Status { status, detail } => {
                let message = detail.unwrap_or_else(|| fallback.to_string());
                tracing::warn!(status, %message, "request rejected");
                self.surface.show_message(Message::error(message.clone()));
                Err(BoardError::Request { status, message })
            }
            ApiError::Network(e) | ApiError::Decode(e) => {
                tracing::error!(error = %e, "request failed");
                self.surface.show_message(Message::error(network_text));
                Err(BoardError::Network(e))
            }
        }
    }
}
