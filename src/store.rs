//! Client-side catalog store
//!
//! Holds the cached [`ActivityCatalog`] and decides which responses are
//! still allowed to touch it. Every request begins by taking a
//! [`RequestToken`] for the resource it targets; when the response arrives it
//! is applied only if no newer request for the same resource was started in
//! the meantime.

use std::collections::HashMap;
use thiserror::Error;

use crate::model::ActivityCatalog;

/// What a request reads or writes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    /// The whole catalog (`GET /activities`)
    Catalog,
    /// One roster entry (signup or removal of `email` in `activity`)
    Participant { activity: String, email: String },
}

impl Resource {
    pub fn participant(activity: &str, email: &str) -> Self {
        Resource::Participant {
            activity: activity.to_string(),
            email: email.to_string(),
        }
    }
}

/// Ticket identifying one in-flight request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestToken {
    resource: Resource,
    seq: u64,
}

impl RequestToken {
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// A local roster edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    AddParticipant { activity: String, email: String },
    RemoveParticipant { activity: String, email: String },
}

impl Mutation {
    fn activity(&self) -> &str {
        match self {
            Mutation::AddParticipant { activity, .. } | Mutation::RemoveParticipant { activity, .. } => {
                activity
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No catalog loaded")]
    NoCatalog,

    #[error("Activity not in cached catalog: {0}")]
    UnknownActivity(String),
}

/// Cached catalog plus request bookkeeping
#[derive(Debug, Default)]
pub struct CatalogStore {
    catalog: Option<ActivityCatalog>,
    next_seq: u64,
    latest: HashMap<Resource, u64>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> Option<&ActivityCatalog> {
        self.catalog.as_ref()
    }

    /// Start a request, superseding any in-flight one for the same resource
    pub fn begin(&mut self, resource: Resource) -> RequestToken {
        self.next_seq += 1;
        self.latest.insert(resource.clone(), self.next_seq);
        RequestToken {
            resource,
            seq: self.next_seq,
        }
    }

    /// Whether `token` is still the newest request for its resource
    pub fn is_current(&self, token: &RequestToken) -> bool {
        self.latest.get(&token.resource) == Some(&token.seq)
    }

    /// Retire a finished request. Returns false if it was superseded.
    pub fn settle(&mut self, token: &RequestToken) -> bool {
        if !self.is_current(token) {
            tracing::debug!(seq = token.seq, resource = ?token.resource, "discarding stale response");
            return false;
        }
        self.latest.remove(&token.resource);
        true
    }

    /// Replace the cached catalog wholesale
    pub fn refresh(&mut self, token: &RequestToken, catalog: ActivityCatalog) -> bool {
        if !self.settle(token) {
            return false;
        }
        self.catalog = Some(catalog);
        true
    }

    /// Supersede any in-flight request for `resource` without starting a new one
    pub fn invalidate(&mut self, resource: &Resource) {
        if self.latest.remove(resource).is_some() {
            tracing::debug!(?resource, "in-flight request superseded");
        }
    }

    /// Patch the cached catalog in place.
    ///
    /// A catalog fetch still in flight was answered before this change, so it
    /// is superseded once the patch lands.
    ///
    /// `Ok(false)` means the response was stale and nothing changed.
    pub fn apply_mutation(
        &mut self,
        token: &RequestToken,
        mutation: &Mutation,
    ) -> Result<bool, StoreError> {
        if !self.settle(token) {
            return Ok(false);
        }

        let catalog = self.catalog.as_mut().ok_or(StoreError::NoCatalog)?;
        let activity = catalog
            .get_mut(mutation.activity())
            .ok_or_else(|| StoreError::UnknownActivity(mutation.activity().to_string()))?;

        match mutation {
            Mutation::AddParticipant { email, .. } => {
                if !activity.is_registered(email) {
                    activity.participants.push(email.clone());
                }
            }
            Mutation::RemoveParticipant { email, .. } => {
                activity.participants.retain(|p| p != email);
            }
        }
        self.invalidate(&Resource::Catalog);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Activity;

    fn chess() -> ActivityCatalog {
        [(
            "Chess Club",
            Activity::new("Strategy", "Mon 3pm", 10).with_participants(["a@x.com"]),
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_refresh_replaces_catalog() {
        let mut store = CatalogStore::new();
        let token = store.begin(Resource::Catalog);
        assert!(store.refresh(&token, chess()));
        assert_eq!(store.catalog().unwrap().len(), 1);
    }

    #[test]
    fn test_stale_refresh_is_discarded() {
        let mut store = CatalogStore::new();
        let first = store.begin(Resource::Catalog);
        let second = store.begin(Resource::Catalog);

        let mut newer = chess();
        newer.insert("Drama", Activity::new("Stage", "Tue", 5));
        assert!(store.refresh(&second, newer));

        // The older response arrives last and must not win.
        assert!(!store.refresh(&first, chess()));
        assert!(store.catalog().unwrap().contains("Drama"));
    }

    #[test]
    fn test_tokens_are_scoped_per_resource() {
        let mut store = CatalogStore::new();
        let load = store.begin(Resource::Catalog);
        let removal = store.begin(Resource::participant("Chess Club", "a@x.com"));
        let other = store.begin(Resource::participant("Chess Club", "b@x.com"));

        assert!(store.is_current(&load));
        assert!(store.is_current(&removal));
        assert!(store.is_current(&other));
    }

    #[test]
    fn test_settle_retires_token() {
        let mut store = CatalogStore::new();
        let token = store.begin(Resource::Catalog);
        assert!(store.settle(&token));
        assert!(!store.settle(&token));
    }

    #[test]
    fn test_apply_remove_mutation() {
        let mut store = CatalogStore::new();
        let load = store.begin(Resource::Catalog);
        store.refresh(&load, chess());

        let token = store.begin(Resource::participant("Chess Club", "a@x.com"));
        let applied = store
            .apply_mutation(
                &token,
                &Mutation::RemoveParticipant {
                    activity: "Chess Club".to_string(),
                    email: "a@x.com".to_string(),
                },
            )
            .unwrap();

        assert!(applied);
        assert!(store.catalog().unwrap().get("Chess Club").unwrap().participants.is_empty());
    }

    #[test]
    fn test_mutation_supersedes_pending_refresh() {
        let mut store = CatalogStore::new();
        let load = store.begin(Resource::Catalog);
        store.refresh(&load, chess());

        let pending = store.begin(Resource::Catalog);
        let token = store.begin(Resource::participant("Chess Club", "a@x.com"));
        store
            .apply_mutation(
                &token,
                &Mutation::RemoveParticipant {
                    activity: "Chess Club".to_string(),
                    email: "a@x.com".to_string(),
                },
            )
            .unwrap();

        // The fetch started before the removal still lists a@x.com.
        assert!(!store.refresh(&pending, chess()));
        assert!(store.catalog().unwrap().get("Chess Club").unwrap().participants.is_empty());
    }

    #[test]
    fn test_apply_add_mutation_is_idempotent() {
        let mut store = CatalogStore::new();
        let load = store.begin(Resource::Catalog);
        store.refresh(&load, chess());

        for _ in 0..2 {
            let token = store.begin(Resource::participant("Chess Club", "b@x.com"));
            store
                .apply_mutation(
                    &token,
                    &Mutation::AddParticipant {
                        activity: "Chess Club".to_string(),
                        email: "b@x.com".to_string(),
                    },
                )
                .unwrap();
        }

        let roster = &store.catalog().unwrap().get("Chess Club").unwrap().participants;
        assert_eq!(roster, &vec!["a@x.com".to_string(), "b@x.com".to_string()]);
    }

    #[test]
    fn test_mutation_without_catalog() {
        let mut store = CatalogStore::new();
        let token = store.begin(Resource::participant("Chess Club", "a@x.com"));
        let result = store.apply_mutation(
            &token,
            &Mutation::AddParticipant {
                activity: "Chess Club".to_string(),
                email: "a@x.com".to_string(),
            },
        );
        assert_eq!(result, Err(StoreError::NoCatalog));
    }

    #[test]
    fn test_mutation_unknown_activity() {
        let mut store = CatalogStore::new();
        let load = store.begin(Resource::Catalog);
        store.refresh(&load, chess());

        let token = store.begin(Resource::participant("Drama", "a@x.com"));
        let result = store.apply_mutation(
            &token,
            &Mutation::RemoveParticipant {
                activity: "Drama".to_string(),
                email: "a@x.com".to_string(),
            },
        );
        assert_eq!(result, Err(StoreError::UnknownActivity("Drama".to_string())));
    }
}
