//! # Activity Board
//!
//! Browse extracurricular activities and manage sign-ups against the
//! activities REST API.
//!
//! ## Modules
//!
//! - [`model`]: Activity catalog types
//! - [`api`]: HTTP contract and the reqwest client
//! - [`store`]: Cached catalog with stale-response protection
//! - [`render`]: Catalog to cards and select options
//! - [`message`]: Transient status banner
//! - [`board`]: The view-controller driving it all
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use activity_board::api::HttpActivitiesApi;
//! use activity_board::board::{ActivityBoard, BoardSurface, SignupForm};
//! use activity_board::config::Config;
//! use activity_board::message::Message;
//! use activity_board::render::BoardView;
//!
//! struct Stdout;
//!
//! impl BoardSurface for Stdout {
//!     fn render(&self, view: &BoardView) {
//!         for card in &view.cards {
//!             println!("{} ({})", card.title, card.meta);
//!         }
//!     }
//!     fn show_load_error(&self, text: &str) {
//!         eprintln!("{}", text);
//!     }
//!     fn show_message(&self, message: Message) {
//!         println!("[{}] {}", message.kind, message.text);
//!     }
//!     fn confirm(&self, _prompt: &str) -> bool {
//!         true
//!     }
//!     fn reset_form(&self) {}
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let api = HttpActivitiesApi::new(&config.api)?;
//!     let board = ActivityBoard::new(api, Stdout, config.board);
//!
//!     board.load_activities().await?;
//!     board
//!         .submit_signup(&SignupForm::new("Chess Club", "michael@mergington.edu"))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod board;
#[cfg(feature = "native")]
pub mod config;
pub mod message;
pub mod model;
pub mod render;
pub mod store;

// Re-export top-level types for convenience
pub use api::{ActivitiesApi, ApiError, ServerMessage};

#[cfg(feature = "native")]
pub use api::HttpActivitiesApi;

pub use board::{
    ActivityBoard, BoardError, BoardOptions, BoardSurface, Outcome, ReconcileStrategy,
    SignupForm, SignupRequest, ValidationError,
};

pub use message::{Message, MessageKind, StatusBanner, MESSAGE_TIMEOUT_MS};

pub use model::{Activity, ActivityCatalog};

pub use render::{render_activities, ActivityCardView, BoardView, ParticipantRow, SelectOption};

pub use store::{CatalogStore, Mutation, RequestToken, Resource, StoreError};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
