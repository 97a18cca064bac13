//! UI Components
//!
//! Leptos components for the activity board.

pub mod activity_card;
pub mod activity_list;
pub mod loading;
pub mod signup_panel;
pub mod toast;

pub use activity_card::ActivityCard;
pub use activity_list::ActivityList;
pub use loading::Loading;
pub use signup_panel::SignupPanel;
pub use toast::Toast;
