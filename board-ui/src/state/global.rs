//! Global Application State
//!
//! Reactive state management using Leptos signals. [`GlobalState`] is the
//! [`BoardSurface`] the board controller renders into; components only read
//! its signals.

use std::rc::Rc;

use activity_board::{ActivityBoard, BoardOptions, BoardSurface, BoardView, Message, StatusBanner};
use gloo_timers::callback::Timeout;
use leptos::*;

use crate::api::{console_error, get_api_base, GlooActivitiesApi};

/// Board controller shared through context
pub type SharedBoard = Rc<ActivityBoard<GlooActivitiesApi, GlobalState>>;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Last rendered catalog
    pub board_view: RwSignal<Option<BoardView>>,
    /// Static error shown in place of the activity list
    pub load_error: RwSignal<Option<String>>,
    /// Catalog fetch in flight
    pub loading: RwSignal<bool>,
    /// Status message banner
    pub banner: RwSignal<StatusBanner>,
    /// Signup form: selected activity name, empty for the placeholder
    pub selected_activity: RwSignal<String>,
    /// Signup form: email input
    pub email: RwSignal<String>,
    /// Signup request in flight
    pub submitting: RwSignal<bool>,
    /// Pending banner expiry; replacing it drops (cancels) the old timer
    banner_timer: StoredValue<Option<Timeout>>,
    message_timeout_ms: u64,
}

impl GlobalState {
    fn new(message_timeout_ms: u64) -> Self {
        Self {
            board_view: create_rw_signal(None),
            load_error: create_rw_signal(None),
            loading: create_rw_signal(true),
            banner: create_rw_signal(StatusBanner::new()),
            selected_activity: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            submitting: create_rw_signal(false),
            banner_timer: store_value(None),
            message_timeout_ms,
        }
    }

    /// Message currently on the banner
    pub fn current_message(&self) -> Option<Message> {
        self.banner.with(|banner| banner.current().cloned())
    }
}

impl BoardSurface for GlobalState {
    fn render(&self, view: &BoardView) {
        self.load_error.set(None);
        self.board_view.set(Some(view.clone()));
    }

    fn show_load_error(&self, text: &str) {
        self.board_view.set(None);
        self.load_error.set(Some(text.to_string()));
    }

    fn show_message(&self, message: Message) {
        let mut ticket = None;
        self.banner.update(|banner| ticket = Some(banner.show(message)));
        let Some(ticket) = ticket else {
            return;
        };

        let banner = self.banner;
        let millis = u32::try_from(self.message_timeout_ms).unwrap_or(u32::MAX);
        let timer = Timeout::new(millis, move || {
            banner.update(|banner| {
                banner.expire(ticket);
            });
        });
        self.banner_timer.set_value(Some(timer));
    }

    fn confirm(&self, prompt: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.confirm_with_message(prompt) {
            Ok(answer) => answer,
            Err(_) => {
                console_error("confirm dialog unavailable");
                false
            }
        }
    }

    fn reset_form(&self) {
        self.selected_activity.set(String::new());
        self.email.set(String::new());
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }
}

/// Provide global state and the board controller to the component tree
pub fn provide_global_state() -> SharedBoard {
    let options = BoardOptions::default();
    let state = GlobalState::new(options.message_timeout_ms);
    provide_context(state);

    let api = GlooActivitiesApi::new(get_api_base());
    let board: SharedBoard = Rc::new(ActivityBoard::new(api, state, options));
    provide_context(board.clone());
    board
}
