//! Status banner
//!
//! A single transient message. Each [`StatusBanner::show`] hands back a
//! [`BannerTicket`]; the front end schedules [`StatusBanner::expire`] with it
//! after the display timeout. Expiring an old ticket is a no-op, so a timer
//! left over from an earlier message never hides a newer one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default time a message stays visible
pub const MESSAGE_TIMEOUT_MS: u64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Error)
    }

    /// CSS class list of the banner element, e.g. `message success`
    pub fn css_class(&self) -> String {
        format!("message {}", self.kind)
    }
}

/// Identifies one `show` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBanner {
    current: Option<Message>,
    generation: u64,
}

impl StatusBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display `message`, replacing whatever is shown
    pub fn show(&mut self, message: Message) -> BannerTicket {
        self.generation += 1;
        self.current = Some(message);
        BannerTicket(self.generation)
    }

    /// Hide the banner if `ticket` belongs to the message on screen
    pub fn expire(&mut self, ticket: BannerTicket) -> bool {
        if ticket.0 != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }
}
