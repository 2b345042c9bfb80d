//! Account and community events.

use serde::{Deserialize, Serialize};

/// Events related to user accounts and community interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UserEvent {
    /// A new account was created.
    SignedUp {
        /// Display name.
        name: String,
        /// Avatar URL, if the user set one.
        avatar: Option<String>,
    },
    /// A user signed in.
    LoggedIn {
        /// Display name.
        name: String,
        /// Avatar URL.
        avatar: Option<String>,
    },
    /// A user edited their profile.
    ProfileUpdated {
        /// Display name.
        name: String,
        /// Avatar URL.
        avatar: Option<String>,
        /// Fields that changed.
        changed_fields: Vec<String>,
    },
    /// A user commented on a tree or resource.
    CommentPosted {
        /// Display name.
        name: String,
        /// Avatar URL.
        avatar: Option<String>,
        /// What the comment was posted on.
        subject: String,
    },
}

impl UserEvent {
    /// Short dotted event name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SignedUp { .. } => "user.signed_up",
            Self::LoggedIn { .. } => "user.logged_in",
            Self::ProfileUpdated { .. } => "user.profile_updated",
            Self::CommentPosted { .. } => "user.comment_posted",
        }
    }
}
