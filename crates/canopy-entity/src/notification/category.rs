//! Notification category enumeration.

use crate::record::define_category;

define_category!(
    /// What a notification is about, for filtering and icon selection.
    NotificationCategory {
        /// Someone created an account.
        Signup => "signup",
        /// Someone signed in.
        Login => "login",
        /// A tree was planted or registered.
        Tree => "tree",
        /// A profile was edited.
        Profile => "profile",
        /// Someone commented.
        Comment => "comment",
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordCategory;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Tree".parse::<NotificationCategory>(),
            Ok(NotificationCategory::Tree)
        );
        assert!("donation".parse::<NotificationCategory>().is_err());
    }

    #[test]
    fn test_all_lists_every_variant() {
        assert_eq!(NotificationCategory::ALL.len(), 5);
        assert_eq!(NotificationCategory::ALL[0], NotificationCategory::Signup);
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&NotificationCategory::Signup).expect("serialize");
        assert_eq!(json, "\"signup\"");
    }
}
