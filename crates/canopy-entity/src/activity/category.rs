//! Activity category enumeration.

use crate::record::define_category;

define_category!(
    /// Area of the back-office an activity belongs to.
    ActivityCategory {
        /// Tree registrations and project updates.
        Tree => "tree",
        /// Sponsorships and donations.
        Donation => "donation",
        /// Account management.
        User => "user",
        /// Contact form traffic.
        Contact => "contact",
        /// Administrative actions.
        Admin => "admin",
    }
);
