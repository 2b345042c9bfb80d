//! Records owned by the hosted backend.
//!
//! Canopy never stores these. Sibling components receive them from the
//! backend and hand them to the event bridge, which validates them and
//! turns them into notification and activity entries.

pub mod contact;
pub mod resource;
pub mod sponsorship;
pub mod tree;

pub use contact::{ContactMessage, ContactStatus, ContactType};
pub use resource::{EducationalResource, ResourceContent, ResourceType};
pub use sponsorship::{PaymentMethod, Sponsorship, SponsorshipStatus};
pub use tree::{Coordinates, Tree};
