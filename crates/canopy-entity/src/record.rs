//! Shared shape of event records.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// A closed set of categories tagging an event record.
pub trait RecordCategory:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Display
    + fmt::Debug
    + FromStr<Err = UnknownCategory>
    + Send
    + Sync
    + 'static
{
    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Lowercase wire name of the category.
    fn as_str(&self) -> &'static str;
}

/// A single entry of an in-memory event log.
///
/// Records are immutable once created apart from whatever state the
/// concrete type exposes through its own methods.
pub trait EventRecord: Clone + fmt::Debug + Send + Sync + 'static {
    /// Identifier type.
    type Id: Copy + Eq + Hash + fmt::Display + fmt::Debug + Send + Sync;
    /// Category enumeration.
    type Category: RecordCategory;

    /// Record identifier.
    fn id(&self) -> Self::Id;

    /// Record category.
    fn category(&self) -> Self::Category;

    /// Creation time.
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

/// Define a closed category enum with its wire names.
///
/// Generates `as_str`, `Display`, `FromStr`, serde in lowercase, and the
/// [`RecordCategory`] impl listing every variant in declaration order.
macro_rules! define_category {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::record::RecordCategory for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::record::RecordCategory::as_str(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::record::UnknownCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($wire => Ok(Self::$variant),)+
                    other => Err($crate::record::UnknownCategory(other.to_string())),
                }
            }
        }
    };
}

pub(crate) use define_category;
