//! Frontend Models
//!
//! Data structures matching the remote API payloads.

pub mod de;
mod feed;
mod reward;
mod session;
mod task;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use feed::{
    Certificate, Challenge, EntryDecision, FeedItem, Instruction, MediaKind, NowItem, PageDetail,
    Post,
};
pub use reward::{DailyLogin, DailyStreak};
pub use session::SessionUser;
pub use task::{
    group_verification, Task, TaskAvailability, TaskFrequency, VerificationBucket,
    VerificationGroups, VerificationTask,
};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(#[serde(deserialize_with = "de::flexible_string")] String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The API sends `""` or `0` where no id exists.
            pub fn is_blank(&self) -> bool {
                self.0.is_empty() || self.0 == "0"
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

id_type!(
    /// Identifier of a followable page
    PageId
);
id_type!(
    /// Identifier of a signed-in user
    UserId
);

/// What the follow popup shows about a page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSummary {
    pub page_id: PageId,
    pub title: String,
    pub icon: String,
    pub page_type: String,
}

impl PageSummary {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() { "Page" } else { &self.title }
    }

    pub fn display_type(&self) -> &str {
        if self.page_type.is_empty() { "Page" } else { &self.page_type }
    }
}

/// Where the device is, as reverse geocoded for the Now strip
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    pub district: String,
    pub country: String,
}

impl Locality {
    pub fn is_known(&self) -> bool {
        !self.district.is_empty() || !self.country.is_empty()
    }
}
