//! Bucket and object visibility.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Access-control mode attached to a bucket or object.
///
/// The string forms match the protocol enum names, and the short lowercase
/// names are accepted when parsing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumString)]
pub enum Visibility {
    /// No visibility requested; the chain applies its own default.
    #[default]
    #[serde(rename = "VISIBILITY_TYPE_UNSPECIFIED")]
    #[strum(to_string = "VISIBILITY_TYPE_UNSPECIFIED", serialize = "unspecified")]
    Unspecified,
    /// Anyone may read.
    #[serde(rename = "VISIBILITY_TYPE_PUBLIC_READ")]
    #[strum(to_string = "VISIBILITY_TYPE_PUBLIC_READ", serialize = "public-read")]
    PublicRead,
    /// Only the owner and granted accounts may read.
    #[serde(rename = "VISIBILITY_TYPE_PRIVATE")]
    #[strum(to_string = "VISIBILITY_TYPE_PRIVATE", serialize = "private")]
    Private,
    /// Objects inherit the visibility of their bucket.
    #[serde(rename = "VISIBILITY_TYPE_INHERIT")]
    #[strum(to_string = "VISIBILITY_TYPE_INHERIT", serialize = "inherit")]
    Inherit,
}

impl Visibility {
    /// Returns the protocol enum value.
    pub fn as_i32(&self) -> i32 {
        match self {
            Visibility::Unspecified => 0,
            Visibility::PublicRead => 1,
            Visibility::Private => 2,
            Visibility::Inherit => 3,
        }
    }

    /// Returns whether a concrete visibility was requested.
    #[inline]
    pub fn is_specified(&self) -> bool {
        !matches!(self, Visibility::Unspecified)
    }
}
