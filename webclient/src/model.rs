pub mod clarification;
pub mod contest;
pub mod file;
pub mod identifier;
pub mod problem;
pub mod scoreboard;
pub mod submission;
pub mod team;
pub mod time;

pub use clarification::*;
pub use contest::*;
pub use file::{FileReference, LocalFile, LocalFileReference, MIME_ZIP};
pub use identifier::Identifier;
pub use problem::*;
pub use scoreboard::*;
pub use submission::*;
pub use team::*;
pub use time::{ApiRelTime, ApiTime};

use serde::{Deserialize, Deserializer};

/// Treats JSON `null` like a missing field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
