use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::*;

/// A REST-addressable CCS object type.
///
/// The retrieval methods on [`crate::Session`] are generic over this trait, so
/// every resource gets list / get-by-id / post without any runtime casting.
pub trait Resource: DeserializeOwned + Display + Send + Sized + 'static {
    /// Collection name below the API root or the contest, e.g. `"problems"`.
    const PATH: &'static str;

    /// Human readable name used in diagnostics, e.g. `"problem"`.
    const NAME: &'static str;

    /// Whether the resource lives under `contests/{id}/`.
    const CONTEST_SCOPED: bool = true;

    /// Singletons such as the scoreboard are addressed without an id.
    const SINGLETON: bool = false;

    /// Parses one JSON object.
    fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|source| Error::Decode {
            resource: Self::NAME,
            index: None,
            source,
        })
    }

    fn decode_value(value: serde_json::Value, index: Option<usize>) -> Result<Self> {
        serde_json::from_value(value).map_err(|source| Error::Decode {
            resource: Self::NAME,
            index,
            source,
        })
    }
}

/// A resource that can be sent to the API with POST.
pub trait Submittable: Resource + Serialize + Sync {}

macro_rules! impl_resource {
    ($t:ty, $path:literal, $name:literal) => {
        impl $crate::resource::Resource for $t {
            const PATH: &'static str = $path;
            const NAME: &'static str = $name;
        }
    };
    ($t:ty, $path:literal, $name:literal, top_level) => {
        impl $crate::resource::Resource for $t {
            const PATH: &'static str = $path;
            const NAME: &'static str = $name;
            const CONTEST_SCOPED: bool = false;
        }
    };
    ($t:ty, $path:literal, $name:literal, singleton) => {
        impl $crate::resource::Resource for $t {
            const PATH: &'static str = $path;
            const NAME: &'static str = $name;
            const SINGLETON: bool = true;
        }
    };
}
pub(crate) use impl_resource;
