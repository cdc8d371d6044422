// exported modules
pub mod error;
pub mod http;
pub mod model;
pub mod resource;
pub mod session;

// re-exports
pub use error::*;
pub use http::Credentials;
pub use model::*;
pub use resource::{Resource, Submittable};
pub use session::{Session, SessionConfig};
pub use url::Url;

// internal modules
mod retrieval;
mod util;
