//! Common types for talking to a Solid pod over the Linked Data Platform
//! conventions: the HTTP transport seam, pod addressing, LDP request/response
//! mapping and the newline-delimited record codec.

#![warn(missing_docs)]
pub use smol_str;
pub use url;

pub mod codec;
pub mod error;
/// HTTP client abstraction used by solidpod crates.
pub mod http_client;
pub mod ldp;
pub mod location;

pub use codec::{decode, encode, encode_iter};
pub use error::{HttpError, PodError, Result, TransportError};
pub use location::PodLocation;
