//! # Stateless LDP request/response mapping
//!
//! Request shapes:
//! - create container: `POST {pod}/` with `Content-Type: text/turtle`, a `Link`
//!   declaring an LDP basic container and a `Slug` naming it. No body.
//! - write resource: `PUT {pod}/{container}/{file}` with `Content-Type: text/plain`.
//! - read resource: `GET {pod}/{container}/{file}` with `Accept: text/plain`.
//!
//! Response mapping:
//! - writes (POST/PUT) succeed only on 2xx; anything else becomes [`HttpError`].
//! - reads have no success gate below 400; a 4xx/5xx response has no readable
//!   body and becomes [`HttpError`].
//!
//! Exposed to make things more easily pluggable.

use http::{
    HeaderName, Request, Response, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, LINK, LOCATION},
};
use url::Url;

use crate::error::{HttpError, Result, TransportError};
use crate::location::PodLocation;

/// `Link` header value marking a new resource as an LDP basic container.
pub const BASIC_CONTAINER_LINK: &str = "<http://www.w3.org/ns/ldp#BasicContainer>; rel=\"type\"";

/// Media type sent with container creation requests.
pub const TEXT_TURTLE: &str = "text/turtle";

/// Media type of record blobs.
pub const TEXT_PLAIN: &str = "text/plain";

/// HTTP headers used in LDP requests
pub enum Header {
    /// Content-Type header
    ContentType,
    /// Accept header
    Accept,
    /// Link header, carries the interaction model of a new resource
    Link,
    /// `Slug` header - hints the path segment the server should use for a new resource.
    ///
    /// See: <https://www.w3.org/TR/ldp/#ldpc-post-slug>
    Slug,
}

impl From<Header> for HeaderName {
    fn from(value: Header) -> Self {
        match value {
            Header::ContentType => CONTENT_TYPE,
            Header::Accept => ACCEPT,
            Header::Link => LINK,
            Header::Slug => HeaderName::from_static("slug"),
        }
    }
}

/// Build the POST that asks the pod to create a basic container named `slug`.
pub fn create_container_request(
    pod: &Url,
    slug: &str,
) -> core::result::Result<Request<Vec<u8>>, TransportError> {
    Request::builder()
        .method(http::Method::POST)
        .uri(pod.as_str())
        .header(Header::ContentType, TEXT_TURTLE)
        .header(Header::Link, BASIC_CONTAINER_LINK)
        .header(Header::Slug, slug)
        .body(Vec::new())
        .map_err(TransportError::from)
}

/// Build the PUT that replaces a resource with `body`.
pub fn put_text_request(
    resource: &Url,
    body: String,
) -> core::result::Result<Request<Vec<u8>>, TransportError> {
    Request::builder()
        .method(http::Method::PUT)
        .uri(resource.as_str())
        .header(Header::ContentType, TEXT_PLAIN)
        .body(body.into_bytes())
        .map_err(TransportError::from)
}

/// Build the GET that fetches a resource as plain text.
pub fn get_text_request(
    resource: &Url,
) -> core::result::Result<Request<Vec<u8>>, TransportError> {
    Request::builder()
        .method(http::Method::GET)
        .uri(resource.as_str())
        .header(Header::Accept, TEXT_PLAIN)
        .body(Vec::new())
        .map_err(TransportError::from)
}

/// Accept only 2xx responses to a write.
#[inline]
pub fn expect_write_success(response: Response<Vec<u8>>) -> Result<Response<Vec<u8>>> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(HttpError::from_response(response).into())
    }
}

/// Read the body of a GET response as text.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
#[inline]
pub fn read_text_body(response: Response<Vec<u8>>) -> Result<String> {
    if response.status() >= StatusCode::BAD_REQUEST {
        return Err(HttpError::from_response(response).into());
    }
    Ok(String::from_utf8_lossy(response.body()).into_owned())
}

/// Where the pod says it put a newly created resource, if it said so.
///
/// Relative `Location` values are resolved against the pod root. A header
/// that is missing, not text, or not a resolvable reference yields `None`.
pub fn created_location(pod: &PodLocation, response: &Response<Vec<u8>>) -> Option<Url> {
    let value = response.headers().get(LOCATION)?.to_str().ok()?;
    pod.resolve(value.trim()).ok()
}
