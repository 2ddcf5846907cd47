//! Pod client for LDP containers and text resources
//!
//! [`PodClient`] exposes every operation twice:
//!
//! - `try_*` methods return a [`Result`] and leave reporting to the caller.
//! - the unprefixed methods never fail. They log the outcome through `tracing`
//!   (one `info` event on success, one `warn` event on failure) and degrade to
//!   an empty value.

mod options;

use std::fmt::Display;

use http::{Request, Response};
use smol_str::{SmolStr, ToSmolStr};
use solidpod_common::{
    PodLocation, TransportError, codec,
    error::Result,
    http_client::HttpClient,
    ldp,
};
use tracing::{debug, info, warn};
use url::Url;

pub use options::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, PodOptions};

/// A container the pod accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedContainer {
    /// URL of the new container.
    pub url: Url,
    /// Whether `url` came from the pod's `Location` header. When false it is
    /// the path the slug would produce, which the pod is free not to honor.
    pub confirmed: bool,
}

/// Client for one pod.
///
/// The pod location is fixed at construction; talking to another pod takes
/// another client. Nothing about containers or resources is cached, every
/// call is a fresh round trip.
///
/// ```no_run
/// # async fn example() -> solidpod::Result<()> {
/// use solidpod::PodClient;
///
/// let pod = PodClient::new("http://localhost:3000/alice/")?;
/// pod.create_container("notes").await;
/// pod.publish_data("notes", "todo.txt", &["milk", "eggs"]).await;
/// pod.update_data("notes", "todo.txt", &["bread"]).await;
/// assert_eq!(pod.read_data("notes", "todo.txt").await, ["milk", "eggs", "bread"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PodClient<C = reqwest::Client> {
    transport: C,
    location: PodLocation,
}

impl PodClient<reqwest::Client> {
    /// Create a client backed by reqwest with the default [`PodOptions`].
    pub fn new(location: impl Into<PodLocation>) -> Result<Self> {
        Self::with_options(location, PodOptions::default())
    }

    /// Create a client backed by reqwest configured from `opts`.
    pub fn with_options(location: impl Into<PodLocation>, opts: PodOptions) -> Result<Self> {
        let transport = opts.build_client()?;
        Ok(Self::with_transport(transport, location))
    }
}

impl<C: HttpClient> PodClient<C> {
    /// Create a client on top of any [`HttpClient`].
    pub fn with_transport(transport: C, location: impl Into<PodLocation>) -> Self {
        let location = location.into();
        info!(pod = %location, "pod client initialized for {location}");
        Self {
            transport,
            location,
        }
    }

    /// The pod location, as supplied.
    pub fn location(&self) -> &PodLocation {
        &self.location
    }

    /// Access the underlying transport.
    pub fn transport(&self) -> &C {
        &self.transport
    }

    async fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>> {
        debug!(method = %request.method(), uri = %request.uri(), "sending pod request");
        let response = self
            .transport
            .send_http(request)
            .await
            .map_err(TransportError::from_client)?;
        debug!(status = %response.status(), "pod responded");
        if response.status().is_client_error() || response.status().is_server_error() {
            debug!(body = %String::from_utf8_lossy(response.body()), "pod error body");
        }
        Ok(response)
    }

    /// Ask the pod to create a basic container, using `container_name` as the slug.
    #[tracing::instrument(level = "debug", skip(self), fields(pod = %self.location))]
    pub async fn try_create_container(&self, container_name: &str) -> Result<CreatedContainer> {
        let pod = self.location.base_url()?;
        let assumed = self.location.container_url(container_name)?;
        let request = ldp::create_container_request(&pod, container_name)?;
        let response = ldp::expect_write_success(self.send(request).await?)?;

        match ldp::created_location(&self.location, &response) {
            Some(url) => Ok(CreatedContainer {
                url,
                confirmed: true,
            }),
            None => Ok(CreatedContainer {
                url: assumed,
                confirmed: false,
            }),
        }
    }

    /// Replace the content of `{container}/{file}` with `data`, one record per line.
    ///
    /// Returns the resource URL.
    #[tracing::instrument(level = "debug", skip(self, data), fields(pod = %self.location, records = data.len()))]
    pub async fn try_publish_data<T: Display>(
        &self,
        container_name: &str,
        file_name: &str,
        data: &[T],
    ) -> Result<Url> {
        let url = self.location.resource_url(container_name, file_name)?;
        let request = ldp::put_text_request(&url, codec::encode(data))?;
        ldp::expect_write_success(self.send(request).await?)?;
        Ok(url)
    }

    /// Fetch and decode the records in `{container}/{file}`.
    #[tracing::instrument(level = "debug", skip(self), fields(pod = %self.location))]
    pub async fn try_read_data(&self, container_name: &str, file_name: &str) -> Result<Vec<SmolStr>> {
        let url = self.location.resource_url(container_name, file_name)?;
        let request = ldp::get_text_request(&url)?;
        let text = ldp::read_text_body(self.send(request).await?)?;
        Ok(codec::decode(&text))
    }

    /// Append `data` to the records in `{container}/{file}`.
    ///
    /// A resource the pod reports as missing counts as empty. Any other read
    /// failure is returned without writing, so existing content is never
    /// clobbered. The read and the write are separate requests: a writer in
    /// between loses its update.
    #[tracing::instrument(level = "debug", skip(self, data), fields(pod = %self.location, records = data.len()))]
    pub async fn try_update_data<T: Display>(
        &self,
        container_name: &str,
        file_name: &str,
        data: &[T],
    ) -> Result<Url> {
        let mut records = match self.try_read_data(container_name, file_name).await {
            Ok(records) => records,
            Err(e) if e.is_not_found() => Vec::new(),
            Err(e) => return Err(e),
        };
        records.extend(data.iter().map(ToSmolStr::to_smolstr));
        self.try_publish_data(container_name, file_name, &records)
            .await
    }

    /// Create a basic container, logging the outcome.
    pub async fn create_container(&self, container_name: &str) {
        match self.try_create_container(container_name).await {
            Ok(created) => info!(
                container = container_name,
                url = %created.url,
                confirmed = created.confirmed,
                "container '{container_name}' created at {}",
                created.url
            ),
            Err(e) => warn!(
                container = container_name,
                error = %e,
                "failed to create container '{container_name}': {e}"
            ),
        }
    }

    /// Replace the content of `{container}/{file}`, logging the outcome.
    pub async fn publish_data<T: Display>(&self, container_name: &str, file_name: &str, data: &[T]) {
        match self.try_publish_data(container_name, file_name, data).await {
            Ok(url) => info!(
                container = container_name,
                file = file_name,
                url = %url,
                "data published to '{file_name}' in container '{container_name}' at {url}"
            ),
            Err(e) => warn!(
                container = container_name,
                file = file_name,
                error = %e,
                "failed to publish data to '{file_name}' in container '{container_name}': {e}"
            ),
        }
    }

    /// Read the records in `{container}/{file}`.
    ///
    /// Any failure is logged and yields an empty sequence, so a missing or
    /// unreadable resource looks the same as an empty one.
    pub async fn read_data(&self, container_name: &str, file_name: &str) -> Vec<SmolStr> {
        match self.try_read_data(container_name, file_name).await {
            Ok(records) => {
                info!(
                    container = container_name,
                    file = file_name,
                    records = records.len(),
                    "read {} records from '{file_name}' in container '{container_name}'",
                    records.len()
                );
                records
            }
            Err(e) => {
                warn!(
                    container = container_name,
                    file = file_name,
                    error = %e,
                    "failed to read data from '{file_name}' in container '{container_name}': {e}"
                );
                Vec::new()
            }
        }
    }

    /// [`read_data`](Self::read_data), writing the records into `out`.
    ///
    /// Previous contents of `out` are replaced.
    pub async fn read_data_into(&self, container_name: &str, file_name: &str, out: &mut Vec<SmolStr>) {
        *out = self.read_data(container_name, file_name).await;
    }

    /// Append `data` to `{container}/{file}`, logging the outcome.
    ///
    /// If the current content cannot be read it is treated as empty and the
    /// resource ends up holding only `data`.
    pub async fn update_data<T: Display>(&self, container_name: &str, file_name: &str, data: &[T]) {
        let mut records = self.read_data(container_name, file_name).await;
        records.extend(data.iter().map(ToSmolStr::to_smolstr));
        self.publish_data(container_name, file_name, &records).await;
    }
}
