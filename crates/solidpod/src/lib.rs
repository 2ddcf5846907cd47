//! # solidpod
//!
//! A small client for [Solid](https://solidproject.org) pods, speaking the
//! [Linked Data Platform](https://www.w3.org/TR/ldp/) conventions over plain HTTP.
//!
//! It does four things:
//!
//! - create basic containers (`POST` with a `Slug`)
//! - publish a sequence of records to a text resource (`PUT`, replaces content)
//! - read the records back (`GET`)
//! - append records (read, concatenate, publish)
//!
//! Records are stored one per line. Anything implementing `Display` can be
//! published; reads always return text.
//!
//! ## Example
//!
//! ```no_run
//! use solidpod::PodClient;
//!
//! #[tokio::main]
//! async fn main() -> miette::Result<()> {
//!     let pod = PodClient::new("http://localhost:3000/alice/")?;
//!
//!     // Explicit results when the caller wants to react to failures
//!     let created = pod.try_create_container("sensors").await?;
//!     println!("container at {} (confirmed: {})", created.url, created.confirmed);
//!
//!     pod.try_publish_data("sensors", "readings.txt", &[21.5, 22.0]).await?;
//!     pod.try_update_data("sensors", "readings.txt", &[22.4]).await?;
//!
//!     for reading in pod.try_read_data("sensors", "readings.txt").await? {
//!         println!("{reading}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The unprefixed operations (`create_container`, `publish_data`, `read_data`,
//! `update_data`) never return errors; they report through `tracing` and fall
//! back to empty results.

#![warn(missing_docs)]

/// Pod client and its options
pub mod client;

pub use client::{CreatedContainer, PodClient, PodOptions};
pub use solidpod_common::*;
