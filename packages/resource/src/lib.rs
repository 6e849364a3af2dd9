//! # discbase-resource
//!
//! Reactive HTTP resource wrapper for REST collections.
//!
//! A [`Resource`] binds one collection path (e.g. `artists`) to the four
//! CRUD operations and publishes outcomes through two observable cells: the
//! response cell holds the most recently fetched collection, the error cell
//! the formatted description of the most recent failure. UI code reads the
//! cells; the operations themselves return `()`.
//!
//! ## Usage
//!
//! ```ignore
//! use discbase_resource::{Resource, RestClient};
//!
//! let client = RestClient::local()?;
//! let artists: Resource<Artist> = Resource::new(client, "artists");
//!
//! // One-shot auto-fetch when the owning element becomes active.
//! artists.mount().await;
//!
//! if let Some(records) = artists.response() {
//!     render(records);
//! }
//! if let Some(message) = artists.error() {
//!     show_error(message);
//! }
//! ```
//!
//! ## Request conventions
//!
//! Paths are fixed relative to the resource name `R`:
//!
//! ```text
//! GET    /R             list
//! POST   /R/new         create
//! PUT    /R/{id}/edit   update
//! DELETE /R/{id}/delete remove (refreshes the collection on success)
//! ```
//!
//! ## Concurrency
//!
//! Operations may overlap freely; there is no mutual exclusion,
//! de-duplication, cancellation, or retry. A per-handle generation token
//! decides which in-flight call may update the cells: only the most
//! recently issued one.

pub mod cell;
pub mod client;
pub mod error;
pub mod executor;
pub mod resource;
pub mod types;

pub use cell::Cell;
pub use client::{RestClient, DEFAULT_BASE_URL};
pub use error::Error;
pub use executor::{HttpExecutor, ReqwestExecutor};
pub use resource::{Entity, MountMode, MountOptions, Resource};
pub use types::{HttpRequest, HttpResponse, Method};
