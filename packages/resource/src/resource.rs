//! The reactive resource wrapper.
//!
//! A [`Resource`] binds one REST collection path to the four CRUD
//! operations and publishes their outcomes through two observable cells.
//! The cells are the only observable outcome: operations return `()` and
//! never propagate errors.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use crate::cell::Cell;
use crate::client::RestClient;
use crate::error::Error;
use crate::types::HttpRequest;

/// A payload the wrapper ships to and from a REST collection.
///
/// Records carry an optional numeric primary key; records that have not
/// been persisted yet have none.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Primary key, when the record has been persisted.
    fn id(&self) -> Option<u64>;
}

/// Which call [`Resource::mount`] issues when the owning UI element
/// becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountMode {
    /// Fetch the collection once.
    #[default]
    Get,
    /// Hold a payload for an initial create; quiet unless made immediate.
    Post,
}

/// Options for the auto-triggered call.
#[derive(Debug, Clone)]
pub struct MountOptions<T> {
    pub mode: MountMode,
    /// Payload for the initial create in [`MountMode::Post`].
    pub payload: Option<T>,
    /// Whether a `Post` mount issues the create at all.
    pub immediate: bool,
}

impl<T> Default for MountOptions<T> {
    fn default() -> Self {
        Self {
            mode: MountMode::Get,
            payload: None,
            immediate: false,
        }
    }
}

/// Reactive handle to one REST collection.
///
/// One handle per consuming UI element; clones share the same cells and the
/// same generation counter. Operations may overlap freely, with no mutual
/// exclusion or de-duplication, but only the most recently issued call is
/// allowed to update the cells when it completes.
#[derive(Clone)]
pub struct Resource<T: Entity> {
    client: RestClient,
    path: String,
    options: MountOptions<T>,
    response: Cell<Vec<T>>,
    error: Cell<String>,
    generation: Arc<AtomicU64>,
}

impl<T: Entity> Resource<T> {
    /// Bind a collection path with default mount options.
    pub fn new(client: RestClient, path: impl Into<String>) -> Self {
        Self::with_options(client, path, MountOptions::default())
    }

    pub fn with_options(
        client: RestClient,
        path: impl Into<String>,
        options: MountOptions<T>,
    ) -> Self {
        Self {
            client,
            path: path.into(),
            options,
            response: Cell::new(),
            error: Cell::new(),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Collection path segment this handle is bound to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Snapshot of the response cell.
    pub fn response(&self) -> Option<Vec<T>> {
        self.response.get()
    }

    /// Snapshot of the error cell.
    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    /// Subscribe to response-cell changes.
    pub fn watch_response(&self) -> watch::Receiver<Option<Vec<T>>> {
        self.response.subscribe()
    }

    /// Subscribe to error-cell changes.
    pub fn watch_error(&self) -> watch::Receiver<Option<String>> {
        self.error.subscribe()
    }

    /// One-shot auto-fetch, run when the owning UI element becomes active.
    ///
    /// Default options issue a single [`Resource::list`] with no retry. In
    /// [`MountMode::Post`] nothing runs unless the options are `immediate`
    /// and carry a payload.
    pub async fn mount(&self) {
        match self.options.mode {
            MountMode::Get => self.list().await,
            MountMode::Post => {
                if self.options.immediate {
                    if let Some(payload) = self.options.payload.clone() {
                        self.create(&payload).await;
                    }
                }
            }
        }
    }

    /// Fetch the collection and replace the response cell.
    ///
    /// On failure the response cell is left unchanged and the formatted
    /// error lands in the error cell.
    pub async fn list(&self) {
        let token = self.begin();
        match self.fetch().await {
            Ok(records) => {
                if self.is_current(token) {
                    debug!(resource = %self.path, count = records.len(), "fetched collection");
                    self.response.set(records);
                }
            }
            Err(error) => self.fail(token, error),
        }
    }

    /// Create a record under the collection's `new` sub-path.
    ///
    /// Success does not refetch and leaves the response cell untouched.
    pub async fn create(&self, payload: &T) {
        let token = self.begin();
        let request = HttpRequest::post(format!("{}/new", self.path));
        if let Err(error) = self.submit(request, payload).await {
            self.fail(token, error);
        }
    }

    /// Update a record via its `{id}/edit` sub-path.
    ///
    /// The id is not validated: a payload without one produces a path
    /// containing the literal `undefined`, and the malformed request
    /// surfaces as an ordinary failure.
    pub async fn update(&self, payload: &T) {
        let token = self.begin();
        let request = HttpRequest::put(format!(
            "{}/{}/edit",
            self.path,
            id_segment(payload.id())
        ));
        if let Err(error) = self.submit(request, payload).await {
            self.fail(token, error);
        }
    }

    /// Delete a record via its `{id}/delete` sub-path, then refresh the
    /// collection. A failed delete records the error and does not refresh.
    pub async fn remove(&self, id: u64) {
        let token = self.begin();
        let request = HttpRequest::delete(format!("{}/{}/delete", self.path, id));
        match self.client.send(request).await {
            Ok(_) => self.list().await,
            Err(error) => self.fail(token, error),
        }
    }

    async fn fetch(&self) -> Result<Vec<T>, Error> {
        let response = self.client.send(HttpRequest::get(&self.path)).await?;
        Ok(response.json()?)
    }

    async fn submit(&self, request: HttpRequest, payload: &T) -> Result<(), Error> {
        let request = request.with_body(payload)?;
        self.client.send(request).await?;
        Ok(())
    }

    /// Start a call: clear the error cell and take a fresh generation token.
    fn begin(&self) -> u64 {
        self.error.clear();
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` still names the most recently issued call.
    fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }

    /// Shared failure handler. Superseded calls are dropped; everything
    /// else lands in the error cell as its `Display` rendering.
    fn fail(&self, token: u64, error: Error) {
        if self.is_current(token) {
            debug!(resource = %self.path, ?error, "request failed");
            self.error.set(error.to_string());
        }
    }
}

/// Render an optional id the way it lands in a request path. A missing id
/// becomes the literal `undefined`, which the server rejects.
fn id_segment(id: Option<u64>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => "undefined".to_string(),
    }
}
