//! # discbase-catalog
//!
//! Typed resource handles for the catalog collections served by the local
//! backend: artists, albums, and genres.
//!
//! All three ride the same generic [`Resource`] wrapper; this crate only
//! contributes the record shapes and the collection bindings.
//!
//! ```ignore
//! use discbase_catalog::{artists, Artist};
//! use discbase_resource::RestClient;
//!
//! let artists = artists(RestClient::local()?);
//! artists.mount().await;
//! ```

pub mod records;

pub use records::{Album, Artist, Genre};

use discbase_resource::{MountOptions, Resource, RestClient};

/// Handle to the `artists` collection.
pub fn artists(client: RestClient) -> Resource<Artist> {
    Resource::new(client, "artists")
}

/// Handle to the `albums` collection.
pub fn albums(client: RestClient) -> Resource<Album> {
    Resource::new(client, "albums")
}

/// Handle to the `genres` collection.
pub fn genres(client: RestClient) -> Resource<Genre> {
    Resource::new(client, "genres")
}

/// Handle to the `artists` collection with explicit mount options.
pub fn artists_with(client: RestClient, options: MountOptions<Artist>) -> Resource<Artist> {
    Resource::with_options(client, "artists", options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_bind_the_expected_collection_paths() {
        let client = RestClient::local().unwrap();
        assert_eq!(artists(client.clone()).path(), "artists");
        assert_eq!(albums(client.clone()).path(), "albums");
        assert_eq!(genres(client).path(), "genres");
    }
}
