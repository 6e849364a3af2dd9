//! Catalog record shapes.
//!
//! Display fields are plain strings, the way the backend stores them; `id`
//! is absent on records that have not been persisted yet and is omitted
//! from serialized payloads.

use serde::{Deserialize, Serialize};

use discbase_resource::Entity;

/// A performing artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
}

impl Artist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl Entity for Artist {
    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// A genre label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl Entity for Genre {
    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// An album entry linking an artist, a title, a genre, and a release year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub year: String,
}

impl Entity for Album {
    fn id(&self) -> Option<u64> {
        self.id
    }
}
