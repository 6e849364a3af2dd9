/// Failure classification for resource operations.
///
/// The `Display` rendering of each variant is exactly the text the error
/// cell publishes to the UI layer, so classification happens once, here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The server answered with a non-success status.
    #[error("HTTP error! Status: {status} - {status_text}")]
    Status { status: u16, status_text: String },

    /// The request never produced a response: refused connection, DNS
    /// failure, or a transport-level timeout. Status and status text are
    /// unavailable, so the rendering carries `undefined` placeholders.
    #[error("HTTP error! Status: undefined - undefined")]
    Transport { message: String },

    /// The response body did not decode into the expected record shape, or
    /// a payload did not serialize.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// The base URL or a resolved request URL is invalid.
    #[error("{0}")]
    Url(#[from] url::ParseError),

    /// A failure outside the recognized categories.
    #[error("An unknown error occurred")]
    Unknown,
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Transport {
            message: error.to_string(),
        }
    }
}
