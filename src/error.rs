use crate::types::DeviceCategory;

/// Platform-specific error details.
///
/// On Windows the original `HRESULT`-carrying error is preserved. Use
/// [`Display`](core::fmt::Display) to obtain a human-readable description.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PlatformError {
    #[error("{0}")]
    Message(String),
    #[cfg(windows)]
    #[error("{0}")]
    Windows(#[from] windows::core::Error),
}

impl From<&str> for PlatformError {
    fn from(msg: &str) -> Self {
        Self::Message(msg.to_owned())
    }
}

/// Top-level crate error.
///
/// Only failures that concern the enumerator as a whole are reported here.
/// A single device that cannot be read never produces an `Error`; it shows up
/// as an empty [`Identity`](crate::Identity) instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("system device enumerator unavailable: {0}")]
    Initialization(#[source] PlatformError),
    #[error("no devices of the {category} category could be enumerated: {source}")]
    CategoryEnumeration {
        category: DeviceCategory,
        #[source]
        source: PlatformError,
    },
    #[error("device enumerator already disposed")]
    Disposed,
}

/// Failure while reading one device's properties.
#[derive(Debug, thiserror::Error)]
pub(crate) enum PropertyError {
    #[error("could not bind the device to a property bag: {0}")]
    Bind(#[source] PlatformError),
    #[error("could not read property `{property}`: {source}")]
    Read {
        property: &'static str,
        #[source]
        source: PlatformError,
    },
}
