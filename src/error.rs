use crate::colormap::Library;

/// Errors returned by the parsing and colormap helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither an epoch in milliseconds nor an ISO 8601 date-time.
    #[error("Invalid timestamp {input:?}: {source}")]
    InvalidTimestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Timestamp {0} ms is out of the representable range")]
    TimestampOutOfRange(i64),

    /// Not a `yyyy-mm-dd` date.
    #[error("Invalid date {input:?}: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Unknown colormap library '{0}'")]
    UnknownLibrary(String),

    #[error("Unknown colormap '{name}' in library {library}")]
    UnknownColormap { library: Library, name: String },

    /// The library is known but its Cargo feature is disabled.
    #[error("Colormap library {0} is not enabled in this build")]
    LibraryDisabled(Library),
}

pub type Result<T> = std::result::Result<T, Error>;
