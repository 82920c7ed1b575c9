use thiserror::Error;

/// Errors raised while building, reading or writing signals and curves.
#[derive(Debug, Error)]
pub enum Error {
    /// The time spans of the two signals of a curve do not overlap.
    #[error("Domains do not overlap.")]
    InvalidDomain,
    /// A curve could not be created. The cause is kept as the error source.
    #[error("Parametric curve not created.")]
    NotCreated(#[source] Box<Error>),
    /// The sampling step of a signal is not a positive, finite number.
    #[error("invalid sampling step: {0}")]
    InvalidStep(f64),
    /// The start time of a signal is not finite.
    #[error("invalid start time: {0}")]
    InvalidStart(f64),
    /// A signal needs at least one sample.
    #[error("signal has no samples")]
    EmptySignal,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Binary(#[from] bincode::Error),
}

impl Error {
    /// Wraps this error as the cause of a failed curve construction.
    pub(crate) fn not_created(self) -> Self {
        Error::NotCreated(Box::new(self))
    }

    /// Follows [Error::NotCreated] wrappers down to the underlying error.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::NotCreated(inner) => inner.root_cause(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
