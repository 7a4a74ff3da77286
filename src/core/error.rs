//! Error types for the handler layer

pub type Result<T> = std::result::Result<T, HandlerError>;

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// IO error from an output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A named sink rejected a record
    #[error("Sink '{sink}' failed: {message}")]
    Sink { sink: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl HandlerError {
    /// Create a sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        HandlerError::Sink {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        HandlerError::Other(msg.into())
    }
}
