use std::{error::Error, fmt, sync::Arc};

/// Any error a bound callable may produce.
///
/// Strings, [`anyhow::Error`](https://docs.rs/anyhow) and every
/// `std::error::Error + Send + Sync + 'static` convert into it.
pub type DynError = Box<dyn Error + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub enum ErrorKind {
    InvalidCallable,
    InvalidReturnShape,
    ArityMismatch,
    ArgumentMismatch,
    OutputConversion,
    Propagated,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCallable => "InvalidCallable",
            Self::InvalidReturnShape => "InvalidReturnShape",
            Self::ArityMismatch => "ArityMismatch",
            Self::ArgumentMismatch => "ArgumentMismatch",
            Self::OutputConversion => "OutputConversion",
            Self::Propagated => "Propagated",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error held by a failed [`Outcome`](crate::outcome::Outcome).
///
/// Every variant except [`ErrorInfo::Propagated`] is raised by the outcome
/// itself while validating or interpreting a dynamic bind. `Propagated`
/// carries the error a bound callable returned, unchanged.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ErrorInfo {
    #[error("Bind expects a callable, got {found}")]
    InvalidCallable { found: &'static str },
    #[error("Callable must return {expected}, error, or ({expected}, error), declared {declared}")]
    InvalidReturnShape {
        expected: &'static str,
        declared: String,
    },
    #[error("Bound callable expected {expected} arguments, got {got}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("Argument {position} expected {expected}, got {got}")]
    ArgumentMismatch {
        position: usize,
        expected: &'static str,
        got: &'static str,
    },
    #[error("Failed to convert callable output: {reason}")]
    OutputConversion { reason: String },
    #[error(transparent)]
    Propagated(Arc<dyn Error + Send + Sync + 'static>),
}

impl ErrorInfo {
    pub fn propagated(err: impl Into<DynError>) -> Self {
        let err: DynError = err.into();

        Self::Propagated(Arc::from(err))
    }

    /// Shorthand for a propagated [`Message`].
    pub fn msg(message: impl Into<String>) -> Self {
        Self::propagated(Message::new(message))
    }

    pub fn output_conversion(reason: impl Into<String>) -> Self {
        Self::OutputConversion {
            reason: reason.into(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCallable { .. } => ErrorKind::InvalidCallable,
            Self::InvalidReturnShape { .. } => ErrorKind::InvalidReturnShape,
            Self::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            Self::ArgumentMismatch { .. } => ErrorKind::ArgumentMismatch,
            Self::OutputConversion { .. } => ErrorKind::OutputConversion,
            Self::Propagated(_) => ErrorKind::Propagated,
        }
    }

    /// Returns the callable's own error if this is a propagated error of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        match self {
            Self::Propagated(err) => err.downcast_ref::<E>(),
            _ => None,
        }
    }
}

impl PartialEq for ErrorInfo {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.to_string() == other.to_string()
    }
}

impl From<DynError> for ErrorInfo {
    fn from(err: DynError) -> Self {
        Self::propagated(err)
    }
}

impl From<Message> for ErrorInfo {
    fn from(message: Message) -> Self {
        Self::propagated(message)
    }
}

/// A plain human readable error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct Message(String);

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
mod serde {
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    use super::ErrorInfo;

    impl Serialize for ErrorInfo {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut state = serializer.serialize_struct("ErrorInfo", 2)?;

            state.serialize_field("kind", &self.kind())?;
            state.serialize_field("message", &self.to_string())?;

            state.end()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("Disk full")]
    struct DiskFull;

    #[derive(Debug, thiserror::Error)]
    #[error("Write failed")]
    struct WriteFailed(#[source] DiskFull);

    #[test]
    fn propagated_error_is_carried_unchanged() {
        let err = ErrorInfo::propagated(WriteFailed(DiskFull));

        assert_eq!(err.kind(), ErrorKind::Propagated);
        assert_eq!(err.to_string(), "Write failed");
        assert!(err.downcast_ref::<WriteFailed>().is_some());
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("Disk full")
        );
    }

    #[test]
    fn strings_and_anyhow_errors_propagate() {
        let from_str = ErrorInfo::propagated("boom");
        let from_anyhow = ErrorInfo::propagated(anyhow::anyhow!("boom"));

        assert_eq!(from_str, from_anyhow);
        assert_eq!(from_str, ErrorInfo::msg("boom"));
    }

    #[test]
    fn kinds_distinguish_equal_messages() {
        let reason = "Bound callable expected 2 arguments, got 1";

        assert_eq!(
            ErrorInfo::ArityMismatch {
                expected: 2,
                got: 1
            }
            .to_string(),
            reason
        );
        assert_ne!(
            ErrorInfo::ArityMismatch {
                expected: 2,
                got: 1
            },
            ErrorInfo::msg(reason)
        );
    }

    #[test]
    fn downcast_ignores_internal_errors() {
        let err = ErrorInfo::output_conversion("nope");

        assert!(err.downcast_ref::<Message>().is_none());
        assert_eq!(
            ErrorInfo::msg("x")
                .downcast_ref::<Message>()
                .map(Message::as_str),
            Some("x")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_kind_and_message() {
        let json = serde_json::to_value(ErrorInfo::ArityMismatch {
            expected: 2,
            got: 1,
        })
        .expect("Failed to serialize error");

        assert_eq!(
            json,
            serde_json::json!({
                "kind": "ArityMismatch",
                "message": "Bound callable expected 2 arguments, got 1",
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn kind_serializes_as_its_name() {
        for kind in [ErrorKind::InvalidCallable, ErrorKind::Propagated] {
            let json = serde_json::to_value(kind).expect("Failed to serialize kind");

            assert_eq!(json, serde_json::Value::String(kind.as_str().to_owned()));
        }
    }
}
