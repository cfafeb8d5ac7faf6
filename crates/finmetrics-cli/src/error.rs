use finmetrics_core::{CoreError, ProviderError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{path}: {source}")]
    Provider {
        path: String,
        #[source]
        source: ProviderError,
    },

    #[error("command finished with {error_count} error(s)")]
    ResponseErrors { error_count: usize },

    #[error("strict mode failed: warnings={warning_count}, errors={error_count}")]
    StrictModeViolation {
        warning_count: usize,
        error_count: usize,
    },

    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("log filter error: {0}")]
    Logging(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for CliError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(error) => Self::Validation(error),
            CoreError::Serialization(error) => Self::Serialization(error),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Logging(_) => 2,
            Self::Provider { .. } | Self::ResponseErrors { .. } => 3,
            Self::StrictModeViolation { .. } => 5,
            Self::Read { .. } | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_category() {
        assert_eq!(CliError::from(ValidationError::EmptySymbol).exit_code(), 2);
        let provider = CliError::Provider {
            path: String::from("a.json"),
            source: ProviderError::no_data("empty"),
        };
        assert_eq!(provider.exit_code(), 3);
        assert_eq!(provider.to_string(), "a.json: empty");
        let strict = CliError::StrictModeViolation {
            warning_count: 1,
            error_count: 0,
        };
        assert_eq!(strict.exit_code(), 5);
    }
}
