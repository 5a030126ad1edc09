use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] krxtrend_core::ValidationError),

    #[error(transparent)]
    Analysis(#[from] krxtrend_core::AnalysisError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Analysis(_) => 3,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_failures_map_to_exit_code_3() {
        let error = CliError::from(krxtrend_core::AnalysisError::AllDatesExhausted {
            window_days: 30,
        });
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn validation_failures_map_to_exit_code_2() {
        let error = CliError::from(krxtrend_core::ValidationError::EmptyCode);
        assert_eq!(error.exit_code(), 2);
    }
}
