//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: stimulus error (invalid configuration, bad dimensions)
//! - 11: I/O error (config file read, PNG write)
//! - 12: input error (malformed JSON in --params or --config)
//! - 13: serialization error
//! - 14: display error (window backend failure)

use rdm_core::RdmError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// Rejected configuration or other core failure.
    Stimulus(RdmError),
    Io(String),
    /// Malformed user input.
    Input(String),
    Serialization(String),
    /// The attached display failed.
    Display(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Stimulus(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
            CliError::Display(_) => 14,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Stimulus(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
            CliError::Display(msg) => write!(f, "display failed: {msg}"),
        }
    }
}

impl From<RdmError> for CliError {
    fn from(e: RdmError) -> Self {
        match e {
            RdmError::Io(msg) => CliError::Io(msg),
            RdmError::RenderBackend(msg) => CliError::Display(msg),
            other => CliError::Stimulus(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stimulus_error_exit_code_is_10() {
        let err = CliError::Stimulus(RdmError::InvalidConfig("n_dots".into()));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("write failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("bad json".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn display_error_exit_code_is_14() {
        let err = CliError::Display("no gl context".into());
        assert_eq!(err.exit_code(), 14);
    }

    #[test]
    fn rdm_io_routes_to_cli_io() {
        let cli_err = CliError::from(RdmError::Io("disk full".into()));
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }

    #[test]
    fn render_backend_routes_to_display() {
        let cli_err = CliError::from(RdmError::RenderBackend("lost".into()));
        assert_eq!(cli_err.exit_code(), 14);
        assert!(cli_err.to_string().contains("lost"));
    }

    #[test]
    fn invalid_config_routes_to_stimulus() {
        let cli_err = CliError::from(RdmError::InvalidConfig("motion_coherence".into()));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("motion_coherence"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
