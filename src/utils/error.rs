use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure to turn raw text into one of the typed models.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed JSON: {0}")]
    MalformedText(#[source] serde_json::Error),

    #[error("Schema mismatch: {message}")]
    SchemaMismatch { message: String },
}

impl DecodeError {
    pub(crate) fn schema(err: serde_json::Error) -> Self {
        DecodeError::SchemaMismatch {
            message: err.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' failed ({status}): {stderr}")]
    NonZeroExit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("'{program}' wrote non UTF-8 output")]
    InvalidUtf8 { program: String },
}

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("Could not parse JSON from '{}': {source}", path.display())]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("Could not serialize '{}': {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error on '{}': {source}", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UpdateError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            UpdateError::InvalidManifest { path, .. }
            | UpdateError::Encode { path, .. }
            | UpdateError::IoFailure { path, .. } => path,
        }
    }
}

#[derive(Error, Debug)]
pub enum PinError {
    #[error("Package listing failed: {0}")]
    Listing(#[from] ProcessError),

    #[error("Invalid package listing: {0}")]
    Decode(#[from] DecodeError),

    #[error("{} of the manifests could not be updated; first failure: {}", failures.len(), first_failure(failures))]
    Aggregate { failures: Vec<UpdateError> },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

fn first_failure(failures: &[UpdateError]) -> String {
    failures
        .first()
        .map(|failure| failure.to_string())
        .unwrap_or_default()
}

impl PinError {
    pub fn exit_code(&self) -> i32 {
        match self {
            PinError::Aggregate { .. } => 1,
            PinError::Config { .. } | PinError::InvalidConfigValue { .. } => 2,
            PinError::Listing(_) | PinError::Decode(_) => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PinError::Listing(_) => {
                "Check that lerna is installed and that `npx lerna list --all --json` works in the root"
            }
            PinError::Decode(_) => "The listing command must print a JSON array of packages",
            PinError::Aggregate { .. } => {
                "Fix the listed manifests and run again; manifests already written are up to date"
            }
            PinError::Config { .. } | PinError::InvalidConfigValue { .. } => {
                "Check the command line arguments and the configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PinError>;
