//! Top-level CLI error.

use hxs_eval::EvalError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The script failed.
    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("{}", read_message(.path, .source))]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A setting from the environment or the command line is malformed.
    #[error("invalid value '{value}' for {name}: expected a positive integer")]
    InvalidSetting { name: String, value: String },

    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Eval(_) => 1,
            CliError::Read { .. } | CliError::InvalidSetting { .. } | CliError::Usage(_) => 2,
        }
    }
}

fn read_message(path: &str, err: &std::io::Error) -> String {
    match err.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}
