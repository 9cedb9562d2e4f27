use miette::Diagnostic;
use thiserror::Error;

/// Main error type for icongrid operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error: {0}")]
    #[diagnostic(code(icongrid::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(icongrid::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(icongrid::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(icongrid::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(icongrid::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl From<quick_xml::Error> for IconError {
    fn from(e: quick_xml::Error) -> Self {
        IconError::Parse {
            message: format!("Invalid SVG: {}", e),
            help: Some("Check that the shape sheet is well-formed XML".to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
