use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tokmap operations
#[derive(Error, Diagnostic, Debug)]
pub enum TokmapError {
    #[error("Malformed dictionary: {message}")]
    #[diagnostic(code(tokmap::dictionary))]
    MalformedDictionary {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Platform defines no recognized value fields")]
    #[diagnostic(
        code(tokmap::platform),
        help("set `value_transform_fields` on the platform before mapping")
    )]
    MissingRecognizedFields,

    #[error("Token tree exceeds the maximum depth of {max}")]
    #[diagnostic(code(tokmap::depth))]
    DepthExceeded { max: usize },
}

pub type Result<T> = std::result::Result<T, TokmapError>;
