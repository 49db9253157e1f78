//! Error handling for depview
//!
//! The error system mirrors how the CLI presents failures:
//! 1. **Strongly-typed errors** ([`DepviewError`]) for precise matching in code
//! 2. **User-friendly messages** ([`ErrorContext`]) with details and suggestions
//!
//! Graph resolution itself never fails: a missing start object, a dangling
//! `dependsOn` reference or an isolated object all degrade to an empty or
//! partial result. Errors only come from the layers around it: loading the
//! object list, parsing object references, reading configuration, and
//! ordering a graph that contains a cycle.
//!
//! # Examples
//!
//! ```rust,no_run
//! use depview_cli::core::{DepviewError, ErrorContext, user_friendly_error};
//!
//! let error = DepviewError::ObjectNotFound {
//!     id: "flux-system/infra".to_string(),
//!     suggestions: vec!["flux-system/infra-controllers".to_string()],
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for depview operations.
///
/// ## Object model
/// - [`DuplicateNode`] - Two objects in one list share a composite id
/// - [`InvalidObjectRef`] - A `namespace/name` reference could not be parsed
/// - [`ObjectNotFound`] - The requested start object is not in the object list
/// - [`CircularDependency`] - The `dependsOn` relation contains a cycle
///
/// ## Object sources
/// - [`ObjectListParse`] - The object list is not valid JSON/YAML
/// - [`EndpointRequest`] - The HTTP request to the object-list endpoint failed
/// - [`EndpointStatus`] - The endpoint answered with a non-success status
/// - [`NoObjectSource`] - Neither a file, a URL nor a configured endpoint
///
/// ## Configuration and I/O
/// - [`ConfigError`], [`InvalidFormat`], [`IoError`], [`TomlError`]
///
/// [`DuplicateNode`]: DepviewError::DuplicateNode
/// [`InvalidObjectRef`]: DepviewError::InvalidObjectRef
/// [`ObjectNotFound`]: DepviewError::ObjectNotFound
/// [`CircularDependency`]: DepviewError::CircularDependency
/// [`ObjectListParse`]: DepviewError::ObjectListParse
/// [`EndpointRequest`]: DepviewError::EndpointRequest
/// [`EndpointStatus`]: DepviewError::EndpointStatus
/// [`NoObjectSource`]: DepviewError::NoObjectSource
/// [`ConfigError`]: DepviewError::ConfigError
/// [`InvalidFormat`]: DepviewError::InvalidFormat
/// [`IoError`]: DepviewError::IoError
/// [`TomlError`]: DepviewError::TomlError
#[derive(Error, Debug)]
pub enum DepviewError {
    /// Two objects in the same object list resolve to the same composite id.
    #[error("Duplicate object '{id}' in object list")]
    DuplicateNode {
        /// The composite `namespace/name` id that appeared twice
        id: String,
    },

    /// An object reference given on the command line is malformed.
    #[error("Invalid object reference '{reference}': {reason}")]
    InvalidObjectRef {
        /// The reference as typed
        reference: String,
        /// Why it was rejected
        reason: String,
    },

    /// The start object is not part of the loaded object list.
    #[error("Object '{id}' not found")]
    ObjectNotFound {
        /// Composite id that was looked up
        id: String,
        /// Closest known ids, best match first
        suggestions: Vec<String>,
    },

    /// The directed `dependsOn` relation contains a cycle.
    #[error("Circular dependency detected: {chain}")]
    CircularDependency {
        /// Rendered cycle, e.g. `default/a → default/b → default/a`
        chain: String,
    },

    /// The object list could not be decoded.
    #[error("Invalid object list in {origin}: {reason}")]
    ObjectListParse {
        /// File path or URL the list came from
        origin: String,
        /// Decoder message
        reason: String,
    },

    /// The HTTP request to the object-list endpoint failed before a response.
    #[error("Request to {url} failed: {reason}")]
    EndpointRequest {
        /// Endpoint URL
        url: String,
        /// Transport error message
        reason: String,
    },

    /// The object-list endpoint answered with a non-success status.
    #[error("Endpoint {url} returned HTTP {status}")]
    EndpointStatus {
        /// Endpoint URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// No object source was given and no endpoint is configured.
    #[error("No object source: pass --file or --url, or set 'endpoint' in the config file")]
    NoObjectSource,

    /// Configuration file content is invalid.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },

    /// Unknown output format requested.
    #[error("Invalid format '{format}'. Valid formats are: {valid}")]
    InvalidFormat {
        /// Requested format
        format: String,
        /// Comma separated list of accepted formats
        valid: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for DepviewError {
    fn clone(&self) -> Self {
        match self {
            Self::DuplicateNode {
                id,
            } => Self::DuplicateNode {
                id: id.clone(),
            },
            Self::InvalidObjectRef {
                reference,
                reason,
            } => Self::InvalidObjectRef {
                reference: reference.clone(),
                reason: reason.clone(),
            },
            Self::ObjectNotFound {
                id,
                suggestions,
            } => Self::ObjectNotFound {
                id: id.clone(),
                suggestions: suggestions.clone(),
            },
            Self::CircularDependency {
                chain,
            } => Self::CircularDependency {
                chain: chain.clone(),
            },
            Self::ObjectListParse {
                origin,
                reason,
            } => Self::ObjectListParse {
                origin: origin.clone(),
                reason: reason.clone(),
            },
            Self::EndpointRequest {
                url,
                reason,
            } => Self::EndpointRequest {
                url: url.clone(),
                reason: reason.clone(),
            },
            Self::EndpointStatus {
                url,
                status,
            } => Self::EndpointStatus {
                url: url.clone(),
                status: *status,
            },
            Self::NoObjectSource => Self::NoObjectSource,
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            Self::InvalidFormat {
                format,
                valid,
            } => Self::InvalidFormat {
                format: format.clone(),
                valid: valid.clone(),
            },
            // io::Error and toml::de::Error are not Clone; keep the message.
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// A [`DepviewError`] decorated with an optional suggestion and details.
///
/// Displayed on stderr by the CLI: error in red, details in yellow and the
/// suggestion in green.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DepviewError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context without suggestion or details.
    #[must_use]
    pub const fn new(error: DepviewError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for the terminal.
///
/// Known [`DepviewError`]s get tailored suggestions; I/O and TOML errors
/// are mapped onto the closest variant. Anything else is reported with its
/// full cause chain.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(ctx) = error.downcast_ref::<ErrorContext>() {
        return ErrorContext {
            error: ctx.error.clone(),
            suggestion: ctx.suggestion.clone(),
            details: ctx.details.clone(),
        };
    }

    // Also matches a DepviewError wrapped in `.context(..)` layers.
    if let Some(depview_error) = error.downcast_ref::<DepviewError>() {
        let mut ctx = create_error_context(depview_error.clone());
        let outer = error.to_string();
        if ctx.details.is_none() && outer != depview_error.to_string() {
            ctx.details = Some(outer);
        }
        return ctx;
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(DepviewError::Other {
                    message: format!("{error:#}"),
                })
                .with_suggestion("Check that the file exists and the path is correct");
            }
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(DepviewError::Other {
                    message: format!("{error:#}"),
                })
                .with_suggestion("Check the file permissions");
            }
            _ => {}
        }
    }

    if error.downcast_ref::<toml::de::Error>().is_some() {
        return ErrorContext::new(DepviewError::ConfigError {
            message: format!("{error:#}"),
        })
        .with_suggestion("Check the TOML syntax of your depview config file")
        .with_details("Valid keys: endpoint, token, default_namespace, poll_interval_secs, request_timeout_secs");
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(DepviewError::Other {
        message,
    })
}

fn create_error_context(error: DepviewError) -> ErrorContext {
    match &error {
        DepviewError::DuplicateNode {
            ..
        } => ErrorContext::new(error)
            .with_details("Every object must have a unique namespace/name pair within one object list"),

        DepviewError::InvalidObjectRef {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Use 'namespace/name', or a bare 'name' to use the default namespace"),

        DepviewError::ObjectNotFound {
            suggestions,
            ..
        } => {
            let suggestion = if suggestions.is_empty() {
                "Run 'depview order' to list the known objects".to_string()
            } else {
                format!("Did you mean: {}?", suggestions.join(", "))
            };
            ErrorContext::new(error.clone()).with_suggestion(suggestion)
        }

        DepviewError::CircularDependency {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Remove one of the dependsOn references in the cycle")
            .with_details("Objects in a dependency cycle can never become ready"),

        DepviewError::ObjectListParse {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Provide a JSON/YAML array of objects or an {\"objects\": [...]} envelope")
            .with_details("Each object needs 'name' and 'namespace'; 'dependsOn' is optional"),

        DepviewError::EndpointRequest {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the endpoint URL and your network connection"),

        DepviewError::EndpointStatus {
            status,
            ..
        } => {
            let suggestion = match status {
                401 | 403 => "Check the 'token' in your depview config file",
                404 => "Check the endpoint path",
                _ => "Try again later or run with --verbose for details",
            };
            ErrorContext::new(error.clone()).with_suggestion(suggestion)
        }

        DepviewError::NoObjectSource => ErrorContext::new(error)
            .with_suggestion("Run 'depview graph --file objects.json <ref>' or configure an endpoint"),

        DepviewError::InvalidFormat {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Run the command with --help to see its formats"),

        _ => ErrorContext::new(error),
    }
}
