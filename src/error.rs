// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Storage(String),
    Api(ApiError),
}

/// Failures talking to the GoBarber HTTP API.
///
/// Pages turn every variant into an error toast; none of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection refused, TLS).
    Network(String),

    /// The server rejected the credentials or the token expired.
    Unauthorized,

    /// Any other non-success status, with the server's message when it sent one.
    Status { code: u16, message: String },

    /// The response body did not have the expected shape.
    Decode(String),
}

impl ApiError {
    /// Builds the error for a non-success HTTP status.
    pub fn from_status(code: u16, message: impl Into<String>) -> Self {
        if code == 401 {
            ApiError::Unauthorized
        } else {
            ApiError::Status {
                code,
                message: message.into(),
            }
        }
    }

    /// Returns the i18n key describing this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "error-api-network",
            ApiError::Unauthorized => "error-api-unauthorized",
            ApiError::Status { .. } => "error-api-status",
            ApiError::Decode(_) => "error-api-decode",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Unauthorized => write!(f, "Unauthorized"),
            ApiError::Status { code, message } if message.is_empty() => {
                write!(f, "HTTP {}", code)
            }
            ApiError::Status { code, message } => write!(f, "HTTP {}: {}", code, message),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::from_status(status.as_u16(), "")
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl<T: fmt::Debug> From<ciborium::de::Error<T>> for Error {
    fn from(err: ciborium::de::Error<T>) -> Self {
        Error::Storage(err.to_string())
    }
}

impl<T: fmt::Debug> From<ciborium::ser::Error<T>> for Error {
    fn from(err: ciborium::ser::Error<T>) -> Self {
        Error::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn status_401_is_unauthorized() {
        assert_eq!(ApiError::from_status(401, "expired"), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(400, "E-mail already used"),
            ApiError::Status {
                code: 400,
                message: "E-mail already used".to_string()
            }
        );
    }

    #[test]
    fn api_error_display_includes_server_message() {
        let err = Error::from(ApiError::from_status(400, "Incorrect email/password combination."));
        assert_eq!(
            err.to_string(),
            "API Error: HTTP 400: Incorrect email/password combination."
        );
        assert_eq!(ApiError::from_status(500, "").to_string(), "HTTP 500");
    }

    #[test]
    fn every_api_error_has_an_i18n_key() {
        let errors = [
            ApiError::Network("refused".into()),
            ApiError::Unauthorized,
            ApiError::from_status(500, ""),
            ApiError::Decode("eof".into()),
        ];
        for err in errors {
            assert!(err.i18n_key().starts_with("error-api-"));
        }
    }

    #[test]
    fn toml_error_maps_to_config() {
        let err: Error = toml::from_str::<toml::Table>("not = valid = toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Config(_)));
    }
}
