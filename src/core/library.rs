use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    AlreadyBorrowed {
        message: String,
    },
    NotBorrowed {
        message: String,
    },
    // Any I/O or serialization fault raised while saving or loading the
    // catalog file. Caught inside the repository and never surfaced to the
    // caller as a raised fault.
    Persistence {
        message: String,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn already_borrowed(message: &str) -> LibraryError {
        LibraryError::AlreadyBorrowed { message: message.to_string() }
    }

    pub fn not_borrowed(message: &str) -> LibraryError {
        LibraryError::NotBorrowed { message: message.to_string() }
    }

    pub fn persistence(message: &str) -> LibraryError {
        LibraryError::Persistence { message: message.to_string() }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::persistence(
            format!("file io {:?}", err).as_str())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::persistence(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::AlreadyBorrowed { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotBorrowed { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Persistence { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for catalog and repository operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound { message: _ }));
    }

    #[test]
    fn test_should_create_already_borrowed_error() {
        assert!(matches!(LibraryError::already_borrowed("test"), LibraryError::AlreadyBorrowed { message: _ }));
    }

    #[test]
    fn test_should_create_not_borrowed_error() {
        assert!(matches!(LibraryError::not_borrowed("test"), LibraryError::NotBorrowed { message: _ }));
    }

    #[test]
    fn test_should_create_persistence_error() {
        assert!(matches!(LibraryError::persistence("test"), LibraryError::Persistence { message: _ }));
    }

    #[test]
    fn test_should_convert_io_error() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(matches!(LibraryError::from(err), LibraryError::Persistence { message: _ }));
    }

    #[test]
    fn test_should_format_error_message() {
        assert_eq!("book not found", LibraryError::not_found("book not found").to_string());
    }
}
