use std::fmt;

/// Error types of the finite-difference BVP toolkit
#[derive(Debug, Clone, PartialEq)]
pub enum FDError {
    /// bad sample sets, unknown method/problem/log level names, malformed task values
    InvalidConfiguration(String),
    /// the task document could not be parsed
    TaskParsing(String),
    /// writing results or logs failed
    Io(String),
}

impl fmt::Display for FDError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FDError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            FDError::TaskParsing(msg) => write!(f, "Task parsing error: {}", msg),
            FDError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for FDError {}

impl From<std::io::Error> for FDError {
    fn from(e: std::io::Error) -> Self {
        FDError::Io(e.to_string())
    }
}

impl From<csv::Error> for FDError {
    fn from(e: csv::Error) -> Self {
        FDError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = FDError::InvalidConfiguration("need at least 2 samples".to_string());
        assert_eq!(e.to_string(), "Invalid configuration: need at least 2 samples");
        let e: FDError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(e, FDError::Io(_)));
    }
}
