use thiserror::Error;

#[derive(Error, Debug)]
pub enum PenFactoryError {
    #[error("Cannot instantiate abstract type `{0}`")]
    AbstractInstantiation(String),

    #[error("Unknown variant `{0}`")]
    UnknownVariant(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl PenFactoryError {
    pub fn abstract_instantiation<S: Into<String>>(type_name: S) -> Self {
        Self::AbstractInstantiation(type_name.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }
}

impl From<toml::de::Error> for PenFactoryError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abstract_instantiation_message() {
        let err = PenFactoryError::abstract_instantiation("PenFactory");
        assert_eq!(
            err.to_string(),
            "Cannot instantiate abstract type `PenFactory`"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: PenFactoryError = io.into();
        assert!(matches!(err, PenFactoryError::Io(_)));
    }
}
