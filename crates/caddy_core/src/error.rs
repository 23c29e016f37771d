use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaddyError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CaddyError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        CaddyError::InvalidInput(msg.into())
    }

    /// Errors caused by the caller's request, as opposed to the environment.
    pub fn is_caller_error(&self) -> bool {
        match self {
            CaddyError::InvalidInput(_) => true,
            CaddyError::Json(err) => err.is_data() || err.is_syntax(),
            CaddyError::Config(_) | CaddyError::Yaml(_) => true,
            CaddyError::Io(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CaddyError>;

/// Rejects NaN and infinities for numeric inputs that feed the simulation.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CaddyError::InvalidInput(format!("{name} must be finite, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CaddyError::invalid_input("reference speed must be positive");
        assert_eq!(err.to_string(), "Invalid input: reference speed must be positive");
        assert!(err.is_caller_error());
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("yards", 150.0).unwrap(), 150.0);
        assert!(ensure_finite("yards", f64::NAN).is_err());
        assert!(ensure_finite("yards", f64::INFINITY).is_err());
    }

    #[test]
    fn test_json_error_conversion() {
        let err: CaddyError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, CaddyError::Json(_)));
        assert!(err.is_caller_error());
    }
}
