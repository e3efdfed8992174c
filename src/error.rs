use thiserror::Error;

/// Errors raised by [`Opt`](crate::Opt) and [`PartialFunction`](crate::PartialFunction).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("No value present")]
    ElementNotFound,

    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    #[error("Partial function is not defined at the given value")]
    NotDefinedAt,
}

pub type Result<T> = std::result::Result<T, OptionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(OptionError::ElementNotFound.to_string(), "No value present");
        assert_eq!(
            OptionError::IllegalArgument("optional is absent".to_string()).to_string(),
            "Illegal argument: optional is absent"
        );
        assert_eq!(
            OptionError::NotDefinedAt.to_string(),
            "Partial function is not defined at the given value"
        );
    }
}
