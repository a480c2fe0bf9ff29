//! Document composition error types.

use thiserror::Error;

/// Result type for document composition.
pub type Result<T> = std::result::Result<T, ComposeError>;

/// Document composition errors.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// A spread names a fragment the registry does not hold.
    #[error("unresolved fragment `{fragment}` referenced by `{operation}`")]
    UnresolvedFragment {
        /// Name of the missing fragment.
        fragment: String,
        /// Operation (or fragment) that spreads it.
        operation: String,
    },

    /// Two fragments were registered under the same name.
    #[error("fragment `{0}` is already registered")]
    DuplicateFragment(String),

    /// A fragment spreads itself, directly or through other fragments.
    #[error("fragment `{0}` spreads itself")]
    FragmentCycle(String),

    /// An argument references a variable the operation does not declare.
    #[error("variable `${variable}` is not declared by `{operation}`")]
    UndefinedVariable {
        /// Name of the referenced variable.
        variable: String,
        /// Operation that references it.
        operation: String,
    },

    /// The operation declares a variable nothing references.
    #[error("variable `${variable}` is declared by `{operation}` but never used")]
    UnusedVariable {
        /// Name of the declared variable.
        variable: String,
        /// Operation that declares it.
        operation: String,
    },

    /// Request variables did not serialize to a JSON object.
    #[error("request variables must be a JSON object, got {0}")]
    InvalidVariables(&'static str),

    /// Rendered document text was rejected by the parser.
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// GraphQL errors carried by a response.
    #[error("GraphQL errors: {0:?}")]
    GraphQL(Vec<crate::GraphQLResponseError>),

    /// Response carried neither data nor errors.
    #[error("Response contained no data")]
    NoData,
}

impl ComposeError {
    /// Check if this error comes from registry or template configuration
    /// rather than from runtime data.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnresolvedFragment { .. }
                | Self::DuplicateFragment(_)
                | Self::FragmentCycle(_)
                | Self::UndefinedVariable { .. }
                | Self::UnusedVariable { .. }
        )
    }

    /// Get the missing fragment name if this is an unresolved fragment error.
    pub fn unresolved_fragment(&self) -> Option<&str> {
        match self {
            Self::UnresolvedFragment { fragment, .. } => Some(fragment),
            _ => None,
        }
    }

    /// Get GraphQL errors if this is a GraphQL error.
    pub fn graphql_errors(&self) -> Option<&[crate::GraphQLResponseError]> {
        match self {
            Self::GraphQL(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_fragment_message() {
        let err = ComposeError::UnresolvedFragment {
            fragment: "OffersIntent".to_string(),
            operation: "CreateIntent".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "unresolved fragment `OffersIntent` referenced by `CreateIntent`"
        );
        assert_eq!(err.unresolved_fragment(), Some("OffersIntent"));
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_runtime_errors_are_not_configuration_errors() {
        assert!(!ComposeError::NoData.is_configuration_error());
        assert!(!ComposeError::Parse("eof".into()).is_configuration_error());
        assert!(ComposeError::FragmentCycle("A".into()).is_configuration_error());
        assert!(ComposeError::NoData.unresolved_fragment().is_none());
        assert!(!ComposeError::InvalidVariables("an array").is_configuration_error());
    }

    #[test]
    fn test_undefined_variable_message() {
        let err = ComposeError::UndefinedVariable {
            variable: "propsal".to_string(),
            operation: "CreateProposedTo".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "variable `$propsal` is not declared by `CreateProposedTo`"
        );
        assert!(err.is_configuration_error());
    }
}
