//! GraphQL response decoding.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ComposeError, Result};

/// GraphQL response as returned by a transport.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphQLResponse<T = Value> {
    /// The data returned by the mutation.
    pub data: Option<T>,
    /// Errors returned by the server.
    #[serde(default)]
    pub errors: Option<Vec<GraphQLResponseError>>,
    /// Extensions (for tracing, caching info, etc.).
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl<T: DeserializeOwned> GraphQLResponse<T> {
    /// Decode a raw JSON response body.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl<T> GraphQLResponse<T> {
    /// Check if the response has errors.
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Get the data, returning an error if there are GraphQL errors.
    pub fn into_result(self) -> Result<T> {
        if let Some(errors) = self.errors
            && !errors.is_empty()
        {
            return Err(ComposeError::GraphQL(errors));
        }
        self.data.ok_or(ComposeError::NoData)
    }

    /// Get the errors.
    pub fn errors(&self) -> Option<&[GraphQLResponseError]> {
        self.errors.as_deref()
    }
}

/// A GraphQL error from the server.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GraphQLResponseError {
    /// Error message.
    pub message: String,
    /// Locations in the document where the error occurred.
    #[serde(default)]
    pub locations: Option<Vec<ErrorLocation>>,
    /// Path to the field that caused the error.
    #[serde(default)]
    pub path: Option<Vec<PathSegment>>,
    /// Additional error extensions.
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl std::fmt::Display for GraphQLResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(path) = &self.path
            && !path.is_empty()
        {
            write!(f, " (at {})", format_path(path))?;
        }
        Ok(())
    }
}

/// Location in the document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ErrorLocation {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

/// Path segment in a GraphQL error.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Field name.
    Field(String),
    /// Array index.
    Index(usize),
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(name) => write!(f, "{}", name),
            Self::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

/// Format a path as a string.
pub fn format_path(path: &[PathSegment]) -> String {
    path.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(".")
}
