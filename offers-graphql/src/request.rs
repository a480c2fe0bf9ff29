//! Transport-facing request payloads.

use serde::Serialize;
use serde_json::Value;

use crate::{ComposeError, Result};

/// GraphQL request payload handed to an HTTP transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    /// The document text.
    pub query: String,
    /// Operation name (absent for anonymous operations).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    /// Variables for the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

impl GraphQLRequest {
    /// Create a new request.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: None,
        }
    }

    /// Set the operation name.
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Set variables.
    ///
    /// `variables` must serialize to a JSON object; `null` clears them.
    pub fn variables<T: Serialize>(mut self, variables: T) -> Result<Self> {
        self.variables = match serde_json::to_value(variables)? {
            Value::Null => None,
            value @ Value::Object(_) => Some(value),
            other => return Err(ComposeError::InvalidVariables(json_kind(&other))),
        };
        Ok(self)
    }

    /// Set a single variable.
    pub fn variable(mut self, name: impl Into<String>, value: impl Serialize) -> Result<Self> {
        let value = serde_json::to_value(value)?;
        match self
            .variables
            .get_or_insert_with(|| Value::Object(Default::default()))
        {
            Value::Object(map) => {
                map.insert(name.into(), value);
            }
            other => return Err(ComposeError::InvalidVariables(json_kind(other))),
        }
        Ok(self)
    }

    /// Serialize the payload to a JSON body.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = GraphQLRequest::new("mutation X { x }")
            .operation_name("X")
            .variable("agent", "agent-1")
            .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "mutation X { x }",
                "operationName": "X",
                "variables": { "agent": "agent-1" }
            })
        );
    }

    #[test]
    fn test_anonymous_request_omits_empty_fields() {
        let body = GraphQLRequest::new("mutation { x }").to_json().unwrap();
        assert_eq!(body, r#"{"query":"mutation { x }"}"#);
    }

    #[test]
    fn test_non_object_variables_are_rejected() {
        let err = GraphQLRequest::new("mutation { x }")
            .variables(vec![1])
            .unwrap_err();
        assert!(matches!(err, ComposeError::InvalidVariables("an array")));
        assert_eq!(
            err.to_string(),
            "request variables must be a JSON object, got an array"
        );

        let err = GraphQLRequest::new("mutation { x }")
            .variables("agent")
            .unwrap_err();
        assert!(matches!(err, ComposeError::InvalidVariables("a string")));
    }

    #[test]
    fn test_single_variable_needs_object_variables() {
        let mut request = GraphQLRequest::new("mutation { x }");
        request.variables = Some(json!([1]));

        let err = request.variable("agent", "a1").unwrap_err();
        assert!(matches!(err, ComposeError::InvalidVariables("an array")));
    }

    #[test]
    fn test_null_variables_are_omitted() {
        let request = GraphQLRequest::new("mutation { x }")
            .variables(json!({ "agent": "a1" }))
            .unwrap()
            .variables(())
            .unwrap();
        assert!(request.variables.is_none());

        let request = request.variable("agent", "a2").unwrap();
        assert_eq!(request.variables, Some(json!({ "agent": "a2" })));
    }
}
