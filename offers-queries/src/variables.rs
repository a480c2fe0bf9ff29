//! Variables of the create-offer mutations.

use serde::Serialize;

/// Input for `createProposal`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalCreateParams {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISO 8601 timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_beginning: Option<String>,
    /// ISO 8601 timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_end: Option<String>,
    /// Whether quantities are priced per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_based: Option<bool>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Agents or groups the proposal is scoped to.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub in_scope_of: Vec<String>,
    /// Location where the offer applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_location: Option<String>,
}

impl ProposalCreateParams {
    /// Create params for a named proposal.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Mark the proposal as unit based.
    pub fn unit_based(mut self, unit_based: bool) -> Self {
        self.unit_based = Some(unit_based);
        self
    }
}

/// A quantity with its unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityValue {
    /// Numeric amount.
    pub has_numerical_value: f64,
    /// Unit identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_unit: Option<String>,
}

/// Input for `createIntent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentCreateParams {
    /// Action identifier (`transfer`, `work`, ...).
    pub action: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Agent providing the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Agent receiving the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    /// Resource classification URIs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource_classified_as: Vec<String>,
    /// Quantity of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_quantity: Option<QuantityValue>,
    /// ISO 8601 timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_beginning: Option<String>,
    /// ISO 8601 timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_end: Option<String>,
    /// ISO 8601 due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl IntentCreateParams {
    /// Create params for an action.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Default::default()
        }
    }

    /// Set the providing agent.
    pub fn provider(mut self, agent: impl Into<String>) -> Self {
        self.provider = Some(agent.into());
        self
    }

    /// Set the receiving agent, directing the intent at them.
    pub fn receiver(mut self, agent: impl Into<String>) -> Self {
        self.receiver = Some(agent.into());
        self
    }

    /// Set the resource quantity.
    pub fn quantity(mut self, value: f64, unit: Option<String>) -> Self {
        self.resource_quantity = Some(QuantityValue {
            has_numerical_value: value,
            has_unit: unit,
        });
        self
    }

    /// Add a resource classification.
    pub fn classified_as(mut self, uri: impl Into<String>) -> Self {
        self.resource_classified_as.push(uri.into());
        self
    }

    /// Set the note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Variables of `createProposal`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProposalVariables {
    /// Proposal to create.
    pub proposal: ProposalCreateParams,
}

/// Variables of `createIntent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateIntentVariables {
    /// Intent to create.
    pub intent: IntentCreateParams,
}

/// Variables of `createProposedIntent`.
///
/// `reciprocal` is only sent when set; the server decides what omission means.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProposedIntentVariables {
    /// Proposal publishing the intent.
    pub proposal: String,
    /// Intent to publish.
    pub intent: String,
    /// Marks the intent as the reciprocal side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reciprocal: Option<bool>,
}

/// Variables of `createProposedTo`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProposedToVariables {
    /// Proposal to offer.
    pub proposal: String,
    /// Agent it is offered to.
    pub agent: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_intent_params_serialize_camel_case() {
        let params = IntentCreateParams::new("transfer")
            .provider("agent-a")
            .receiver("agent-b")
            .quantity(2.5, Some("kg".into()))
            .classified_as("https://example.org/apples");

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "action": "transfer",
                "provider": "agent-a",
                "receiver": "agent-b",
                "resourceClassifiedAs": ["https://example.org/apples"],
                "resourceQuantity": { "hasNumericalValue": 2.5, "hasUnit": "kg" }
            })
        );
    }

    #[test]
    fn test_proposal_params_skip_unset_fields() {
        let params = ProposalCreateParams::named("Apples").unit_based(true);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "name": "Apples", "unitBased": true })
        );
    }

    #[test]
    fn test_reciprocal_omitted_when_unset() {
        let vars = CreateProposedIntentVariables {
            proposal: "p1".into(),
            intent: "i1".into(),
            reciprocal: None,
        };
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({ "proposal": "p1", "intent": "i1" })
        );

        let vars = CreateProposedIntentVariables {
            reciprocal: Some(false),
            ..vars
        };
        assert_eq!(serde_json::to_value(&vars).unwrap()["reciprocal"], json!(false));
    }
}
