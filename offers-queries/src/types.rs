//! Response data of the create-offer mutations.

use serde::Deserialize;

/// Fields selected by `OffersProposal`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    /// Server-assigned identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Start of the offer window.
    #[serde(default)]
    pub has_beginning: Option<String>,
    /// End of the offer window.
    #[serde(default)]
    pub has_end: Option<String>,
    /// Whether quantities are priced per unit.
    #[serde(default)]
    pub unit_based: Option<bool>,
    /// Creation timestamp.
    #[serde(default)]
    pub created: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub note: Option<String>,
}

/// `{ id label }` pair used for actions and units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Labelled {
    /// Identifier.
    pub id: String,
    /// Human-readable label.
    #[serde(default)]
    pub label: Option<String>,
}

/// `{ id name }` pair used for agents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AgentRef {
    /// Agent identifier.
    pub id: String,
    /// Agent display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Quantity as returned by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    /// Numeric amount.
    pub has_numerical_value: f64,
    /// Unit of the amount.
    #[serde(default)]
    pub has_unit: Option<Labelled>,
}

/// Fields selected by `OffersIntent`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Server-assigned identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Action the intent describes.
    #[serde(default)]
    pub action: Option<Labelled>,
    /// Agent providing the resource.
    #[serde(default)]
    pub provider: Option<AgentRef>,
    /// Agent receiving the resource.
    #[serde(default)]
    pub receiver: Option<AgentRef>,
    /// Resource classification URIs.
    #[serde(default)]
    pub resource_classified_as: Option<Vec<String>>,
    /// Quantity of the resource.
    #[serde(default)]
    pub resource_quantity: Option<Measure>,
    /// Start of the intent window.
    #[serde(default)]
    pub has_beginning: Option<String>,
    /// End of the intent window.
    #[serde(default)]
    pub has_end: Option<String>,
    /// Due date.
    #[serde(default)]
    pub due: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub note: Option<String>,
    /// Whether the intent has been fulfilled.
    #[serde(default)]
    pub finished: Option<bool>,
}

/// Link between a proposal and one of its intents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedIntent {
    /// Link identifier.
    pub id: String,
    /// Proposal the intent is published in.
    pub published_in: String,
    /// Intent the proposal publishes.
    pub publishes: String,
    /// Whether the intent is the reciprocal side of the offer.
    #[serde(default)]
    pub reciprocal: Option<bool>,
}

/// Link between a proposal and the agent it is offered to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedTo {
    /// Link identifier.
    pub id: String,
    /// Proposal being offered.
    pub proposed: String,
    /// Agent the proposal is offered to.
    pub proposed_to: String,
}

/// Payload of `createProposal`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProposalPayload {
    /// The created proposal.
    pub proposal: Proposal,
}

/// Payload of `createIntent`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntentPayload {
    /// The created intent.
    pub intent: Intent,
}

/// Payload of `proposeIntent`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedIntentPayload {
    /// The created proposal-intent link.
    pub proposed_intent: ProposedIntent,
}

/// Payload of `proposeTo`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedToPayload {
    /// The created proposal-agent link.
    pub proposed_to: ProposedTo,
}

/// `data` of `createProposal`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProposalData {
    /// Result of `createProposal`.
    pub create_proposal: ProposalPayload,
}

/// `data` of `createIntent`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentData {
    /// Result of `createIntent`.
    pub create_intent: IntentPayload,
}

/// `data` of `createProposedIntent`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProposedIntentData {
    /// Result of `proposeIntent`.
    pub propose_intent: ProposedIntentPayload,
}

/// `data` of `createProposedTo`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProposedToData {
    /// Result of `proposeTo`.
    pub propose_to: ProposedToPayload,
}
