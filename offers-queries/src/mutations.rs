//! Composed create-offer mutations.

use std::sync::Arc;

use offers_graphql::{
    DocumentComposer, GraphQLRequest, GraphQLResponse, JsonValue, MutationDocument,
    MutationTemplate, Result,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::fragments::offers_registry;
use crate::templates;
use crate::types::{
    CreateIntentData, CreateProposalData, CreateProposedIntentData, CreateProposedToData,
};
use crate::variables::{
    CreateIntentVariables, CreateProposalVariables, CreateProposedIntentVariables,
    CreateProposedToVariables, IntentCreateParams,
};

/// A create-offer mutation with typed variables and response data.
pub trait OffersMutation {
    /// Variables the document declares.
    type Variables: Serialize;
    /// Shape of the response `data`.
    type ResponseData: DeserializeOwned;

    /// Name the document is exported under.
    const EXPORT_NAME: &'static str;

    /// Template the document is composed from.
    fn template() -> MutationTemplate;

    /// The composed document within a mutation set.
    fn document(mutations: &CreateOfferMutations) -> &MutationDocument;

    /// Decode a raw response body returned by the transport.
    fn decode(response: JsonValue) -> Result<Self::ResponseData> {
        GraphQLResponse::<Self::ResponseData>::from_value(response)?.into_result()
    }
}

/// Creates a proposal.
#[derive(Debug, Clone, Copy)]
pub struct CreateProposal;

/// Creates an intent.
#[derive(Debug, Clone, Copy)]
pub struct CreateIntent;

/// Publishes an intent in a proposal.
#[derive(Debug, Clone, Copy)]
pub struct CreateProposedIntent;

/// Offers a proposal to an agent.
#[derive(Debug, Clone, Copy)]
pub struct CreateProposedTo;

impl OffersMutation for CreateProposal {
    type Variables = CreateProposalVariables;
    type ResponseData = CreateProposalData;
    const EXPORT_NAME: &'static str = "createProposal";

    fn template() -> MutationTemplate {
        templates::create_proposal()
    }

    fn document(mutations: &CreateOfferMutations) -> &MutationDocument {
        &mutations.create_proposal
    }
}

impl OffersMutation for CreateIntent {
    type Variables = CreateIntentVariables;
    type ResponseData = CreateIntentData;
    const EXPORT_NAME: &'static str = "createIntent";

    fn template() -> MutationTemplate {
        templates::create_intent()
    }

    fn document(mutations: &CreateOfferMutations) -> &MutationDocument {
        &mutations.create_intent
    }
}

impl OffersMutation for CreateProposedIntent {
    type Variables = CreateProposedIntentVariables;
    type ResponseData = CreateProposedIntentData;
    const EXPORT_NAME: &'static str = "createProposedIntent";

    fn template() -> MutationTemplate {
        templates::create_proposed_intent()
    }

    fn document(mutations: &CreateOfferMutations) -> &MutationDocument {
        &mutations.create_proposed_intent
    }
}

impl OffersMutation for CreateProposedTo {
    type Variables = CreateProposedToVariables;
    type ResponseData = CreateProposedToData;
    const EXPORT_NAME: &'static str = "createProposedTo";

    fn template() -> MutationTemplate {
        templates::create_proposed_to()
    }

    fn document(mutations: &CreateOfferMutations) -> &MutationDocument {
        &mutations.create_proposed_to
    }
}

/// The four documents of the create-offer view, composed once up front.
#[derive(Debug, Clone)]
pub struct CreateOfferMutations {
    create_proposal: MutationDocument,
    create_intent: MutationDocument,
    create_proposed_intent: MutationDocument,
    create_proposed_to: MutationDocument,
}

impl CreateOfferMutations {
    /// Compose every document with `composer`.
    ///
    /// Fails on the first template whose fragments the composer's registry
    /// cannot resolve.
    pub fn compose(composer: &DocumentComposer) -> Result<Self> {
        let mutations = Self {
            create_proposal: composer.compose(&CreateProposal::template())?,
            create_intent: composer.compose(&CreateIntent::template())?,
            create_proposed_intent: composer.compose(&CreateProposedIntent::template())?,
            create_proposed_to: composer.compose(&CreateProposedTo::template())?,
        };
        debug!("Composed create-offer mutations");
        Ok(mutations)
    }

    /// Compose every document against the offers registry with default settings.
    pub fn with_offers_registry() -> Result<Self> {
        let composer = DocumentComposer::new(Arc::new(offers_registry()?));
        Self::compose(&composer)
    }

    /// The `createProposal` document.
    pub fn create_proposal(&self) -> &MutationDocument {
        &self.create_proposal
    }

    /// The `createIntent` document.
    pub fn create_intent(&self) -> &MutationDocument {
        &self.create_intent
    }

    /// The `createProposedIntent` document.
    pub fn create_proposed_intent(&self) -> &MutationDocument {
        &self.create_proposed_intent
    }

    /// The `createProposedTo` document.
    pub fn create_proposed_to(&self) -> &MutationDocument {
        &self.create_proposed_to
    }

    /// Documents keyed by export name.
    pub fn documents(&self) -> [(&'static str, &MutationDocument); 4] {
        [
            (CreateProposal::EXPORT_NAME, &self.create_proposal),
            (CreateIntent::EXPORT_NAME, &self.create_intent),
            (CreateProposedIntent::EXPORT_NAME, &self.create_proposed_intent),
            (CreateProposedTo::EXPORT_NAME, &self.create_proposed_to),
        ]
    }

    /// Entry point of the create-directed-intent view.
    pub fn directed_intent(&self) -> DirectedIntentMutations<'_> {
        DirectedIntentMutations {
            create_intent: &self.create_intent,
        }
    }

    /// Build the transport payload of mutation `M`.
    pub fn request<M: OffersMutation>(&self, variables: M::Variables) -> Result<GraphQLRequest> {
        M::document(self).request(variables)
    }
}

/// Documents used by the create-directed-intent view.
#[derive(Debug, Clone, Copy)]
pub struct DirectedIntentMutations<'a> {
    create_intent: &'a MutationDocument,
}

impl<'a> DirectedIntentMutations<'a> {
    /// The shared intent-creation document.
    pub fn create_intent(&self) -> &'a MutationDocument {
        self.create_intent
    }

    /// Build the payload creating `intent`.
    pub fn request(&self, intent: IntentCreateParams) -> Result<GraphQLRequest> {
        self.create_intent.request(CreateIntentVariables { intent })
    }
}
