//! Mutation templates of the create-offer flow.

use offers_graphql::{Field, MutationTemplate, VariableDefinition};

use crate::fragments::{OFFERS_INTENT, OFFERS_PROPOSAL};

/// `createProposal(proposal: $proposal) { proposal { ...OffersProposal } }`
pub fn create_proposal() -> MutationTemplate {
    MutationTemplate::builder("CreateProposal")
        .variable(VariableDefinition::required("proposal", "ProposalCreateParams"))
        .select(
            Field::new("createProposal")
                .arg_variable("proposal", "proposal")
                .select(Field::new("proposal").spread(OFFERS_PROPOSAL)),
        )
        .build()
}

/// `createIntent(intent: $intent) { intent { ...OffersIntent } }`
///
/// Used both for plain offers and for intents directed at an agent.
pub fn create_intent() -> MutationTemplate {
    MutationTemplate::builder("CreateIntent")
        .variable(VariableDefinition::required("intent", "IntentCreateParams"))
        .select(
            Field::new("createIntent")
                .arg_variable("intent", "intent")
                .select(Field::new("intent").spread(OFFERS_INTENT)),
        )
        .build()
}

/// Links an existing proposal to an existing intent.
pub fn create_proposed_intent() -> MutationTemplate {
    MutationTemplate::builder("CreateProposedIntent")
        .variable(VariableDefinition::required("proposal", "ID"))
        .variable(VariableDefinition::required("intent", "ID"))
        .variable(VariableDefinition::optional("reciprocal", "Boolean"))
        .select(
            Field::new("proposeIntent")
                .arg_variable("publishedIn", "proposal")
                .arg_variable("publishes", "intent")
                .arg_variable("reciprocal", "reciprocal")
                .select(Field::new("proposedIntent").fields([
                    "id",
                    "publishedIn",
                    "publishes",
                    "reciprocal",
                ])),
        )
        .build()
}

/// Links a proposal to the agent it is offered to.
pub fn create_proposed_to() -> MutationTemplate {
    MutationTemplate::builder("CreateProposedTo")
        .variable(VariableDefinition::required("proposal", "ID"))
        .variable(VariableDefinition::required("agent", "ID"))
        .select(
            Field::new("proposeTo")
                .arg_variable("proposed", "proposal")
                .arg_variable("proposedTo", "agent")
                .select(Field::new("proposedTo").fields(["id", "proposed", "proposedTo"])),
        )
        .build()
}
