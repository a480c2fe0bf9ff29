//! Integration tests for common create-offer workflows.
//!
//! These tests drive the facade the way the create-offer view does: compose
//! once, then build payloads for each form step.

use std::sync::Arc;

use offers::offers_queries::{
    CreateIntentVariables, CreateProposalVariables, CreateProposedIntentVariables,
    CreateProposedToVariables, IntentCreateParams, ProposalCreateParams,
};
use offers::prelude::*;
use serde_json::json;

// =============================================================================
// Offer Submission
// =============================================================================

#[test]
fn test_offer_submission_payloads() {
    let mutations = CreateOfferMutations::with_offers_registry().unwrap();

    // Proposal first
    let proposal = mutations
        .request::<CreateProposal>(CreateProposalVariables {
            proposal: ProposalCreateParams::named("Spare apples").note("collect Friday"),
        })
        .unwrap();
    assert_eq!(proposal.operation_name.as_deref(), Some("CreateProposal"));
    assert!(proposal.query.contains("...OffersProposal"));
    assert_eq!(
        proposal.variables,
        Some(json!({ "proposal": { "name": "Spare apples", "note": "collect Friday" } }))
    );

    // Then the intent it publishes
    let intent = mutations
        .request::<CreateIntent>(CreateIntentVariables {
            intent: IntentCreateParams::new("transfer").quantity(5.0, Some("kg".into())),
        })
        .unwrap();
    assert!(intent.query.contains("fragment OffersIntent on Intent"));

    // Link them
    let link = mutations
        .request::<CreateProposedIntent>(CreateProposedIntentVariables {
            proposal: "p1".into(),
            intent: "i1".into(),
            reciprocal: None,
        })
        .unwrap();
    assert_eq!(link.variables, Some(json!({ "proposal": "p1", "intent": "i1" })));

    // And offer it to an agent
    let offer = mutations
        .request::<CreateProposedTo>(CreateProposedToVariables {
            proposal: "p1".into(),
            agent: "agent-7".into(),
        })
        .unwrap();
    let body: serde_json::Value = serde_json::from_str(&offer.to_json().unwrap()).unwrap();
    assert_eq!(body["operationName"], "CreateProposedTo");
    assert_eq!(body["variables"]["agent"], "agent-7");
}

// =============================================================================
// Directed Intents
// =============================================================================

#[test]
fn test_directed_intent_uses_shared_document() {
    let mutations = CreateOfferMutations::with_offers_registry().unwrap();
    let directed = mutations.directed_intent();

    assert_eq!(directed.create_intent().text(), mutations.create_intent().text());

    let request = directed
        .request(
            IntentCreateParams::new("transfer")
                .provider("agent-a")
                .receiver("agent-b"),
        )
        .unwrap();
    assert_eq!(request.variables.unwrap()["intent"]["receiver"], "agent-b");
}

// =============================================================================
// Registry Injection
// =============================================================================

#[test]
fn test_injected_registry_controls_fragment_shape() {
    let registry = FragmentRegistry::builder()
        .register(FragmentDefinition::new("OffersProposal", "Proposal").fields(["id"]))
        .unwrap()
        .register(FragmentDefinition::new("OffersIntent", "Intent").fields(["id", "note"]))
        .unwrap()
        .build();

    let composer = DocumentComposer::new(Arc::new(registry));
    let mutations = CreateOfferMutations::compose(&composer).unwrap();

    assert!(
        mutations
            .create_proposal()
            .text()
            .ends_with("fragment OffersProposal on Proposal {\n  id\n}\n")
    );
}

#[test]
fn test_empty_registry_fails_before_any_document_exists() {
    let composer = DocumentComposer::new(Arc::new(FragmentRegistry::default()));

    let err = CreateOfferMutations::compose(&composer).unwrap_err();
    assert!(err.is_configuration_error());
    assert_eq!(err.unresolved_fragment(), Some("OffersProposal"));
}
