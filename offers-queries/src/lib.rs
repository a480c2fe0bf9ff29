//! # Offers Queries
//!
//! Mutation documents behind the create-offer view: creating a proposal,
//! creating intents (plain or directed at an agent), publishing an intent in a
//! proposal and offering a proposal to an agent.
//!
//! The shared `OffersProposal` and `OffersIntent` fragments live in
//! [`fragments`]; every document is composed against an injected registry and
//! fails up front if a fragment it spreads is missing.
//!
//! ```rust
//! use offers_queries::{CreateOfferMutations, CreateProposedTo, CreateProposedToVariables};
//!
//! let mutations = CreateOfferMutations::with_offers_registry()?;
//! let request = mutations.request::<CreateProposedTo>(CreateProposedToVariables {
//!     proposal: "proposal-1".into(),
//!     agent: "agent-7".into(),
//! })?;
//! assert_eq!(request.operation_name.as_deref(), Some("CreateProposedTo"));
//! # Ok::<(), offers_graphql::ComposeError>(())
//! ```

pub mod fragments;
mod mutations;
pub mod templates;
mod types;
mod variables;

pub use fragments::{OFFERS_INTENT, OFFERS_PROPOSAL, offers_registry};
pub use mutations::{
    CreateIntent, CreateOfferMutations, CreateProposal, CreateProposedIntent, CreateProposedTo,
    DirectedIntentMutations, OffersMutation,
};
pub use types::*;
pub use variables::*;
