// Offers - GraphQL mutation documents for the create-offer flow
//
// This library composes mutation documents from typed templates over a shared,
// read-only fragment registry.

// Re-export the document builder
pub use offers_graphql::*;

// Re-export the offers documents
#[cfg(feature = "queries")]
pub use offers_queries;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ComposeError,
        ComposerConfig,
        DocumentComposer,
        Field,
        FragmentDefinition,
        FragmentRegistry,
        GraphQLRequest,
        GraphQLResponse,
        MutationDocument,
        MutationTemplate,
        Result,
        VariableDefinition,
    };

    #[cfg(feature = "queries")]
    pub use offers_queries::{
        CreateIntent, CreateOfferMutations, CreateProposal, CreateProposedIntent,
        CreateProposedTo, OffersMutation, offers_registry,
    };
}
