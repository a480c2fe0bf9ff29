//! Shared fragments of the offers view.

use offers_graphql::{Field, FragmentDefinition, FragmentRegistry, Result};

/// Name of the proposal fragment.
pub const OFFERS_PROPOSAL: &str = "OffersProposal";

/// Name of the intent fragment.
pub const OFFERS_INTENT: &str = "OffersIntent";

/// Proposal fields shown by the offers view.
pub fn offers_proposal() -> FragmentDefinition {
    FragmentDefinition::new(OFFERS_PROPOSAL, "Proposal").fields([
        "id",
        "name",
        "hasBeginning",
        "hasEnd",
        "unitBased",
        "created",
        "note",
    ])
}

/// Intent fields shown by the offers view.
pub fn offers_intent() -> FragmentDefinition {
    FragmentDefinition::new(OFFERS_INTENT, "Intent")
        .fields(["id", "name"])
        .select(Field::new("action").fields(["id", "label"]))
        .select(Field::new("provider").fields(["id", "name"]))
        .select(Field::new("receiver").fields(["id", "name"]))
        .field("resourceClassifiedAs")
        .select(
            Field::new("resourceQuantity")
                .field("hasNumericalValue")
                .select(Field::new("hasUnit").fields(["id", "label"])),
        )
        .fields(["hasBeginning", "hasEnd", "due", "note", "finished"])
}

/// Registry holding both offers fragments.
pub fn offers_registry() -> Result<FragmentRegistry> {
    Ok(FragmentRegistry::builder()
        .register(offers_proposal())?
        .register(offers_intent())?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offers_registry() {
        let registry = offers_registry().unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(OFFERS_PROPOSAL).unwrap().type_condition, "Proposal");
        assert_eq!(registry.get(OFFERS_INTENT).unwrap().type_condition, "Intent");
    }

    #[test]
    fn test_fragments_are_self_contained() {
        assert!(offers_proposal().fragment_spreads().is_empty());
        assert!(offers_intent().fragment_spreads().is_empty());
    }
}
