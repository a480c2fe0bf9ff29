//! Read-only fragment registry.
//!
//! A registry is built once through [`FragmentRegistryBuilder`] and never
//! changes afterwards; composers share it through an `Arc`.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::document::FragmentDefinition;
use crate::{ComposeError, Result};

/// Mapping from fragment name to its definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FragmentRegistry {
    fragments: BTreeMap<String, FragmentDefinition>,
}

impl FragmentRegistry {
    /// Start building a registry.
    pub fn builder() -> FragmentRegistryBuilder {
        FragmentRegistryBuilder::default()
    }

    /// Look up a fragment by name.
    pub fn get(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments.get(name)
    }

    /// Check if a fragment is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fragments.keys().map(String::as_str)
    }

    /// Number of registered fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Resolve the fragments needed by `operation`, which spreads `spreads`.
    ///
    /// Returns every definition reachable from `spreads`, each once, in order
    /// of first use.
    pub fn resolve<'a>(
        &'a self,
        operation: &str,
        spreads: &[&str],
    ) -> Result<Vec<&'a FragmentDefinition>> {
        let mut resolved = Vec::new();
        let mut path = Vec::new();
        for name in spreads {
            self.visit(name, operation, &mut path, &mut resolved)?;
        }
        Ok(resolved)
    }

    fn visit<'a>(
        &'a self,
        name: &str,
        referrer: &str,
        path: &mut Vec<String>,
        resolved: &mut Vec<&'a FragmentDefinition>,
    ) -> Result<()> {
        if path.iter().any(|p| p == name) {
            return Err(ComposeError::FragmentCycle(name.to_string()));
        }
        if resolved.iter().any(|def| def.name == name) {
            return Ok(());
        }

        let def = self
            .get(name)
            .ok_or_else(|| ComposeError::UnresolvedFragment {
                fragment: name.to_string(),
                operation: referrer.to_string(),
            })?;
        trace!(fragment = %name, referrer = %referrer, "Resolved fragment");
        resolved.push(def);

        path.push(def.name.clone());
        for dep in def.fragment_spreads() {
            self.visit(dep, &def.name, path, resolved)?;
        }
        path.pop();
        Ok(())
    }
}

/// Builder for [`FragmentRegistry`].
#[derive(Debug, Default)]
pub struct FragmentRegistryBuilder {
    fragments: BTreeMap<String, FragmentDefinition>,
}

impl FragmentRegistryBuilder {
    /// Register a fragment. Names must be unique.
    pub fn register(mut self, fragment: FragmentDefinition) -> Result<Self> {
        if self.fragments.contains_key(&fragment.name) {
            return Err(ComposeError::DuplicateFragment(fragment.name));
        }
        self.fragments.insert(fragment.name.clone(), fragment);
        Ok(self)
    }

    /// Build the registry.
    pub fn build(self) -> FragmentRegistry {
        debug!(fragments = self.fragments.len(), "Built fragment registry");
        FragmentRegistry {
            fragments: self.fragments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    fn registry(defs: Vec<FragmentDefinition>) -> FragmentRegistry {
        defs.into_iter()
            .try_fold(FragmentRegistry::builder(), |b, def| b.register(def))
            .unwrap()
            .build()
    }

    #[test]
    fn test_lookup() {
        let reg = registry(vec![
            FragmentDefinition::new("B", "Thing").field("id"),
            FragmentDefinition::new("A", "Thing").field("id"),
        ]);

        assert_eq!(reg.len(), 2);
        assert!(reg.contains("A"));
        assert!(!reg.contains("C"));
        assert_eq!(reg.get("B").unwrap().type_condition, "Thing");
        assert_eq!(reg.names().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let err = FragmentRegistry::builder()
            .register(FragmentDefinition::new("A", "Thing").field("id"))
            .unwrap()
            .register(FragmentDefinition::new("A", "Other").field("id"))
            .unwrap_err();

        assert!(matches!(err, ComposeError::DuplicateFragment(name) if name == "A"));
    }

    #[test]
    fn test_resolve_is_transitive_and_deduplicated() {
        let reg = registry(vec![
            FragmentDefinition::new("Amount", "Measure").fields(["hasNumericalValue"]),
            FragmentDefinition::new("Intent", "Intent")
                .field("id")
                .select(Field::new("resourceQuantity").spread("Amount"))
                .select(Field::new("effortQuantity").spread("Amount")),
            FragmentDefinition::new("Proposal", "Proposal")
                .field("id")
                .select(Field::new("publishes").spread("Intent")),
        ]);

        let names: Vec<_> = reg
            .resolve("Op", &["Proposal", "Intent"])
            .unwrap()
            .into_iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["Proposal", "Intent", "Amount"]);
    }

    #[test]
    fn test_resolve_missing_fragment() {
        let reg = registry(vec![FragmentDefinition::new("A", "Thing").spread("Gone")]);

        let err = reg.resolve("Op", &["A"]).unwrap_err();
        match err {
            ComposeError::UnresolvedFragment { fragment, operation } => {
                assert_eq!(fragment, "Gone");
                assert_eq!(operation, "A");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = reg.resolve("Op", &["Missing"]).unwrap_err();
        assert_eq!(err.unresolved_fragment(), Some("Missing"));
    }

    #[test]
    fn test_resolve_detects_cycles() {
        let reg = registry(vec![
            FragmentDefinition::new("A", "Thing").spread("B"),
            FragmentDefinition::new("B", "Thing").spread("A"),
        ]);

        let err = reg.resolve("Op", &["A"]).unwrap_err();
        assert!(matches!(err, ComposeError::FragmentCycle(name) if name == "A"));
    }
}
