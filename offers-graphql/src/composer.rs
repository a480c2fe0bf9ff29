//! Document composition.

use std::sync::Arc;

use graphql_parser::query::Document;
use serde::Serialize;
use tracing::{debug, error};

use crate::document::{FragmentDefinition, MutationTemplate, VariableDefinition};
use crate::render::Printer;
use crate::{ComposeError, ComposerConfig, FragmentRegistry, GraphQLRequest, Result};

/// A composed, immutable mutation document.
///
/// Holds the rendered text together with the variable slots and fragment
/// names it was composed from. Clones share the same text.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationDocument {
    operation_name: Arc<str>,
    named: bool,
    variables: Arc<[VariableDefinition]>,
    fragments: Arc<[String]>,
    text: Arc<str>,
}

impl MutationDocument {
    /// Get the operation name.
    pub fn name(&self) -> &str {
        &self.operation_name
    }

    /// Get the rendered document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the declared variables.
    pub fn variables(&self) -> &[VariableDefinition] {
        &self.variables
    }

    /// Look up a declared variable.
    pub fn variable(&self, name: &str) -> Option<&VariableDefinition> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Names of the fragment definitions carried in the text.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Parse the document text.
    pub fn parse(&self) -> Result<Document<'_, String>> {
        graphql_parser::parse_query::<String>(&self.text)
            .map_err(|e| ComposeError::Parse(e.to_string()))
    }

    /// Build a transport payload carrying `variables`.
    pub fn request<T: Serialize>(&self, variables: T) -> Result<GraphQLRequest> {
        let mut request = GraphQLRequest::new(self.text.as_ref()).variables(variables)?;
        if self.named {
            request = request.operation_name(self.operation_name.as_ref());
        }
        Ok(request)
    }
}

impl std::fmt::Display for MutationDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Composes mutation templates against an injected fragment registry.
#[derive(Debug, Clone)]
pub struct DocumentComposer {
    registry: Arc<FragmentRegistry>,
    config: Arc<ComposerConfig>,
}

impl DocumentComposer {
    /// Create a composer with the default configuration.
    pub fn new(registry: Arc<FragmentRegistry>) -> Self {
        Self::with_config(registry, ComposerConfig::default())
    }

    /// Create a composer with custom configuration.
    pub fn with_config(registry: Arc<FragmentRegistry>, config: ComposerConfig) -> Self {
        Self {
            registry,
            config: Arc::new(config),
        }
    }

    /// Get the registry.
    pub fn registry(&self) -> &FragmentRegistry {
        &self.registry
    }

    /// Get the configuration.
    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Compose a template into a document.
    ///
    /// Fails with [`ComposeError::UnresolvedFragment`] when the template (or
    /// one of its fragments) spreads a fragment missing from the registry,
    /// and with [`ComposeError::UndefinedVariable`] or
    /// [`ComposeError::UnusedVariable`] when argument references and
    /// declarations disagree.
    pub fn compose(&self, template: &MutationTemplate) -> Result<MutationDocument> {
        let operation = template.operation_name();
        let spreads = template.fragment_spreads();
        let fragments = self
            .registry
            .resolve(operation, &spreads)
            .inspect_err(|e| {
                error!(operation = %operation, error = %e, "Cannot compose mutation document")
            })?;
        check_variables(template, &fragments).inspect_err(|e| {
            error!(operation = %operation, error = %e, "Cannot compose mutation document")
        })?;

        let mut printer = Printer::new(self.config.indent);
        printer.operation(template, self.config.named_operations);
        for def in &fragments {
            printer.fragment(def);
        }

        let document = MutationDocument {
            operation_name: Arc::from(operation),
            named: self.config.named_operations,
            variables: Arc::from(template.variables()),
            fragments: fragments.iter().map(|def| def.name.clone()).collect(),
            text: Arc::from(printer.finish()),
        };

        if self.config.validate {
            document.parse()?;
        }

        debug!(
            operation = %operation,
            variables = document.variables.len(),
            fragments = document.fragments.len(),
            bytes = document.text.len(),
            "Composed mutation document"
        );
        Ok(document)
    }
}

/// Every referenced variable must be declared, and every declared one used.
fn check_variables(
    template: &MutationTemplate,
    fragments: &[&FragmentDefinition],
) -> Result<()> {
    let mut referenced = template.variable_references();
    for def in fragments {
        for name in def.variable_references() {
            if !referenced.contains(&name) {
                referenced.push(name);
            }
        }
    }

    let declared = template.variables();
    if let Some(name) = referenced
        .iter()
        .find(|name| !declared.iter().any(|v| v.name == **name))
    {
        return Err(ComposeError::UndefinedVariable {
            variable: (*name).to_string(),
            operation: template.operation_name().to_string(),
        });
    }
    if let Some(var) = declared
        .iter()
        .find(|v| !referenced.contains(&v.name.as_str()))
    {
        return Err(ComposeError::UnusedVariable {
            variable: var.name.clone(),
            operation: template.operation_name().to_string(),
        });
    }
    Ok(())
}
