//! Document composer configuration.

/// Document composer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerConfig {
    /// Spaces per nesting level in rendered text.
    pub indent: usize,
    /// Emit the operation name after the `mutation` keyword.
    pub named_operations: bool,
    /// Parse-check every composed document.
    pub validate: bool,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            named_operations: true,
            validate: true,
        }
    }
}

impl ComposerConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ComposerConfigBuilder {
        ComposerConfigBuilder::default()
    }

    /// Configuration that renders anonymous operations (`mutation($x: T) { ... }`).
    pub fn anonymous() -> Self {
        Self {
            named_operations: false,
            ..Default::default()
        }
    }
}

/// Builder for document composer configuration.
#[derive(Debug, Default)]
pub struct ComposerConfigBuilder {
    config: ComposerConfig,
}

impl ComposerConfigBuilder {
    /// Set the indent width.
    pub fn indent(mut self, spaces: usize) -> Self {
        self.config.indent = spaces;
        self
    }

    /// Enable or disable operation names.
    pub fn named_operations(mut self, enabled: bool) -> Self {
        self.config.named_operations = enabled;
        self
    }

    /// Enable or disable parse-checking of composed documents.
    pub fn validate(mut self, enabled: bool) -> Self {
        self.config.validate = enabled;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ComposerConfig {
        self.config
    }
}
