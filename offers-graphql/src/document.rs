//! Structured GraphQL document pieces.
//!
//! Templates are assembled from typed values instead of interpolated text, so
//! every fragment spread is a name the composer can check against the
//! registry before any text exists.

use std::fmt;

/// A GraphQL input type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A named type (`ID`, `IntentCreateParams`).
    Named(String),
    /// A list of the inner type.
    List(Box<TypeRef>),
    /// A non-null wrapper around the inner type.
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Create a named (nullable) type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wrap this type as non-null. Already non-null types are returned as is.
    pub fn non_null(self) -> Self {
        match self {
            Self::NonNull(_) => self,
            other => Self::NonNull(Box::new(other)),
        }
    }

    /// Wrap this type in a list.
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Check if the outermost type is non-null.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Name of the innermost named type.
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.base_name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{}", name),
            Self::List(inner) => write!(f, "[{}]", inner),
            Self::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}

/// An operation variable declaration (`$proposal: ID!`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDefinition {
    /// Variable name without the `$` sigil.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
}

impl VariableDefinition {
    /// Create a variable definition.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Declare a non-null variable of a named type.
    pub fn required(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, TypeRef::named(type_name).non_null())
    }

    /// Declare a nullable variable of a named type.
    pub fn optional(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, TypeRef::named(type_name))
    }

    /// Check if callers must supply this variable.
    pub fn is_required(&self) -> bool {
        self.ty.is_non_null()
    }
}

impl fmt::Display for VariableDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}: {}", self.name, self.ty)
    }
}

/// An argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Reference to an operation variable.
    Variable(String),
    /// Boolean literal.
    Boolean(bool),
    /// Integer literal.
    Int(i64),
    /// String literal.
    String(String),
    /// Enum literal.
    Enum(String),
    /// `null`.
    Null,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "${}", name),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            // GraphQL string escapes are a superset of what JSON emits
            Self::String(s) => write!(f, "{}", serde_json::Value::String(s.clone())),
            Self::Enum(name) => write!(f, "{}", name),
            Self::Null => write!(f, "null"),
        }
    }
}

/// A field argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    /// Argument name.
    pub name: String,
    /// Argument value.
    pub value: Value,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// One entry of a selection set.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// A field selection.
    Field(Field),
    /// A named fragment spread (`...OffersIntent`).
    FragmentSpread(String),
}

/// An ordered selection set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    items: Vec<Selection>,
}

impl SelectionSet {
    /// Create an empty selection set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a selection.
    pub fn push(&mut self, selection: Selection) {
        self.items.push(selection);
    }

    /// Get the selections.
    pub fn items(&self) -> &[Selection] {
        &self.items
    }

    /// Check if the selection set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Response keys of the fields directly in this set.
    pub fn field_names(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|s| match s {
                Selection::Field(field) => Some(field.response_key()),
                Selection::FragmentSpread(_) => None,
            })
            .collect()
    }

    /// Find a direct field by response key.
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.items.iter().find_map(|s| match s {
            Selection::Field(field) if field.response_key() == key => Some(field),
            _ => None,
        })
    }

    /// Collect fragment spreads anywhere below this set, first use first.
    pub(crate) fn collect_spreads<'a>(&'a self, out: &mut Vec<&'a str>) {
        for item in &self.items {
            match item {
                Selection::Field(field) => field.selection_set.collect_spreads(out),
                Selection::FragmentSpread(name) => {
                    if !out.contains(&name.as_str()) {
                        out.push(name);
                    }
                }
            }
        }
    }

    /// Collect variables referenced by arguments anywhere below this set,
    /// first use first.
    pub(crate) fn collect_variables<'a>(&'a self, out: &mut Vec<&'a str>) {
        for item in &self.items {
            if let Selection::Field(field) = item {
                for arg in &field.arguments {
                    if let Value::Variable(name) = &arg.value
                        && !out.contains(&name.as_str())
                    {
                        out.push(name);
                    }
                }
                field.selection_set.collect_variables(out);
            }
        }
    }
}

/// A field selection with optional arguments and sub-selections.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Response alias.
    pub alias: Option<String>,
    /// Field name.
    pub name: String,
    /// Arguments in declaration order.
    pub arguments: Vec<Argument>,
    /// Sub-selections; empty for leaf fields.
    pub selection_set: SelectionSet,
}

impl Field {
    /// Create a leaf field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            name: name.into(),
            arguments: Vec::new(),
            selection_set: SelectionSet::new(),
        }
    }

    /// Set the response alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Add an argument with a literal value.
    pub fn arg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments.push(Argument {
            name: name.into(),
            value,
        });
        self
    }

    /// Add an argument bound to an operation variable.
    pub fn arg_variable(self, name: impl Into<String>, variable: impl Into<String>) -> Self {
        self.arg(name, Value::Variable(variable.into()))
    }

    /// Select a leaf sub-field.
    pub fn field(self, name: impl Into<String>) -> Self {
        self.select(Field::new(name))
    }

    /// Select several leaf sub-fields.
    pub fn fields<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(self, |field, name| field.field(name))
    }

    /// Select a sub-field.
    pub fn select(mut self, field: Field) -> Self {
        self.selection_set.push(Selection::Field(field));
        self
    }

    /// Spread a named fragment.
    pub fn spread(mut self, fragment: impl Into<String>) -> Self {
        self.selection_set
            .push(Selection::FragmentSpread(fragment.into()));
        self
    }

    /// Key this field appears under in the response.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Check if this field has no sub-selections.
    pub fn is_leaf(&self) -> bool {
        self.selection_set.is_empty()
    }
}

/// A named, reusable selection block (`fragment OffersIntent on Intent { ... }`).
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentDefinition {
    /// Fragment name.
    pub name: String,
    /// Type the fragment applies to.
    pub type_condition: String,
    /// Selected fields.
    pub selection_set: SelectionSet,
}

impl FragmentDefinition {
    /// Create an empty fragment on a type.
    pub fn new(name: impl Into<String>, on_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_condition: on_type.into(),
            selection_set: SelectionSet::new(),
        }
    }

    /// Select a leaf field.
    pub fn field(self, name: impl Into<String>) -> Self {
        self.select(Field::new(name))
    }

    /// Select several leaf fields.
    pub fn fields<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(self, |def, name| def.field(name))
    }

    /// Select a field.
    pub fn select(mut self, field: Field) -> Self {
        self.selection_set.push(Selection::Field(field));
        self
    }

    /// Spread another fragment.
    pub fn spread(mut self, fragment: impl Into<String>) -> Self {
        self.selection_set
            .push(Selection::FragmentSpread(fragment.into()));
        self
    }

    /// Fragments this fragment spreads, first use first.
    pub fn fragment_spreads(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.selection_set.collect_spreads(&mut out);
        out
    }

    /// Variables referenced by this fragment's arguments.
    pub fn variable_references(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.selection_set.collect_variables(&mut out);
        out
    }
}

/// A mutation operation before fragment resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationTemplate {
    operation_name: String,
    variables: Vec<VariableDefinition>,
    selection_set: SelectionSet,
}

impl MutationTemplate {
    /// Start building a template.
    pub fn builder(operation_name: impl Into<String>) -> MutationTemplateBuilder {
        MutationTemplateBuilder {
            template: MutationTemplate {
                operation_name: operation_name.into(),
                variables: Vec::new(),
                selection_set: SelectionSet::new(),
            },
        }
    }

    /// Get the operation name.
    pub fn operation_name(&self) -> &str {
        &self.operation_name
    }

    /// Get the declared variables.
    pub fn variables(&self) -> &[VariableDefinition] {
        &self.variables
    }

    /// Get the root selection set.
    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// Fragments spread directly by this template, first use first.
    pub fn fragment_spreads(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.selection_set.collect_spreads(&mut out);
        out
    }

    /// Variables referenced by the template's own arguments, first use first.
    pub fn variable_references(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.selection_set.collect_variables(&mut out);
        out
    }
}

/// Builder for [`MutationTemplate`].
#[derive(Debug)]
pub struct MutationTemplateBuilder {
    template: MutationTemplate,
}

impl MutationTemplateBuilder {
    /// Declare a variable. A later declaration replaces an earlier one of the
    /// same name.
    pub fn variable(mut self, definition: VariableDefinition) -> Self {
        let vars = &mut self.template.variables;
        match vars.iter_mut().find(|v| v.name == definition.name) {
            Some(existing) => *existing = definition,
            None => vars.push(definition),
        }
        self
    }

    /// Select a root field.
    pub fn select(mut self, field: Field) -> Self {
        self.template
            .selection_set
            .push(Selection::Field(field));
        self
    }

    /// Build the template.
    pub fn build(self) -> MutationTemplate {
        self.template
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_display() {
        assert_eq!(TypeRef::named("ID").to_string(), "ID");
        assert_eq!(TypeRef::named("ID").non_null().to_string(), "ID!");
        assert_eq!(TypeRef::named("ID").non_null().non_null().to_string(), "ID!");
        assert_eq!(
            TypeRef::named("ID").non_null().list().non_null().to_string(),
            "[ID!]!"
        );
        assert_eq!(TypeRef::named("ID").list().base_name(), "ID");
    }

    #[test]
    fn test_variable_definition() {
        let required = VariableDefinition::required("proposal", "ID");
        assert!(required.is_required());
        assert_eq!(required.to_string(), "$proposal: ID!");

        let optional = VariableDefinition::optional("reciprocal", "Boolean");
        assert!(!optional.is_required());
        assert_eq!(optional.to_string(), "$reciprocal: Boolean");
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Variable("agent".into()).to_string(), "$agent");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::String("a \"b\"".into()).to_string(), r#""a \"b\"""#);
        assert_eq!(Value::Enum("TRANSFER".into()).to_string(), "TRANSFER");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_field_builder() {
        let field = Field::new("proposeTo")
            .arg_variable("proposed", "proposal")
            .select(Field::new("proposedTo").fields(["id", "proposed", "proposedTo"]));

        assert_eq!(field.arguments.len(), 1);
        assert_eq!(field.arguments[0].to_string(), "proposed: $proposal");
        assert!(!field.is_leaf());

        let inner = field.selection_set.field("proposedTo").unwrap();
        assert_eq!(inner.selection_set.field_names(), vec!["id", "proposed", "proposedTo"]);
    }

    #[test]
    fn test_alias_is_response_key() {
        let field = Field::new("createIntent").alias("made");
        assert_eq!(field.response_key(), "made");
    }

    #[test]
    fn test_template_collects_nested_spreads_once() {
        let template = MutationTemplate::builder("Both")
            .select(Field::new("a").select(Field::new("x").spread("Frag")))
            .select(Field::new("b").spread("Other").spread("Frag"))
            .build();

        assert_eq!(template.fragment_spreads(), vec!["Frag", "Other"]);
    }

    #[test]
    fn test_template_collects_nested_variable_references() {
        let template = MutationTemplate::builder("Link")
            .select(
                Field::new("proposeIntent")
                    .arg_variable("publishedIn", "proposal")
                    .arg("reciprocal", Value::Boolean(false))
                    .select(
                        Field::new("node")
                            .arg_variable("id", "intent")
                            .arg_variable("in", "proposal"),
                    ),
            )
            .build();

        assert_eq!(template.variable_references(), vec!["proposal", "intent"]);
    }

    #[test]
    fn test_later_variable_declaration_replaces_earlier() {
        let template = MutationTemplate::builder("Vars")
            .variable(VariableDefinition::optional("intent", "ID"))
            .variable(VariableDefinition::required("agent", "ID"))
            .variable(VariableDefinition::required("intent", "ID"))
            .build();

        let names: Vec<_> = template.variables().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["intent", "agent"]);
        assert!(template.variables()[0].is_required());
    }
}
