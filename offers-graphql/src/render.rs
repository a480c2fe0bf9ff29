//! Text rendering for composed documents.

use crate::document::{Field, FragmentDefinition, MutationTemplate, Selection, SelectionSet};

pub(crate) struct Printer {
    out: String,
    indent: usize,
    depth: usize,
}

impl Printer {
    pub(crate) fn new(indent: usize) -> Self {
        Self {
            out: String::new(),
            indent,
            depth: 0,
        }
    }

    pub(crate) fn operation(&mut self, template: &MutationTemplate, named: bool) {
        let mut head = String::from("mutation");
        if named {
            head.push(' ');
            head.push_str(template.operation_name());
        }
        if !template.variables().is_empty() {
            let vars: Vec<String> = template.variables().iter().map(|v| v.to_string()).collect();
            head.push('(');
            head.push_str(&vars.join(", "));
            head.push(')');
        }
        self.block(&head, template.selection_set());
    }

    pub(crate) fn fragment(&mut self, def: &FragmentDefinition) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        let head = format!("fragment {} on {}", def.name, def.type_condition);
        self.block(&head, &def.selection_set);
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    fn block(&mut self, head: &str, set: &SelectionSet) {
        self.line(&format!("{} {{", head));
        self.depth += 1;
        for item in set.items() {
            match item {
                Selection::Field(field) => self.field(field),
                Selection::FragmentSpread(name) => self.line(&format!("...{}", name)),
            }
        }
        self.depth -= 1;
        self.line("}");
    }

    fn field(&mut self, field: &Field) {
        let mut head = String::new();
        if let Some(alias) = &field.alias {
            head.push_str(alias);
            head.push_str(": ");
        }
        head.push_str(&field.name);
        if !field.arguments.is_empty() {
            let args: Vec<String> = field.arguments.iter().map(|a| a.to_string()).collect();
            head.push('(');
            head.push_str(&args.join(", "));
            head.push(')');
        }

        if field.is_leaf() {
            self.line(&head);
        } else {
            self.block(&head, &field.selection_set);
        }
    }

    fn line(&mut self, text: &str) {
        self.out
            .extend(std::iter::repeat_n(' ', self.depth * self.indent));
        self.out.push_str(text);
        self.out.push('\n');
    }
}
