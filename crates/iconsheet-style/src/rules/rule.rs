//! Single style rule definition.

use std::fmt::Write;

/// A `name: value` pair inside a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name.
    pub name: String,
    /// Property value, written verbatim.
    pub value: String,
}

impl Declaration {
    /// Create a declaration.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A style rule mapping a selector to declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// The selector.
    pub selector: String,
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    /// Create an empty rule.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration.
    pub fn declare(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration::new(name, value));
        self
    }

    /// Copy of this rule with `scope` prepended as an ancestor selector.
    pub fn scoped(&self, scope: &str) -> Self {
        Self {
            selector: format!("{scope} {}", self.selector),
            declarations: self.declarations.clone(),
        }
    }

    /// Render the rule, indented by `indent_level` tabs. Declarations sit two
    /// spaces deeper than the selector.
    pub fn to_css(&self, indent_level: usize) -> String {
        let indent = "\t".repeat(indent_level);
        let mut css = format!("{indent}{} {{\n", self.selector);
        for Declaration { name, value } in &self.declarations {
            let _ = writeln!(css, "{indent}  {name}: {value};");
        }
        let _ = writeln!(css, "{indent}}}");
        css
    }
}
