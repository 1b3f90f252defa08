//! Selector templates.
//!
//! Templates use the host framework's syntax: `&` stands for the element the
//! utility class lands on, and `:merge(.group)` marks a class the host may fold
//! together with other variants on the same ancestor or sibling.
//!
//! ```text
//! plain   &[aria-expanded="true"]
//! group   :merge(.group)[aria-expanded="true"] &
//!         :merge(.group\/menu)[aria-expanded="true"] &
//! peer    :merge(.peer)[aria-expanded="true"] ~ &
//!         :merge(.peer\/menu)[aria-expanded="true"] ~ &
//! ```

use serde::Serialize;

/// Where a compound variant looks for the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// An ancestor marked with `.group`
    Group,
    /// A preceding sibling marked with `.peer`
    Peer,
}

impl Relation {
    /// Marker class, also the variant prefix the host matches on.
    pub fn marker(self) -> &'static str {
        match self {
            Relation::Group => "group",
            Relation::Peer => "peer",
        }
    }

    fn combinator(self) -> &'static str {
        match self {
            Relation::Group => " &",
            Relation::Peer => " ~ &",
        }
    }
}

/// A variant matching the element itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSelector {
    condition: String,
}

impl VariantSelector {
    /// `condition` is a bare attribute test such as `aria-sort="none"`.
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
        }
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn template(&self) -> String {
        format!("&[{}]", self.condition)
    }

    /// Concrete CSS selector for `class`.
    pub fn apply(&self, class: &str) -> String {
        expand(&self.template(), class)
    }
}

/// A variant matching through a marked ancestor or sibling, optionally
/// narrowed to a named group (`group/menu`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    relation: Relation,
    condition: String,
}

impl CompoundSelector {
    pub fn new(relation: Relation, condition: impl Into<String>) -> Self {
        Self {
            relation,
            condition: condition.into(),
        }
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// An empty modifier counts as none.
    pub fn template(&self, modifier: Option<&str>) -> String {
        let marker = self.relation.marker();
        let scope = match modifier.filter(|m| !m.is_empty()) {
            Some(name) => format!("{marker}\\/{name}"),
            None => marker.to_string(),
        };
        format!(
            ":merge(.{scope})[{}]{}",
            self.condition,
            self.relation.combinator()
        )
    }

    /// Concrete CSS selector for `class`.
    pub fn apply(&self, class: &str, modifier: Option<&str>) -> String {
        expand(&self.template(modifier), class)
    }
}

/// Resolve a template against a utility class: `&` becomes the escaped class
/// selector and `:merge(...)` is unwrapped.
pub fn expand(template: &str, class: &str) -> String {
    const MERGE: &str = ":merge(";

    let target = format!(".{}", escape_class(class));
    let mut out = String::with_capacity(template.len() + target.len());
    let mut rest = template;

    while let Some(start) = rest.find(MERGE) {
        out.push_str(&rest[..start].replace('&', &target));
        let inner = &rest[start + MERGE.len()..];
        match inner.find(')') {
            Some(end) => {
                out.push_str(&inner[..end]);
                rest = &inner[end + 1..];
            }
            None => {
                // Unbalanced; keep the remainder as written
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(&rest.replace('&', &target));
    out
}

/// Escape a class name for use in a CSS selector.
///
/// Utility classes routinely contain `:`, `/`, `[`, `]` and quotes; each gets
/// a backslash. A digit that would start the identifier (first character, or
/// second after a leading `-`) is written as a hex escape.
pub fn escape_class(class: &str) -> String {
    let mut out = String::with_capacity(class.len() + 8);
    let leading_dash = class.starts_with('-');
    for (i, ch) in class.chars().enumerate() {
        let starts_ident = i == 0 || (i == 1 && leading_dash);
        if starts_ident && ch.is_ascii_digit() {
            out.push_str(&format!("\\3{ch} "));
        } else if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || !ch.is_ascii() {
            out.push(ch);
        } else {
            out.push('\\');
            out.push(ch);
        }
    }
    out
}
