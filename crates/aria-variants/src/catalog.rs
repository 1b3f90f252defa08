//! WAI-ARIA attribute catalog.
//!
//! Static tables of the ARIA 1.2 attributes whose values are booleans or drawn
//! from a fixed token list. Free-form attributes such as `aria-label` are not
//! listed; hosts can still reach them through arbitrary-value syntax.
//!
//! The two tables overlap: `aria-checked` is both a boolean and accepts
//! `mixed`, so lookups report both kinds independently.

/// Attributes with enumerated tokens, in declaration order.
pub const ENUMERATED_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("aria-autocomplete", &["both", "inline", "list", "none"]),
    ("aria-checked", &["mixed"]),
    ("aria-current", &["date", "location", "page", "step", "time"]),
    (
        "aria-dropeffect",
        &["copy", "execute", "link", "move", "none", "popup"],
    ),
    ("aria-haspopup", &["dialog", "grid", "listbox", "menu", "tree"]),
    ("aria-invalid", &["grammar", "spelling"]),
    ("aria-live", &["off", "assertive", "polite"]),
    ("aria-orientation", &["horizontal", "vertical"]),
    ("aria-pressed", &["mixed"]),
    ("aria-relevant", &["additions", "all", "removals", "text"]),
    ("aria-sort", &["ascending", "descending", "none", "other"]),
];

/// Attributes accepting `"true"` / `"false"`.
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "aria-atomic",
    "aria-busy",
    "aria-checked",
    "aria-current",
    "aria-disabled",
    "aria-expanded",
    "aria-grabbed",
    "aria-haspopup",
    "aria-hidden",
    "aria-invalid",
    "aria-modal",
    "aria-multiline",
    "aria-multiselectable",
    "aria-pressed",
    "aria-readonly",
    "aria-required",
    "aria-selected",
];

/// Boolean attributes whose `"false"` state means something on its own
/// (a collapsed disclosure, an unchecked box).
pub const NEGATABLE_ATTRIBUTES: &[&str] = &[
    "aria-checked",
    "aria-expanded",
    "aria-grabbed",
    "aria-pressed",
    "aria-selected",
];

/// Deprecated in WAI-ARIA 1.1.
pub const DEPRECATED_ATTRIBUTES: &[&str] = &["aria-grabbed", "aria-dropeffect"];

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AriaAttribute {
    pub name: &'static str,
    /// Accepts `"true"` / `"false"`.
    pub boolean: bool,
    /// Enumerated tokens, empty for purely boolean attributes.
    pub values: &'static [&'static str],
}

impl AriaAttribute {
    pub fn is_enumerated(&self) -> bool {
        !self.values.is_empty()
    }

    pub fn is_deprecated(&self) -> bool {
        is_deprecated(self.name)
    }

    pub fn is_negatable(&self) -> bool {
        is_negatable(self.name)
    }
}

/// Look up an attribute by name. Returns `None` for names in neither table.
pub fn lookup(name: &str) -> Option<AriaAttribute> {
    let boolean_name = BOOLEAN_ATTRIBUTES.iter().copied().find(|attr| *attr == name);
    let enumerated = ENUMERATED_ATTRIBUTES
        .iter()
        .find(|(attr, _)| *attr == name);

    match (boolean_name, enumerated) {
        (None, None) => None,
        (Some(attr), None) => Some(AriaAttribute {
            name: attr,
            boolean: true,
            values: &[],
        }),
        (boolean_name, Some(&(attr, values))) => Some(AriaAttribute {
            name: attr,
            boolean: boolean_name.is_some(),
            values,
        }),
    }
}

pub fn is_boolean(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES.contains(&name)
}

/// Enumerated tokens for `name`, or an empty slice.
pub fn enumerated_values(name: &str) -> &'static [&'static str] {
    ENUMERATED_ATTRIBUTES
        .iter()
        .find(|(attr, _)| *attr == name)
        .map(|(_, values)| *values)
        .unwrap_or(&[])
}

pub fn is_deprecated(name: &str) -> bool {
    DEPRECATED_ATTRIBUTES.contains(&name)
}

pub fn is_negatable(name: &str) -> bool {
    NEGATABLE_ATTRIBUTES.contains(&name)
}

/// Every catalog name: booleans first, then enumerated names not already seen.
pub fn names() -> impl Iterator<Item = &'static str> {
    BOOLEAN_ATTRIBUTES.iter().copied().chain(
        ENUMERATED_ATTRIBUTES
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| !is_boolean(name)),
    )
}

/// Every catalog entry, in [`names`] order.
pub fn attributes() -> impl Iterator<Item = AriaAttribute> {
    names().filter_map(lookup)
}

/// Variant name for the `"false"` state: `aria-expanded` → `aria-not-expanded`.
///
/// Names already carrying `aria-not-`, or lacking the `aria-` prefix, are
/// returned unchanged.
pub fn negated_name(name: &str) -> String {
    if name.starts_with("aria-not-") {
        return name.to_string();
    }
    match name.strip_prefix("aria-") {
        Some(rest) => format!("aria-not-{rest}"),
        None => name.to_string(),
    }
}
