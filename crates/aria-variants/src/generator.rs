//! Variant generation.
//!
//! Resolves the attribute list from [`ExtendAriaOptions`], derives one
//! [`Variant`] per attribute state, and hands each to a [`Registrar`] three
//! times: plain, group-scoped, peer-scoped.
//!
//! ```text
//! options → resolve_attributes() → variants() → generate(registrar)
//! ```

use crate::catalog;
use crate::options::ExtendAriaOptions;
use crate::registrar::Registrar;
use crate::selector::{CompoundSelector, Relation, VariantSelector};

/// A named attribute state, e.g. `aria-sort-none` for `aria-sort="none"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    pub condition: String,
}

impl Variant {
    fn new(name: impl Into<String>, attribute: &str, value: &str) -> Self {
        Self {
            name: name.into(),
            condition: format!("{attribute}=\"{value}\""),
        }
    }
}

/// Attribute names to generate for, without duplicates.
///
/// An explicit list is taken as given (unknown names are kept here and
/// dropped later by [`variants`]). Otherwise every catalog attribute, minus
/// deprecated ones unless `include_deprecated` is set.
pub fn resolve_attributes(options: &ExtendAriaOptions) -> Vec<String> {
    let mut resolved: Vec<String> = Vec::new();

    match &options.attributes {
        Some(explicit) => {
            for name in explicit {
                if !resolved.contains(name) {
                    resolved.push(name.clone());
                }
            }
        }
        None => {
            resolved.extend(
                catalog::names()
                    .filter(|name| options.include_deprecated || !catalog::is_deprecated(name))
                    .map(String::from),
            );
        }
    }

    resolved
}

/// Every variant the options select, in registration order.
pub fn variants(options: &ExtendAriaOptions) -> Vec<Variant> {
    let attributes = resolve_attributes(options);
    tracing::debug!(count = attributes.len(), "resolved ARIA attributes");

    let mut out = Vec::new();
    for attribute in &attributes {
        let values = catalog::enumerated_values(attribute);
        let boolean = catalog::is_boolean(attribute);

        if values.is_empty() && !boolean {
            tracing::debug!(attribute = %attribute, "skipping unknown ARIA attribute");
            continue;
        }

        // The two tables overlap, so both checks run
        for value in values {
            out.push(Variant::new(format!("{attribute}-{value}"), attribute, value));
        }

        if boolean {
            if options.negate.applies_to(attribute) {
                out.push(Variant::new(
                    catalog::negated_name(attribute),
                    attribute,
                    "false",
                ));
            }
            out.push(Variant::new(attribute.as_str(), attribute, "true"));
        }
    }
    out
}

/// Register every selected variant with `registrar`.
///
/// Each variant produces exactly three calls, in order: `add_variant`,
/// `add_group_variant`, `add_peer_variant`. Stops at the first registrar
/// error.
pub fn generate<R: Registrar>(
    options: &ExtendAriaOptions,
    registrar: &mut R,
) -> Result<(), R::Error> {
    for variant in variants(options) {
        tracing::trace!(
            name = %variant.name,
            condition = %variant.condition,
            "registering variant"
        );

        registrar.add_variant(
            &variant.name,
            &VariantSelector::new(variant.condition.as_str()),
        )?;
        registrar.add_group_variant(
            &variant.name,
            &CompoundSelector::new(Relation::Group, variant.condition.as_str()),
        )?;
        registrar.add_peer_variant(
            &variant.name,
            &CompoundSelector::new(Relation::Peer, variant.condition),
        )?;
    }
    Ok(())
}
