//! ARIA Variants
//!
//! Generates style variants for WAI-ARIA attribute states, such as
//! `aria-expanded:` for `[aria-expanded="true"]`, `aria-not-expanded:` for
//! `"false"`, and `aria-sort-ascending:` for enumerated tokens. Every variant
//! is registered three times: on the element itself, through a `.group`
//! ancestor, and through a `.peer` sibling.
//!
//! ```text
//! ExtendAriaOptions → generate() → Registrar { add_variant, add_group_variant, add_peer_variant }
//! ```
//!
//! # Example
//!
//! ```
//! use aria_variants::{collect, ExtendAriaOptions};
//!
//! let options = ExtendAriaOptions::new().attributes(["aria-sort"]);
//! let registrations = collect(&options);
//! assert_eq!(registrations.len(), 12);
//! assert_eq!(registrations[0].template(None), r#"&[aria-sort="ascending"]"#);
//! ```

pub mod catalog;
pub mod generator;
pub mod options;
pub mod registrar;
pub mod selector;

pub use catalog::AriaAttribute;
pub use generator::{generate, resolve_attributes, variants, Variant};
pub use options::{ExtendAriaOptions, Negate};
pub use registrar::{RecordingRegistrar, Registrar, Registration, RegistrationKind};
pub use selector::{CompoundSelector, Relation, VariantSelector};

/// Options decoding error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("invalid negate option {0:?}: expected \"all\", \"relevant\", false or a list of attributes")]
    InvalidNegate(String),
    #[error("invalid options: {0}")]
    Json(String),
}

/// Run the generator against an in-memory registrar and return every call.
pub fn collect(options: &ExtendAriaOptions) -> Vec<Registration> {
    let mut registrar = RecordingRegistrar::new();
    match generate(options, &mut registrar) {
        Ok(()) => registrar.into_registrations(),
        Err(never) => match never {},
    }
}
