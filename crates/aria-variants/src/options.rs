//! Plugin options.
//!
//! Mirrors the object the host build configuration passes in:
//!
//! ```text
//! { attributes?: string[], includeDeprecated?: boolean,
//!   negate?: "all" | "relevant" | false | string[] }
//! ```

use crate::{catalog, OptionsError};
use serde::Deserialize;

/// Options for the ARIA variant generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawOptions")]
pub struct ExtendAriaOptions {
    /// Explicit attribute list. Used verbatim when present; `None` means every
    /// catalog attribute, minus deprecated ones unless `include_deprecated`.
    pub attributes: Option<Vec<String>>,

    /// Keep `aria-grabbed` and `aria-dropeffect` in the default list (default: false)
    pub include_deprecated: bool,

    /// Which boolean attributes also get an `aria-not-*` variant (default: Relevant)
    pub negate: Negate,
}

impl ExtendAriaOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object.
    ///
    /// Syntax errors come back as [`OptionsError::Json`]; a well-formed but
    /// unsupported `negate` as [`OptionsError::InvalidNegate`].
    pub fn from_json(source: &str) -> Result<Self, OptionsError> {
        let raw: RawOptions =
            serde_json::from_str(source).map_err(|e| OptionsError::Json(e.to_string()))?;
        Self::try_from(raw)
    }

    pub fn attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    pub fn include_deprecated(mut self, include: bool) -> Self {
        self.include_deprecated = include;
        self
    }

    pub fn negate(mut self, negate: Negate) -> Self {
        self.negate = negate;
        self
    }
}

/// Policy for generating `aria-not-*` variants on boolean attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "NegateRepr")]
pub enum Negate {
    /// Every boolean attribute
    All,
    /// Only attributes whose `"false"` state is meaningful on its own
    #[default]
    Relevant,
    /// Exactly the listed attributes
    Only(Vec<String>),
    /// No negated variants
    None,
}

impl Negate {
    /// Whether the boolean attribute `name` gets a negated variant.
    pub fn applies_to(&self, name: &str) -> bool {
        match self {
            Negate::All => true,
            Negate::Relevant => catalog::is_negatable(name),
            Negate::Only(names) => names.iter().any(|n| n == name),
            Negate::None => false,
        }
    }

    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Negate::Only(names.into_iter().map(Into::into).collect())
    }
}

/// Wire shape of the options object before validation.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawOptions {
    attributes: Option<Vec<String>>,
    include_deprecated: bool,
    /// `null` is read as unset and falls back to `Relevant`. A JS host that
    /// passes `null` itself would get no negation, but JSON has no
    /// `undefined` to tell the two apart.
    negate: Option<NegateRepr>,
}

impl TryFrom<RawOptions> for ExtendAriaOptions {
    type Error = OptionsError;

    fn try_from(raw: RawOptions) -> Result<Self, Self::Error> {
        let negate = match raw.negate {
            Some(repr) => Negate::try_from(repr)?,
            None => Negate::default(),
        };
        Ok(Self {
            attributes: raw.attributes,
            include_deprecated: raw.include_deprecated,
            negate,
        })
    }
}

/// Wire shape of `negate` before validation.
#[derive(Deserialize)]
#[serde(untagged)]
enum NegateRepr {
    Flag(bool),
    Mode(String),
    List(Vec<String>),
}

impl TryFrom<NegateRepr> for Negate {
    type Error = OptionsError;

    fn try_from(repr: NegateRepr) -> Result<Self, Self::Error> {
        match repr {
            NegateRepr::Flag(false) => Ok(Negate::None),
            NegateRepr::Flag(true) => Err(OptionsError::InvalidNegate("true".into())),
            NegateRepr::Mode(mode) => match mode.as_str() {
                "all" => Ok(Negate::All),
                "relevant" => Ok(Negate::Relevant),
                _ => Err(OptionsError::InvalidNegate(mode)),
            },
            NegateRepr::List(names) => Ok(Negate::Only(names)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Defaults
    // =========================================================================

    #[test]
    fn test_defaults() {
        let opts = ExtendAriaOptions::default();
        assert_eq!(opts.attributes, None);
        assert!(!opts.include_deprecated);
        assert_eq!(opts.negate, Negate::Relevant);
    }

    #[test]
    fn test_empty_object() {
        let opts = ExtendAriaOptions::from_json("{}").unwrap();
        assert_eq!(opts, ExtendAriaOptions::default());
    }

    #[test]
    fn test_builder() {
        let opts = ExtendAriaOptions::new()
            .attributes(["aria-checked", "aria-sort"])
            .include_deprecated(true)
            .negate(Negate::All);
        assert_eq!(
            opts.attributes,
            Some(vec!["aria-checked".to_string(), "aria-sort".to_string()])
        );
        assert!(opts.include_deprecated);
        assert_eq!(opts.negate, Negate::All);
    }

    // =========================================================================
    // JSON parsing
    // =========================================================================

    #[test]
    fn test_parse_camel_case() {
        let opts = ExtendAriaOptions::from_json(
            r#"{ "attributes": ["aria-expanded"], "includeDeprecated": true }"#,
        )
        .unwrap();
        assert_eq!(opts.attributes, Some(vec!["aria-expanded".to_string()]));
        assert!(opts.include_deprecated);
    }

    #[test]
    fn test_parse_negate_modes() {
        let all = ExtendAriaOptions::from_json(r#"{ "negate": "all" }"#).unwrap();
        assert_eq!(all.negate, Negate::All);

        let relevant = ExtendAriaOptions::from_json(r#"{ "negate": "relevant" }"#).unwrap();
        assert_eq!(relevant.negate, Negate::Relevant);

        let none = ExtendAriaOptions::from_json(r#"{ "negate": false }"#).unwrap();
        assert_eq!(none.negate, Negate::None);

        let unset = ExtendAriaOptions::from_json(r#"{ "negate": null }"#).unwrap();
        assert_eq!(unset.negate, Negate::Relevant);
    }

    #[test]
    fn test_parse_negate_list() {
        let opts =
            ExtendAriaOptions::from_json(r#"{ "negate": ["aria-checked", "aria-pressed"] }"#)
                .unwrap();
        assert_eq!(opts.negate, Negate::only(["aria-checked", "aria-pressed"]));
    }

    #[test]
    fn test_parse_negate_true_rejected() {
        let err = ExtendAriaOptions::from_json(r#"{ "negate": true }"#).unwrap_err();
        assert_eq!(err, OptionsError::InvalidNegate("true".into()));
    }

    #[test]
    fn test_parse_negate_unknown_mode() {
        let err = ExtendAriaOptions::from_json(r#"{ "negate": "some" }"#).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidNegate(ref mode) if mode == "some"), "{err}");
        assert!(err.to_string().contains("\"some\""), "{err}");
    }

    #[test]
    fn test_parse_negate_wrong_type() {
        // Neither a flag, a mode nor a list: a decoding error, not a policy error
        let err = ExtendAriaOptions::from_json(r#"{ "negate": 3 }"#).unwrap_err();
        assert!(matches!(err, OptionsError::Json(_)), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_bad_negate() {
        let err = serde_json::from_str::<ExtendAriaOptions>(r#"{ "negate": "some" }"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid negate option"), "{err}");
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = ExtendAriaOptions::from_json("{ attributes").unwrap_err();
        assert!(matches!(err, OptionsError::Json(_)));
    }

    // =========================================================================
    // Negate policy
    // =========================================================================

    #[test]
    fn test_applies_to_relevant() {
        assert!(Negate::Relevant.applies_to("aria-expanded"));
        assert!(!Negate::Relevant.applies_to("aria-hidden"));
    }

    #[test]
    fn test_applies_to_all_and_none() {
        assert!(Negate::All.applies_to("aria-hidden"));
        assert!(!Negate::None.applies_to("aria-expanded"));
    }

    #[test]
    fn test_applies_to_only() {
        let negate = Negate::only(["aria-busy"]);
        assert!(negate.applies_to("aria-busy"));
        assert!(!negate.applies_to("aria-expanded"));
    }
}
