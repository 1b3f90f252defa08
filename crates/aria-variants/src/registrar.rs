//! Registration sink.
//!
//! The host styling framework owns the real variant registry; the generator
//! only talks to it through [`Registrar`].

use crate::selector::{CompoundSelector, Relation, VariantSelector};
use serde::Serialize;
use std::convert::Infallible;

/// Variant registration API of the host framework.
pub trait Registrar {
    type Error;

    /// Register `name` as a variant on the element itself.
    fn add_variant(&mut self, name: &str, selector: &VariantSelector) -> Result<(), Self::Error>;

    /// Register `name` under the `group` prefix (`group-<name>`, `group-<name>/<modifier>`).
    fn add_group_variant(
        &mut self,
        name: &str,
        selector: &CompoundSelector,
    ) -> Result<(), Self::Error>;

    /// Register `name` under the `peer` prefix (`peer-<name>`, `peer-<name>/<modifier>`).
    fn add_peer_variant(
        &mut self,
        name: &str,
        selector: &CompoundSelector,
    ) -> Result<(), Self::Error>;
}

/// Which registrar method produced a [`Registration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationKind {
    Plain,
    Group,
    Peer,
}

/// One recorded registrar call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub kind: RegistrationKind,
    pub name: String,
    /// Bare attribute test, e.g. `aria-sort="none"`.
    pub condition: String,
}

impl Registration {
    /// Selector template as the host would receive it.
    pub fn template(&self, modifier: Option<&str>) -> String {
        match self.kind {
            RegistrationKind::Plain => VariantSelector::new(self.condition.as_str()).template(),
            RegistrationKind::Group => {
                CompoundSelector::new(Relation::Group, self.condition.as_str()).template(modifier)
            }
            RegistrationKind::Peer => {
                CompoundSelector::new(Relation::Peer, self.condition.as_str()).template(modifier)
            }
        }
    }
}

/// Registrar that keeps every call, in order.
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    registrations: Vec<Registration>,
}

impl RecordingRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn into_registrations(self) -> Vec<Registration> {
        self.registrations
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Names registered through `kind`, in call order.
    pub fn names(&self, kind: RegistrationKind) -> Vec<&str> {
        self.registrations
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.name.as_str())
            .collect()
    }

    fn record(&mut self, kind: RegistrationKind, name: &str, condition: &str) {
        self.registrations.push(Registration {
            kind,
            name: name.to_string(),
            condition: condition.to_string(),
        });
    }
}

impl Registrar for RecordingRegistrar {
    type Error = Infallible;

    fn add_variant(&mut self, name: &str, selector: &VariantSelector) -> Result<(), Infallible> {
        self.record(RegistrationKind::Plain, name, selector.condition());
        Ok(())
    }

    fn add_group_variant(
        &mut self,
        name: &str,
        selector: &CompoundSelector,
    ) -> Result<(), Infallible> {
        self.record(RegistrationKind::Group, name, selector.condition());
        Ok(())
    }

    fn add_peer_variant(
        &mut self,
        name: &str,
        selector: &CompoundSelector,
    ) -> Result<(), Infallible> {
        self.record(RegistrationKind::Peer, name, selector.condition());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_records_in_order() {
        let mut rec = RecordingRegistrar::new();
        let cond = r#"aria-busy="true""#;
        rec.add_variant("aria-busy", &VariantSelector::new(cond)).unwrap();
        rec.add_group_variant("aria-busy", &CompoundSelector::new(Relation::Group, cond))
            .unwrap();
        rec.add_peer_variant("aria-busy", &CompoundSelector::new(Relation::Peer, cond))
            .unwrap();

        let kinds: Vec<RegistrationKind> = rec.registrations().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RegistrationKind::Plain,
                RegistrationKind::Group,
                RegistrationKind::Peer
            ]
        );
        assert_eq!(rec.names(RegistrationKind::Group), vec!["aria-busy"]);
        assert_eq!(rec.len(), 3);
    }

    #[test]
    fn test_registration_template() {
        let reg = Registration {
            kind: RegistrationKind::Peer,
            name: "aria-not-checked".into(),
            condition: r#"aria-checked="false""#.into(),
        };
        assert_eq!(reg.template(None), r#":merge(.peer)[aria-checked="false"] ~ &"#);
        assert_eq!(
            reg.template(Some("opt")),
            r#":merge(.peer\/opt)[aria-checked="false"] ~ &"#
        );
    }

    #[test]
    fn test_plain_template_ignores_modifier() {
        let reg = Registration {
            kind: RegistrationKind::Plain,
            name: "aria-hidden".into(),
            condition: r#"aria-hidden="true""#.into(),
        };
        assert_eq!(reg.template(Some("x")), r#"&[aria-hidden="true"]"#);
    }

    #[test]
    fn test_serialize_registration() {
        let reg = Registration {
            kind: RegistrationKind::Group,
            name: "aria-sort-none".into(),
            condition: r#"aria-sort="none""#.into(),
        };
        let json = serde_json::to_string(&reg).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"group","name":"aria-sort-none","condition":"aria-sort=\"none\""}"#
        );
    }
}
