//! WASM bindings for the ARIA variant generator.
//!
//! `extendAria()` drives the host plugin API (`addVariant` / `matchVariant`)
//! directly; `variants()` returns the same registrations as plain data.

use aria_variants::{
    CompoundSelector, ExtendAriaOptions, Registrar, Registration, RegistrationKind,
    VariantSelector,
};
use js_sys::{Function, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Register every ARIA variant with the host.
///
/// `add_variant` is called as `addVariant(name, "&[cond]")`. `match_variant`
/// is called as `matchVariant("group" | "peer", fn, { values: { [name]: name } })`
/// where `fn(value, { modifier })` returns the scoped selector.
///
/// Throws when `options` is malformed or a host callback throws.
#[wasm_bindgen(js_name = extendAria)]
pub fn extend_aria(
    options: JsValue,
    add_variant: Function,
    match_variant: Function,
) -> Result<(), JsValue> {
    let options = parse_options(options)?;
    let mut registrar = HostRegistrar {
        add_variant,
        match_variant,
    };
    aria_variants::generate(&options, &mut registrar)
}

/// Compute registrations without calling into the host.
///
/// Returns an array of `{ kind, name, condition, selector }`.
#[wasm_bindgen]
pub fn variants(options: JsValue) -> Result<JsValue, JsError> {
    let options = parse_options(options)?;
    serde_wasm_bindgen::to_value(&records(&options)).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the plugin version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn parse_options(value: JsValue) -> Result<ExtendAriaOptions, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(ExtendAriaOptions::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// A registration as handed back to JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct VariantRecord {
    kind: RegistrationKind,
    name: String,
    condition: String,
    /// Template without a modifier.
    selector: String,
}

impl From<Registration> for VariantRecord {
    fn from(registration: Registration) -> Self {
        let selector = registration.template(None);
        Self {
            kind: registration.kind,
            name: registration.name,
            condition: registration.condition,
            selector,
        }
    }
}

fn records(options: &ExtendAriaOptions) -> Vec<VariantRecord> {
    aria_variants::collect(options)
        .into_iter()
        .map(VariantRecord::from)
        .collect()
}

/// Forwards registrations to the host plugin callbacks.
struct HostRegistrar {
    add_variant: Function,
    match_variant: Function,
}

impl HostRegistrar {
    fn match_compound(&self, name: &str, selector: &CompoundSelector) -> Result<(), JsValue> {
        let marker = selector.relation().marker();
        let selector = selector.clone();
        // Ownership passes to the JS GC; the host may call it at any time
        let callback = Closure::<dyn Fn(JsValue, JsValue) -> String>::new(
            move |_value: JsValue, extra: JsValue| {
                let modifier = modifier_of(&extra);
                selector.template(modifier.as_deref())
            },
        );

        let values = Object::new();
        Reflect::set(&values, &name.into(), &name.into())?;
        let match_options = Object::new();
        Reflect::set(&match_options, &"values".into(), &values)?;

        self.match_variant.call3(
            &JsValue::NULL,
            &marker.into(),
            &callback.into_js_value(),
            &match_options,
        )?;
        Ok(())
    }
}

/// Read `extra.modifier`; an empty or missing modifier means none.
fn modifier_of(extra: &JsValue) -> Option<String> {
    if !extra.is_object() {
        return None;
    }
    Reflect::get(extra, &"modifier".into())
        .ok()
        .and_then(|m| m.as_string())
        .filter(|m| !m.is_empty())
}

impl Registrar for HostRegistrar {
    type Error = JsValue;

    fn add_variant(&mut self, name: &str, selector: &VariantSelector) -> Result<(), JsValue> {
        self.add_variant
            .call2(&JsValue::NULL, &name.into(), &selector.template().into())?;
        Ok(())
    }

    fn add_group_variant(
        &mut self,
        name: &str,
        selector: &CompoundSelector,
    ) -> Result<(), JsValue> {
        self.match_compound(name, selector)
    }

    fn add_peer_variant(
        &mut self,
        name: &str,
        selector: &CompoundSelector,
    ) -> Result<(), JsValue> {
        self.match_compound(name, selector)
    }
}
