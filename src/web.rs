//! JavaScript bindings for the container.
//!
//! On the JS side both `null` and `undefined` mean "no value", so
//! [`classify`] treats them alike. Callbacks that throw propagate the thrown
//! value back to the JS caller.

use wasm_bindgen::prelude::*;
use js_sys::{Function, Reflect, TypeError};
use crate::maybe::{Absent, Maybe, Present};
use crate::classify_value;

#[wasm_bindgen(js_name = Maybe)]
#[derive(Debug, Clone)]
pub struct JsMaybe {
    inner: Maybe<JsValue>,
}

impl From<Maybe<JsValue>> for JsMaybe {
    fn from(inner: Maybe<JsValue>) -> Self {
        Self { inner }
    }
}

impl From<JsMaybe> for Maybe<JsValue> {
    fn from(value: JsMaybe) -> Self {
        value.inner
    }
}

#[wasm_bindgen(js_class = Maybe)]
impl JsMaybe {
    /// Wraps `value` as present, even when it is `null` or `undefined`.
    pub fn present(value: JsValue) -> JsMaybe {
        Present(value).into()
    }

    pub fn absent() -> JsMaybe {
        Maybe::<JsValue>::Absent.into()
    }

    #[wasm_bindgen(getter, js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The stored value, `undefined` when absent.
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> JsValue {
        match &self.inner {
            Present(value) => value.clone(),
            Absent => JsValue::UNDEFINED,
        }
    }

    pub fn map(&self, f: &Function) -> Result<JsMaybe, JsValue> {
        let inner = self
            .inner
            .clone()
            .try_map(|value| f.call1(&JsValue::UNDEFINED, &value))?;
        Ok(inner.into())
    }

    #[wasm_bindgen(js_name = flatMap)]
    pub fn flat_map(&self, f: &Function) -> Result<JsMaybe, JsValue> {
        let inner = self.inner.clone().try_flat_map(|value| {
            let result = f.call1(&JsValue::UNDEFINED, &value)?;
            read_container(&result)
        })?;
        Ok(inner.into())
    }

    /// Returns the stored value, or `default` when absent or when the stored
    /// value is itself `null` or `undefined`.
    #[wasm_bindgen(js_name = getOrElse)]
    pub fn get_or_else(&self, default: JsValue) -> JsValue {
        self.inner.clone().get_or_else(default)
    }

    #[wasm_bindgen(js_name = forEach)]
    pub fn for_each(&self, f: &Function) -> Result<(), JsValue> {
        self.inner
            .try_for_each(|value| f.call1(&JsValue::UNDEFINED, value).map(|_| ()))
    }
}

// Reads a container returned from a `flatMap` callback without taking it
// over, so the callback may hand back an instance it keeps using. Any object
// with a boolean `isEmpty` (and a `value` when not empty) is accepted.
fn read_container(result: &JsValue) -> Result<Maybe<JsValue>, JsValue> {
    let not_a_container = || -> JsValue {
        TypeError::new("flatMap callback must return a Maybe").into()
    };
    if !result.is_object() {
        return Err(not_a_container());
    }
    let value_key = JsValue::from_str("value");
    match Reflect::get(result, &JsValue::from_str("isEmpty"))?.as_bool() {
        Some(true) => Ok(Absent),
        Some(false) if Reflect::has(result, &value_key)? => {
            Ok(Present(Reflect::get(result, &value_key)?))
        }
        _ => Err(not_a_container()),
    }
}

/// Classifies a JS value: `null` and `undefined` become absent, everything
/// else (including `0`, `""` and `false`) present.
#[wasm_bindgen]
pub fn classify(value: JsValue) -> JsMaybe {
    classify_value(value).into()
}

// Initialize the web module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook so panics inside callbacks reach the browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
