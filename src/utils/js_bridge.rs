//! Global entry point for server-rendered markup
//!
//! Pages that render their own delete buttons call
//! `onclick="showConfirmationModal({{ comment.id }})"`. Installing the bridge
//! routes those calls into the confirmation gate.

use std::fmt;

use anyhow::{anyhow, Result};
use wasm_bindgen::prelude::*;

use crate::services::confirmation_gate::page_gate;
use crate::stores::prompt_settings::load_settings;

pub const BRIDGE_FUNCTION: &str = "showConfirmationModal";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

/// Argument passed to the bridge from JS.
/// `Display` renders it the way `"delete-form-" + id` would in JS.
#[derive(Clone, Debug, PartialEq)]
enum JsArg {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
    Undefined,
    /// Objects, BigInts and the like, already rendered by JS `String()`
    Other(String),
}

impl JsArg {
    fn from_js(value: &JsValue) -> Self {
        if let Some(s) = value.as_string() {
            JsArg::Text(s)
        } else if let Some(n) = value.as_f64() {
            JsArg::Number(n)
        } else if let Some(b) = value.as_bool() {
            JsArg::Bool(b)
        } else if value.is_null() {
            JsArg::Null
        } else if value.is_undefined() {
            JsArg::Undefined
        } else {
            JsArg::Other(js_string(value))
        }
    }
}

impl fmt::Display for JsArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsArg::Text(s) | JsArg::Other(s) => f.write_str(s),
            JsArg::Number(n) => f.write_str(&js_number_to_string(*n)),
            JsArg::Bool(b) => write!(f, "{}", b),
            JsArg::Null => f.write_str("null"),
            JsArg::Undefined => f.write_str("undefined"),
        }
    }
}

/// `Number.prototype.toString()` for radix 10
fn js_number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n < 0.0 {
        return format!("-{}", js_number_to_string(-n));
    }

    // Shortest round-trip digits `s` and decimal exponent `point`, so n = 0.s * 10^point
    let sci = format!("{:e}", n);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let point = exp.parse::<i32>().unwrap_or(0) + 1;
    let k = digits.len() as i32;

    if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let e = point - 1;
        let sign = if e >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, e.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, e.abs())
        }
    }
}

/// Install `window.showConfirmationModal`
pub fn install_confirmation_bridge() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("No window"))?;

    let handler = Closure::<dyn Fn(JsValue)>::new(move |target_id: JsValue| {
        let target_id = JsArg::from_js(&target_id);
        // Settings are re-read per call; this runs outside the Dioxus runtime
        page_gate(load_settings()).spawn_confirm_deletion(target_id);
    });

    js_sys::Reflect::set(
        &window,
        &JsValue::from_str(BRIDGE_FUNCTION),
        handler.as_ref(),
    )
    .map_err(|e| anyhow!("Failed to install {}: {:?}", BRIDGE_FUNCTION, e))?;

    // Lives as long as the page
    handler.forget();
    log::info!("Installed window.{}", BRIDGE_FUNCTION);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::delete_form::delete_form_id;

    #[test]
    fn test_js_number_to_string() {
        assert_eq!(js_number_to_string(42.0), "42");
        assert_eq!(js_number_to_string(-3.0), "-3");
        assert_eq!(js_number_to_string(1.5), "1.5");
        assert_eq!(js_number_to_string(123456.789), "123456.789");
        assert_eq!(js_number_to_string(-0.0), "0");
        assert_eq!(js_number_to_string(0.000001), "0.000001");
        assert_eq!(js_number_to_string(1e-7), "1e-7");
        assert_eq!(js_number_to_string(1.5e-7), "1.5e-7");
        assert_eq!(js_number_to_string(1e20), "100000000000000000000");
        assert_eq!(js_number_to_string(1e21), "1e+21");
        assert_eq!(js_number_to_string(1.25e22), "1.25e+22");
    }

    #[test]
    fn test_non_finite_numbers() {
        assert_eq!(js_number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(js_number_to_string(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(js_number_to_string(f64::NAN), "NaN");
    }

    #[test]
    fn test_args_concatenate_like_js() {
        let form_id = |arg: JsArg| delete_form_id(arg);

        assert_eq!(form_id(JsArg::Text("42".to_string())), "delete-form-42");
        assert_eq!(form_id(JsArg::Number(42.0)), "delete-form-42");
        assert_eq!(form_id(JsArg::Number(f64::INFINITY)), "delete-form-Infinity");
        assert_eq!(form_id(JsArg::Number(1e21)), "delete-form-1e+21");
        assert_eq!(form_id(JsArg::Bool(true)), "delete-form-true");
        assert_eq!(form_id(JsArg::Null), "delete-form-null");
        assert_eq!(form_id(JsArg::Undefined), "delete-form-undefined");
        assert_eq!(form_id(JsArg::Other("10".to_string())), "delete-form-10");
    }
}
