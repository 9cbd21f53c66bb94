//! Deletion form lookup
//!
//! The renderer and the confirmation gate both derive the hidden form's DOM id
//! from [`delete_form_id`], so the two sides cannot drift apart.

use std::fmt::Display;

use crate::services::errors::GateError;

/// Prefix of every hidden comment deletion form id
pub const DELETE_FORM_PREFIX: &str = "delete-form-";

/// DOM id of the deletion form for a comment
pub fn delete_form_id(target_id: impl Display) -> String {
    format!("{}{}", DELETE_FORM_PREFIX, target_id)
}

/// Something whose native submission can be triggered
pub trait Submittable {
    fn submit(&self) -> Result<(), GateError>;
}

/// Resolves a form key to a submittable element
pub trait FormLookup {
    fn find_submittable(&self, key: &str) -> Option<Box<dyn Submittable>>;
}

/// Looks forms up in the current document
#[derive(Clone, Copy, Debug, Default)]
pub struct DomFormLookup;

struct DomForm {
    id: String,
    form: web_sys::HtmlFormElement,
}

impl Submittable for DomForm {
    fn submit(&self) -> Result<(), GateError> {
        self.form.submit().map_err(|e| GateError::Submit {
            form_id: self.id.clone(),
            reason: format!("{:?}", e),
        })
    }
}

impl FormLookup for DomFormLookup {
    fn find_submittable(&self, key: &str) -> Option<Box<dyn Submittable>> {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()?.document()?.get_element_by_id(key)?;
        match element.dyn_into::<web_sys::HtmlFormElement>() {
            Ok(form) => Some(Box::new(DomForm { id: key.to_string(), form })),
            Err(other) => {
                let tag = other.tag_name().to_lowercase();
                log::warn!("Element '{}' is a <{}>, not a form", key, tag);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_form_id() {
        assert_eq!(delete_form_id(42), "delete-form-42");
        assert_eq!(delete_form_id("42"), "delete-form-42");
        assert_eq!(delete_form_id(""), DELETE_FORM_PREFIX);
    }

    #[test]
    fn test_id_is_not_validated() {
        assert_eq!(delete_form_id("a b/c"), "delete-form-a b/c");
    }
}
