//! Membership and newsletter form validation.
//!
//! Both forms are handled entirely client-side: submission is always
//! prevented by the host, and a passing form is acknowledged with a success
//! toast and reset. The membership form marks offending fields with
//! `is-invalid`; the newsletter form reports a bad address with an error
//! toast and keeps what the visitor typed.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::rc::Rc;

use garden::validate::{is_filled, is_valid_email};

use crate::dom::Dom;
use crate::toast::Notifier;

pub const MEMBERSHIP_FORM_ID: &str = "membershipForm";
pub const NEWSLETTER_FORM_SELECTOR: &str = ".newsletter-form";
/// Membership fields validated on blur.
pub const FIELD_SELECTOR: &str = "#membershipForm .form-control, #membershipForm .form-select";

pub const MEMBERSHIP_THANKS: &str = "Thank you for joining Green Haven! We'll send you a confirmation email shortly.";
pub const NEWSLETTER_THANKS: &str = "Thank you for subscribing to our newsletter!";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

const INVALID_CLASS: &str = "is-invalid";
const REQUIRED_SELECTOR: &str = "[required]";
const EMAIL_INPUT_SELECTOR: &str = "input[type=\"email\"]";

pub struct FormGuard<D: Dom> {
    dom: Rc<D>,
    notifier: Rc<Notifier<D>>,
}

impl<D: Dom + 'static> FormGuard<D> {
    #[must_use]
    pub fn new(dom: Rc<D>, notifier: Rc<Notifier<D>>) -> Self {
        Self { dom, notifier }
    }

    /// Check one field and update its marker. Fields without `required`
    /// always pass.
    pub fn validate_field(&self, field: &D::Node) -> bool {
        let required = self.dom.has_attribute(field, "required");
        let filled = self.dom.value(field).is_some_and(|v| is_filled(&v));
        if required && !filled {
            self.dom.add_class(field, INVALID_CLASS);
            false
        } else {
            self.dom.remove_class(field, INVALID_CLASS);
            true
        }
    }

    /// Validate every required field of the membership form. Returns whether
    /// the form was accepted.
    pub fn submit_membership(&self, form: &D::Node) -> bool {
        let mut valid = true;
        for field in self.dom.query_within(form, REQUIRED_SELECTOR) {
            if !self.validate_field(&field) {
                valid = false;
            }
        }
        if !valid {
            log::debug!("membership form has empty required fields");
            return false;
        }
        self.notifier.success(MEMBERSHIP_THANKS);
        self.dom.reset_form(form);
        true
    }

    /// Check a newsletter form's email input. A form with no email input is
    /// rejected.
    pub fn submit_newsletter(&self, form: &D::Node) -> bool {
        let address = self
            .dom
            .query_within(form, EMAIL_INPUT_SELECTOR)
            .first()
            .and_then(|input| self.dom.value(input));
        match address {
            Some(address) if is_valid_email(&address) => {
                self.notifier.success(NEWSLETTER_THANKS);
                self.dom.reset_form(form);
                true
            }
            _ => {
                self.notifier.error(INVALID_EMAIL);
                false
            }
        }
    }
}
