#![forbid(unsafe_code)]

//! Form fields, validation, and form markup.
//!
//! A [`Form`] owns a list of [`FormField`]s and one optional validator per
//! field. Validation produces [`ValidationError`]s that the caller keeps in a
//! [`FormState`] and hands back when rendering, so the form itself stays a
//! plain description of its fields.
//!
//! # Example
//!
//! ```
//! use folio_extras::forms::{Form, FormField, email_shape, required};
//!
//! let mut form = Form::new(vec![
//!     FormField::text("name", "Name").required(),
//!     FormField::email("email", "Email").required(),
//! ])
//! .validate(0, required("Name is required"))
//! .validate(1, email_shape("Enter a valid email address"));
//!
//! form.set_value("name", "Ada");
//! form.set_value("email", "not-an-email");
//! let errors = form.validate_all();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].name, "email");
//! ```

use std::fmt;

use folio_render::{Element, Node};
use folio_widgets::StatefulWidget;

const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-2";
const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent";
const INVALID_CLASS: &str = "border-red-500";
const ERROR_CLASS: &str = "mt-1 text-sm text-red-600";
const BUTTON_CLASS: &str = "w-full bg-blue-600 text-white py-3 px-6 rounded-lg font-semibold hover:bg-blue-700 transition-colors disabled:opacity-50";

/// How a field is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Single-line input with `type="email"`.
    Email,
    /// Multi-line input.
    TextArea { rows: u16 },
}

/// A single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
    pub placeholder: Option<String>,
    pub required: bool,
}

impl FormField {
    fn new(name: &'static str, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name,
            label: label.into(),
            kind,
            value: String::new(),
            placeholder: None,
            required: false,
        }
    }

    pub fn text(name: &'static str, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn email(name: &'static str, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn textarea(name: &'static str, label: impl Into<String>, rows: u16) -> Self {
        Self::new(name, label, FieldKind::TextArea { rows })
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    fn render(&self, error: Option<&ValidationError>) -> Node {
        let mut label_text = self.label.clone();
        if self.required {
            label_text.push_str(" *");
        }
        let label = Element::new("label")
            .attr("for", self.name)
            .class(LABEL_CLASS)
            .text(label_text);

        let class = if error.is_some() {
            format!("{INPUT_CLASS} {INVALID_CLASS}")
        } else {
            INPUT_CLASS.to_owned()
        };
        let mut input = match self.kind {
            FieldKind::Text | FieldKind::Email => {
                let ty = if self.kind == FieldKind::Email { "email" } else { "text" };
                Element::new("input")
                    .attr("type", ty)
                    .attr("id", self.name)
                    .attr("name", self.name)
                    .attr("value", self.value.clone())
            }
            FieldKind::TextArea { rows } => Element::new("textarea")
                .attr("id", self.name)
                .attr("name", self.name)
                .attr("rows", rows.to_string())
                .text(self.value.clone()),
        }
        .class(class);
        if let Some(placeholder) = &self.placeholder {
            input.set_attr("placeholder", placeholder.clone());
        }
        if self.required {
            input.set_attr("required", "");
        }

        let mut wrapper = Element::new("div").child(label);
        match error {
            Some(err) => {
                let error_id = format!("{}-error", self.name);
                input.set_attr("aria-invalid", "true");
                input.set_attr("aria-describedby", error_id.clone());
                wrapper.push(input);
                wrapper.push(
                    Element::new("p")
                        .id(error_id)
                        .class(ERROR_CLASS)
                        .text(err.message.clone()),
                );
            }
            None => wrapper.push(input),
        }
        wrapper.into()
    }
}

/// Collected field values, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub values: Vec<(&'static str, String)>,
}

impl FormData {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field index.
    pub field: usize,
    pub name: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Returns `Some(message)` when the field is invalid.
pub type ValidateFn = Box<dyn Fn(&FormField) -> Option<String> + Send + Sync>;

/// Fails when the trimmed value is empty.
pub fn required(message: impl Into<String>) -> ValidateFn {
    let message = message.into();
    Box::new(move |field| field.value.trim().is_empty().then(|| message.clone()))
}

/// Fails on empty values and on anything not shaped like `local@domain.tld`.
pub fn email_shape(message: impl Into<String>) -> ValidateFn {
    let message = message.into();
    Box::new(move |field| (!is_email_shaped(field.value.trim())).then(|| message.clone()))
}

/// Chain validators; the first failure wins.
pub fn all_of(validators: Vec<ValidateFn>) -> ValidateFn {
    Box::new(move |field| validators.iter().find_map(|v| v(field)))
}

/// `local@domain.tld` with no whitespace, one `@`, and non-empty labels.
pub fn is_email_shaped(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && host.split('.').all(|label| !label.is_empty())
}

/// Per-render state owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub errors: Vec<ValidationError>,
    /// A submission is in flight; the button is disabled.
    pub busy: bool,
}

impl FormState {
    pub fn error_for(&self, name: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.name == name)
    }

    /// Drop the error for one field, typically after it was edited.
    pub fn clear_error(&mut self, name: &str) {
        self.errors.retain(|e| e.name != name);
    }
}

/// A list of fields with optional validators.
pub struct Form {
    fields: Vec<FormField>,
    validators: Vec<Option<ValidateFn>>,
    action: Option<String>,
    submit_label: String,
    busy_label: String,
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("fields", &self.fields)
            .field(
                "validators",
                &self.validators.iter().filter(|v| v.is_some()).count(),
            )
            .field("action", &self.action)
            .finish()
    }
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        let validators = fields.iter().map(|_| None).collect();
        Self {
            fields,
            validators,
            action: None,
            submit_label: "Submit".to_owned(),
            busy_label: "Submitting...".to_owned(),
        }
    }

    /// Attach a validator to the field at `idx`. Out-of-range indices are ignored.
    #[must_use]
    pub fn validate(mut self, idx: usize, f: ValidateFn) -> Self {
        if let Some(slot) = self.validators.get_mut(idx) {
            *slot = Some(f);
        }
        self
    }

    /// Form `action` URL for hosts that post without script.
    #[must_use]
    pub fn action(mut self, url: impl Into<String>) -> Self {
        self.action = Some(url.into());
        self
    }

    pub fn action_url(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Button labels for the idle and busy states.
    #[must_use]
    pub fn submit_labels(mut self, idle: impl Into<String>, busy: impl Into<String>) -> Self {
        self.submit_label = idle.into();
        self.busy_label = busy.into();
        self
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, idx: usize) -> Option<&FormField> {
        self.fields.get(idx)
    }

    pub fn field_mut(&mut self, idx: usize) -> Option<&mut FormField> {
        self.fields.get_mut(idx)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Returns `false` when no field has that name.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Reset every value to empty.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    pub fn data(&self) -> FormData {
        FormData {
            values: self
                .fields
                .iter()
                .map(|f| (f.name, f.value.clone()))
                .collect(),
        }
    }

    /// Validate one field.
    pub fn validate_field(&self, idx: usize) -> Option<ValidationError> {
        let field = self.fields.get(idx)?;
        let validator = self.validators.get(idx)?.as_ref()?;
        validator(field).map(|message| ValidationError {
            field: idx,
            name: field.name,
            message,
        })
    }

    /// Validate every field, in field order.
    pub fn validate_all(&self) -> Vec<ValidationError> {
        (0..self.fields.len())
            .filter_map(|idx| self.validate_field(idx))
            .collect()
    }
}

impl StatefulWidget for Form {
    type State = FormState;

    fn render(&self, state: &FormState) -> Node {
        let mut form = Element::new("form")
            .class("space-y-6")
            .attr("method", "post")
            .attr("novalidate", "");
        if let Some(action) = &self.action {
            form.set_attr("action", action.clone());
        }
        for field in &self.fields {
            form.push(field.render(state.error_for(field.name)));
        }
        let mut button = Element::new("button")
            .attr("type", "submit")
            .class(BUTTON_CLASS);
        if state.busy {
            button.set_attr("disabled", "");
            button.push(Node::text(self.busy_label.clone()));
        } else {
            button.push(Node::text(self.submit_label.clone()));
        }
        form.push(button);
        form.into()
    }
}
