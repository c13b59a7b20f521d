//! Form field validation.
//!
//! The free functions check a single value. [`Rules`] combines them for one
//! field and produces messages, [`Field`] and [`Form`] keep the results.
//! Format rules (email, URL, bounds, pattern) only apply to non-empty values;
//! use [`Rules::required`] to reject empty ones.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Result;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Whether `value` has any non-whitespace content.
pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Whether `value` looks like an email address.
pub fn email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Whether `value` parses as an absolute URL.
pub fn url(value: &str) -> bool {
    ::url::Url::parse(value).is_ok()
}

/// Whether `value` is a number within `min..=max`.
///
/// The whole value, ignoring surrounding whitespace, must parse as a number:
/// `"12abc"` is rejected rather than read as 12.
pub fn range(value: &str, min: f64, max: f64) -> bool {
    value
        .trim()
        .parse::<f64>()
        .is_ok_and(|n| n >= min && n <= max)
}

/// Whether `value` has between `min` and `max` characters.
///
/// Characters are Unicode scalar values, so `"😀"` counts as one where a
/// UTF-16 length would count two.
pub fn length(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// Whether `value` matches `regex`.
pub fn pattern(value: &str, regex: &Regex) -> bool {
    regex.is_match(value)
}

/// A single check a field can be subject to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The value must not be blank.
    Required,
    /// The value must be an email address.
    Email,
    /// The value must be a URL.
    Url,
    /// The value must be a number no less than a bound.
    Min,
    /// The value must be a number no greater than a bound.
    Max,
    /// The value must have at least a number of characters.
    MinLength,
    /// The value must have at most a number of characters.
    MaxLength,
    /// The value must match a regular expression.
    Pattern,
}

/// The set of rules applied to one field, with optional custom messages.
#[derive(Clone, Debug, Default)]
pub struct Rules {
    required: bool,
    email: bool,
    url: bool,
    min: Option<f64>,
    max: Option<f64>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
    messages: HashMap<Rule, String>,
}

impl Rules {
    /// No rules; every value passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject blank values.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Require an email address.
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Require a URL.
    pub fn url(mut self) -> Self {
        self.url = true;
        self
    }

    /// Require a number no less than `min`.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Require a number no greater than `max`.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Require at least `len` characters.
    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    /// Allow at most `len` characters.
    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    /// Require a match of the regular expression `pattern`.
    pub fn pattern(mut self, pattern: &str) -> Result<Self> {
        self.pattern = Some(Regex::new(pattern)?);
        Ok(self)
    }

    /// Replace the default message reported when `rule` fails.
    pub fn message(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.messages.insert(rule, message.into());
        self
    }

    fn report(&self, errors: &mut Vec<String>, rule: Rule, default: impl FnOnce() -> String) {
        errors.push(
            self.messages
                .get(&rule)
                .cloned()
                .unwrap_or_else(default),
        );
    }

    /// Check `value` and return a message for every failed rule, in a fixed
    /// order: required, email, URL, min, max, min length, max length, pattern.
    pub fn check(&self, value: &str) -> Vec<String> {
        let mut errors = Vec::new();
        let present = !value.is_empty();

        if self.required && !required(value) {
            self.report(&mut errors, Rule::Required, || {
                "This field is required".to_owned()
            });
        }

        if self.email && present && !email(value) {
            self.report(&mut errors, Rule::Email, || {
                "Please enter a valid email address".to_owned()
            });
        }

        if self.url && present && !url(value) {
            self.report(&mut errors, Rule::Url, || "Please enter a valid URL".to_owned());
        }

        if let Some(min) = self.min {
            if present && !range(value, min, f64::INFINITY) {
                self.report(&mut errors, Rule::Min, || {
                    format!("Please enter a value no less than {min}")
                });
            }
        }

        if let Some(max) = self.max {
            if present && !range(value, f64::NEG_INFINITY, max) {
                self.report(&mut errors, Rule::Max, || {
                    format!("Please enter a value no greater than {max}")
                });
            }
        }

        if let Some(min) = self.min_length {
            if !length(value, min, usize::MAX) {
                self.report(&mut errors, Rule::MinLength, || {
                    format!("At least {min} characters required")
                });
            }
        }

        if let Some(max) = self.max_length {
            if !length(value, 0, max) {
                self.report(&mut errors, Rule::MaxLength, || {
                    format!("At most {max} characters allowed")
                });
            }
        }

        if let Some(regex) = &self.pattern {
            if present && !pattern(value, regex) {
                self.report(&mut errors, Rule::Pattern, || "Invalid format".to_owned());
            }
        }

        errors
    }
}

/// How a field should be presented after validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not validated yet, or valid but empty.
    #[default]
    Neutral,
    /// Valid and filled in.
    Valid,
    /// At least one rule failed.
    Invalid,
}

/// A named input with its current value and the outcome of its last check.
#[derive(Clone, Debug)]
pub struct Field {
    name: String,
    value: String,
    rules: Rules,
    errors: Vec<String>,
    status: FieldStatus,
}

impl Field {
    /// Create an empty field.
    pub fn new(name: impl Into<String>, rules: Rules) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            rules,
            errors: Vec::new(),
            status: FieldStatus::Neutral,
        }
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the current value. The previous outcome is kept until the next
    /// call to [`Field::validate`].
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Check the current value and remember the outcome.
    pub fn validate(&mut self) -> bool {
        self.errors = self.rules.check(&self.value);
        self.status = if !self.errors.is_empty() {
            FieldStatus::Invalid
        } else if self.value.is_empty() {
            FieldStatus::Neutral
        } else {
            FieldStatus::Valid
        };
        self.errors.is_empty()
    }

    /// Whether the last check passed. Unchecked fields are valid.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The messages from the last check.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// The message shown next to the field, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    /// How the field should be presented.
    pub fn status(&self) -> FieldStatus {
        self.status
    }

    /// Clear the value and the outcome of the last check.
    pub fn reset(&mut self) {
        self.value.clear();
        self.errors.clear();
        self.status = FieldStatus::Neutral;
    }
}

/// A group of fields validated together.
#[derive(Clone, Debug, Default)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    /// Create a form without fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// The fields in the order they were added.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The field called `name`.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The field called `name`, for updating its value.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Check every field, without stopping at the first failure.
    pub fn validate_all(&mut self) -> bool {
        self.fields
            .iter_mut()
            .fold(true, |valid, field| field.validate() && valid)
    }

    /// The first field whose last check failed.
    pub fn first_invalid(&self) -> Option<&Field> {
        self.fields.iter().find(|f| !f.is_valid())
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(Field::reset);
    }
}
