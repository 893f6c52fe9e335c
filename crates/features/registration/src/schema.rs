//! Field validation, evaluated from the shared constraint table.
//!
//! The join form and the proxy endpoint both call into this module, so a value
//! accepted on one side is accepted on the other.

use recruit_domain::registration::{Department, Field, Registration, RegistrationDraft, Year};
use recruit_domain::rules::{Constraint, FieldRule, OptionSet, constraints_for};
use recruit_domain::steps::STEPS;
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::str::FromStr;
use std::sync::LazyLock;
use strum::IntoEnumIterator;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A failed constraint on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: Field,
    pub message: Cow<'static, str>,
}

impl ValidationError {
    #[must_use]
    pub const fn new(field: Field, message: &'static str) -> Self {
        Self { field, message: Cow::Borrowed(message) }
    }

    /// The error reported when a field is absent from a submission.
    #[must_use]
    pub fn missing(field: Field) -> Self {
        Self { field, message: Cow::Owned(format!("{} is required", field.label())) }
    }

    /// The error reported when a submitted field is present but not a string.
    #[must_use]
    pub fn not_text(field: Field) -> Self {
        Self { field, message: Cow::Owned(format!("{} must be text", field.label())) }
    }
}

/// Checks one raw value against its field's constraints.
///
/// # Errors
/// Returns the message of the first constraint that fails.
pub fn validate_value(field: Field, value: &str) -> Result<(), ValidationError> {
    match constraints_for(field).iter().find(|constraint| !satisfies(constraint, value)) {
        Some(failed) => Err(ValidationError::new(field, failed.message)),
        None => Ok(()),
    }
}

/// Validates the given fields of `draft`, in order, one error per failing field.
#[must_use]
pub fn validate_fields(draft: &RegistrationDraft, fields: &[Field]) -> Vec<ValidationError> {
    fields
        .iter()
        .filter_map(|field| validate_value(*field, draft.get(*field)).err())
        .collect()
}

/// Validates the fields owned by step `index`. An out-of-range index has no fields.
#[must_use]
pub fn validate_step(draft: &RegistrationDraft, index: usize) -> Vec<ValidationError> {
    STEPS.get(index).map(|step| validate_fields(draft, step.fields)).unwrap_or_default()
}

/// Validates every field and converts the draft into a [`Registration`].
///
/// # Errors
/// Returns every failing field, in step order.
pub fn validate_draft(draft: &RegistrationDraft) -> Result<Registration, Vec<ValidationError>> {
    let fields: Vec<Field> = STEPS.iter().flat_map(|step| step.fields.iter().copied()).collect();
    let errors = validate_fields(draft, &fields);
    if !errors.is_empty() {
        return Err(errors);
    }

    let department = Department::from_str(&draft.department)
        .map_err(|_| validate_fields(draft, &[Field::Department]))?;
    let year = Year::from_str(&draft.year).map_err(|_| validate_fields(draft, &[Field::Year]))?;

    Ok(Registration {
        full_name: draft.full_name.clone(),
        roll_number: draft.roll_number.clone(),
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        department,
        year,
        motivation: draft.motivation.clone(),
    })
}

/// Validates a draft whose fields may be absent.
///
/// Absent fields report `"<Label> is required"`; present ones go through the usual
/// constraints.
///
/// # Errors
/// Returns every failing or missing field, in declaration order.
pub fn validate_partial<'a>(
    lookup: impl Fn(Field) -> Option<&'a str>,
) -> Result<Registration, Vec<ValidationError>> {
    validate_submitted(|field| Ok(lookup(field)))
}

/// Like [`validate_partial`], but `lookup` may reject a field outright, e.g. because
/// the submitted value had the wrong type. A rejected field reports that error and
/// skips its constraints.
///
/// # Errors
/// Returns every rejected, failing or missing field, in declaration order.
pub fn validate_submitted<'a>(
    lookup: impl Fn(Field) -> Result<Option<&'a str>, ValidationError>,
) -> Result<Registration, Vec<ValidationError>> {
    let mut draft = RegistrationDraft::default();
    let mut errors = Vec::new();

    for field in Field::iter() {
        match lookup(field) {
            Ok(Some(value)) => {
                if let Err(err) = validate_value(field, value) {
                    errors.push(err);
                }
                draft.set(field, value);
            },
            Ok(None) => errors.push(ValidationError::missing(field)),
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() { validate_draft(&draft) } else { Err(errors) }
}

fn satisfies(constraint: &Constraint, value: &str) -> bool {
    match constraint.rule {
        FieldRule::Length { min, max } => {
            let len = value.chars().count();
            len >= min && max.is_none_or(|max| len <= max)
        },
        FieldRule::Alphanumeric => value.chars().all(|c| c.is_ascii_alphanumeric()),
        FieldRule::EmailShape => EMAIL.is_match(value),
        FieldRule::OneOf(OptionSet::Department) => Department::from_str(value).is_ok(),
        FieldRule::OneOf(OptionSet::Year) => Year::from_str(value).is_ok(),
    }
}
