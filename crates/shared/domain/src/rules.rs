//! The canonical constraint table.
//!
//! Client and server validation are both evaluated from [`FIELD_RULES`]; there is no
//! second copy of these limits anywhere in the workspace.

use crate::registration::Field;

/// Closed option sets a select field must come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSet {
    Department,
    Year,
}

/// A single constraint on a field's raw text. Lengths count Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Inclusive length bounds.
    Length { min: usize, max: Option<usize> },
    /// Only ASCII letters and digits, case-insensitive.
    Alphanumeric,
    /// `local@domain.tld` with no whitespace.
    EmailShape,
    /// Value must parse into one of the option set's wire values.
    OneOf(OptionSet),
}

/// A rule together with the message shown when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub rule: FieldRule,
    pub message: &'static str,
}

const fn at_least(min: usize, message: &'static str) -> Constraint {
    Constraint { rule: FieldRule::Length { min, max: None }, message }
}

const fn at_most(max: usize, message: &'static str) -> Constraint {
    Constraint { rule: FieldRule::Length { min: 0, max: Some(max) }, message }
}

/// Ordered constraints per field; the first failing one wins.
pub const FIELD_RULES: &[(Field, &[Constraint])] = &[
    (
        Field::FullName,
        &[
            at_least(2, "Full name must be at least 2 characters"),
            at_most(100, "Full name must be at most 100 characters"),
        ],
    ),
    (
        Field::RollNumber,
        &[
            at_least(10, "Roll number must be at least 10 characters"),
            Constraint {
                rule: FieldRule::Alphanumeric,
                message: "Roll number must contain only letters and numbers",
            },
        ],
    ),
    (
        Field::Email,
        &[Constraint { rule: FieldRule::EmailShape, message: "Please enter a valid email address" }],
    ),
    (Field::Phone, &[at_least(10, "Phone number must be at least 10 characters")]),
    (
        Field::Department,
        &[Constraint {
            rule: FieldRule::OneOf(OptionSet::Department),
            message: "Please select a valid department",
        }],
    ),
    (
        Field::Year,
        &[Constraint { rule: FieldRule::OneOf(OptionSet::Year), message: "Please select a valid year" }],
    ),
    (
        Field::Motivation,
        &[
            at_least(20, "Motivation must be at least 20 characters"),
            at_most(500, "Motivation must be at most 500 characters"),
        ],
    ),
];

/// Constraints registered for `field`, empty if none.
#[must_use]
pub fn constraints_for(field: Field) -> &'static [Constraint] {
    FIELD_RULES
        .iter()
        .find_map(|(f, constraints)| (*f == field).then_some(*constraints))
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_field_is_constrained_once() {
        for field in Field::iter() {
            let entries = FIELD_RULES.iter().filter(|(f, _)| *f == field).count();
            assert_eq!(entries, 1, "{field} must have exactly one rule entry");
            assert!(!constraints_for(field).is_empty());
        }
    }

    #[test]
    fn motivation_bounds_are_twenty_to_five_hundred() {
        let bounds: Vec<_> = constraints_for(Field::Motivation)
            .iter()
            .map(|c| c.rule)
            .collect();
        assert_eq!(
            bounds,
            vec![
                FieldRule::Length { min: 20, max: None },
                FieldRule::Length { min: 0, max: Some(500) },
            ]
        );
    }
}
