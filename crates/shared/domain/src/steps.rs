//! The fixed, ordered step table of the join form.

use crate::registration::Field;

/// One page of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub ordinal: usize,
    pub label: &'static str,
    pub description: &'static str,
    pub fields: &'static [Field],
}

impl StepDefinition {
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }
}

/// Every [`Field`] appears in exactly one step.
pub const STEPS: &[StepDefinition] = &[
    StepDefinition {
        ordinal: 0,
        label: "Identity",
        description: "Tell us who you are",
        fields: &[Field::FullName, Field::RollNumber],
    },
    StepDefinition {
        ordinal: 1,
        label: "Contact",
        description: "How can we reach you?",
        fields: &[Field::Email, Field::Phone],
    },
    StepDefinition {
        ordinal: 2,
        label: "Academics",
        description: "Where are you in your studies?",
        fields: &[Field::Department, Field::Year],
    },
    StepDefinition {
        ordinal: 3,
        label: "Motivation",
        description: "Why do you want to join?",
        fields: &[Field::Motivation],
    },
];

/// Index of the step that owns `field`.
#[must_use]
pub fn step_of(field: Field) -> Option<usize> {
    STEPS.iter().position(|step| step.contains(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn steps_cover_every_field_exactly_once() {
        for field in Field::iter() {
            let owners = STEPS.iter().filter(|step| step.contains(field)).count();
            assert_eq!(owners, 1, "{field} must belong to exactly one step");
        }
        let total: usize = STEPS.iter().map(|step| step.fields.len()).sum();
        assert_eq!(total, Field::iter().count());
    }

    #[test]
    fn ordinals_match_positions() {
        assert!(!STEPS.is_empty());
        for (index, step) in STEPS.iter().enumerate() {
            assert_eq!(step.ordinal, index);
        }
    }

    #[test]
    fn step_of_finds_owner() {
        assert_eq!(step_of(Field::FullName), Some(0));
        assert_eq!(step_of(Field::Phone), Some(1));
        assert_eq!(step_of(Field::Year), Some(2));
        assert_eq!(step_of(Field::Motivation), Some(STEPS.len() - 1));
    }
}
