use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Every input the join form collects.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    FullName,
    RollNumber,
    Email,
    Phone,
    Department,
    Year,
    Motivation,
}

impl Field {
    /// camelCase name used on the wire and in error payloads.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::RollNumber => "Roll number",
            Self::Email => "Email",
            Self::Phone => "Phone number",
            Self::Department => "Department",
            Self::Year => "Year",
            Self::Motivation => "Motivation",
        }
    }
}

/// Departments a member can belong to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Department {
    #[serde(rename = "CSE")]
    #[strum(serialize = "CSE")]
    ComputerScience,
    #[serde(rename = "IT")]
    #[strum(serialize = "IT")]
    InformationTechnology,
    #[serde(rename = "ECE")]
    #[strum(serialize = "ECE")]
    ElectronicsCommunication,
    #[serde(rename = "EEE")]
    #[strum(serialize = "EEE")]
    ElectricalElectronics,
    #[serde(rename = "ME")]
    #[strum(serialize = "ME")]
    Mechanical,
    #[serde(rename = "CE")]
    #[strum(serialize = "CE")]
    Civil,
    #[serde(rename = "OTHER")]
    #[strum(serialize = "OTHER")]
    Other,
}

/// Display labels for the department picker, in presentation order.
pub const DEPARTMENT_LABELS: &[(Department, &str)] = &[
    (Department::ComputerScience, "Computer Science & Engineering"),
    (Department::InformationTechnology, "Information Technology"),
    (Department::ElectronicsCommunication, "Electronics & Communication"),
    (Department::ElectricalElectronics, "Electrical & Electronics"),
    (Department::Mechanical, "Mechanical"),
    (Department::Civil, "Civil"),
    (Department::Other, "Other"),
];

impl Department {
    #[must_use]
    pub fn wire_value(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        DEPARTMENT_LABELS
            .iter()
            .find_map(|(department, label)| (*department == self).then_some(*label))
            .unwrap_or("Other")
    }

    /// `(wire value, label)` pairs for a select input.
    pub fn options() -> impl Iterator<Item = (&'static str, &'static str)> {
        Self::iter().map(|d| (d.wire_value(), d.label()))
    }
}

/// Year of study.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Year {
    #[serde(rename = "1st")]
    #[strum(serialize = "1st")]
    First,
    #[serde(rename = "2nd")]
    #[strum(serialize = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    #[strum(serialize = "3rd")]
    Third,
    #[serde(rename = "4th")]
    #[strum(serialize = "4th")]
    Fourth,
}

pub const YEAR_LABELS: &[(Year, &str)] = &[
    (Year::First, "First Year"),
    (Year::Second, "Second Year"),
    (Year::Third, "Third Year"),
    (Year::Fourth, "Fourth Year"),
];

impl Year {
    #[must_use]
    pub fn wire_value(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        YEAR_LABELS
            .iter()
            .find_map(|(year, label)| (*year == self).then_some(*label))
            .unwrap_or("Year")
    }

    pub fn options() -> impl Iterator<Item = (&'static str, &'static str)> {
        Self::iter().map(|y| (y.wire_value(), y.label()))
    }
}

/// The in-progress form data, exactly as typed.
///
/// Select inputs are kept as their raw wire strings; they only become
/// [`Department`]/[`Year`] once validated into a [`Registration`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub full_name: String,
    pub roll_number: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub year: String,
    pub motivation: String,
}

impl RegistrationDraft {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::RollNumber => &self.roll_number,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Department => &self.department,
            Field::Year => &self.year,
            Field::Motivation => &self.motivation,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::RollNumber => &mut self.roll_number,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Department => &mut self.department,
            Field::Year => &mut self.year,
            Field::Motivation => &mut self.motivation,
        };
        *slot = value.into();
    }

    /// True when nothing has been typed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::iter().all(|field| self.get(field).is_empty())
    }
}

/// A draft that passed validation; the authority-of-record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: String,
    pub roll_number: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
    pub year: Year,
    pub motivation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn field_wire_names_are_camel_case() {
        assert_eq!(Field::FullName.wire_name(), "fullName");
        assert_eq!(Field::RollNumber.wire_name(), "rollNumber");
        assert_eq!(Field::from_str("motivation"), Ok(Field::Motivation));
    }

    #[test]
    fn every_department_has_a_label() {
        assert_eq!(DEPARTMENT_LABELS.len(), Department::iter().count());
        for department in Department::iter() {
            assert!(DEPARTMENT_LABELS.iter().any(|(d, _)| *d == department));
        }
        assert_eq!(Department::from_str("ECE"), Ok(Department::ElectronicsCommunication));
        assert!(Department::from_str("ece").is_err());
    }

    #[test]
    fn years_round_trip_their_wire_value() {
        for year in Year::iter() {
            assert_eq!(Year::from_str(year.wire_value()), Ok(year));
        }
        assert!(Year::from_str("5th").is_err());
    }

    #[test]
    fn draft_get_and_set_address_the_same_slot() {
        let mut draft = RegistrationDraft::default();
        assert!(draft.is_empty());

        for field in Field::iter() {
            draft.set(field, field.wire_name());
        }
        for field in Field::iter() {
            assert_eq!(draft.get(field), field.wire_name());
        }
        assert!(!draft.is_empty());
    }
}
