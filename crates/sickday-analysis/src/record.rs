//! Source records consumed by the grouping step.
//!
//! Records are read-only input: the engine never modifies or stores them. Column
//! names are accepted in English and in the Russian headers used by the
//! original sick-leave spreadsheets:
//!
//! | Field       | Headers                                    |
//! |-------------|--------------------------------------------|
//! | `sick_days` | `sick_days`, `Количество больничных дней`  |
//! | `sex`       | `sex`, `Пол`                               |
//! | `age`       | `age`, `Возраст`                           |
//!
//! Extra columns are ignored.

use serde::Deserialize;

/// One row of source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Record {
    /// Number of sick days taken.
    #[serde(alias = "Количество больничных дней")]
    pub sick_days: u32,
    /// Sex of the employee.
    #[serde(alias = "Пол")]
    pub sex: Sex,
    /// Age in years.
    #[serde(alias = "Возраст")]
    pub age: u32,
}

impl Record {
    #[must_use]
    pub fn new(sick_days: u32, sex: Sex, age: u32) -> Self {
        Self {
            sick_days,
            sex,
            age,
        }
    }
}

/// The two admissible values of the sex column.
///
/// Both Latin (`M`/`F`) and Cyrillic (`М`/`Ж`) codes are accepted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, derive_more::Display, derive_more::IsVariant,
)]
pub enum Sex {
    #[serde(
        rename = "M",
        alias = "m",
        alias = "М",
        alias = "м",
        alias = "male",
        alias = "Male"
    )]
    #[display("M")]
    Male,
    #[serde(
        rename = "F",
        alias = "f",
        alias = "Ж",
        alias = "ж",
        alias = "female",
        alias = "Female"
    )]
    #[display("F")]
    Female,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_english_fields() {
        let record: Record =
            serde_json::from_str(r#"{"sick_days": 4, "sex": "F", "age": 31}"#).unwrap();
        assert_eq!(record, Record::new(4, Sex::Female, 31));
    }

    #[test]
    fn test_deserialize_russian_fields() {
        let record: Record = serde_json::from_str(
            r#"{"Количество больничных дней": 7, "Пол": "М", "Возраст": 45}"#,
        )
        .unwrap();
        assert_eq!(record, Record::new(7, Sex::Male, 45));
    }

    #[test]
    fn test_cyrillic_female_code() {
        let sex: Sex = serde_json::from_str(r#""Ж""#).unwrap();
        assert!(sex.is_female());
    }

    #[test]
    fn test_unknown_sex_code_is_rejected() {
        assert!(serde_json::from_str::<Sex>(r#""X""#).is_err());
    }
}
