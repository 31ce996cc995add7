//! Patient models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Internal row id - None until stored
    pub id: Option<i64>,
    /// External identifier handed out at the desk (unique)
    pub id_number: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Patient {
    /// Create a new patient with required fields.
    pub fn new(
        id_number: String,
        first_name: String,
        last_name: String,
        birth_date: NaiveDate,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: None,
            id_number,
            first_name,
            last_name,
            birth_date,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Check if this patient has been stored.
    pub fn is_stored(&self) -> bool {
        self.id.is_some()
    }

    /// Display name, "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_patient() {
        let patient = Patient::new(
            "P001".into(),
            "Jane".into(),
            "Doe".into(),
            NaiveDate::from_ymd_opt(1985, 4, 12).unwrap(),
        );
        assert_eq!(patient.id_number, "P001");
        assert!(!patient.is_stored());
        assert_eq!(patient.full_name(), "Jane Doe");
    }
}
