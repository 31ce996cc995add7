//! Visit models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Patient;

/// A recorded visit. Insert-only; never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    /// Internal row id - None until stored
    pub id: Option<i64>,
    /// The referenced patient's id_number. Not checked against the
    /// patients table, so it may reference nobody.
    pub patient_id: String,
    /// Date of the visit
    pub visit_date: NaiveDate,
    /// Payment in whole currency units
    pub payment_amount: i64,
    /// Denormalized last name as entered by the caller; may diverge
    /// from the patient's actual name
    pub patient_last_name: String,
    /// Creation timestamp
    pub created_at: String,
}

impl Visit {
    /// Create a new visit with required fields.
    pub fn new(
        patient_id: String,
        visit_date: NaiveDate,
        payment_amount: i64,
        patient_last_name: String,
    ) -> Self {
        Self {
            id: None,
            patient_id,
            visit_date,
            payment_amount,
            patient_last_name,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// A visit joined with its patient for display. A plain row snapshot,
/// no behavior beyond convenience accessors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitRecord {
    pub visit: Visit,
    /// The patient the visit points at, if one exists
    pub patient: Option<Patient>,
}

impl VisitRecord {
    /// A visit whose patient_id matches no registered patient.
    pub fn is_orphaned(&self) -> bool {
        self.patient.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_visit() {
        let visit = Visit::new(
            "P001".into(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            150,
            "Doe".into(),
        );
        assert_eq!(visit.patient_id, "P001");
        assert_eq!(visit.payment_amount, 150);
        assert!(visit.id.is_none());
    }

    #[test]
    fn test_orphaned_record() {
        let visit = Visit::new(
            "P999".into(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            0,
            "Doe".into(),
        );
        let record = VisitRecord {
            visit,
            patient: None,
        };
        assert!(record.is_orphaned());
    }
}
