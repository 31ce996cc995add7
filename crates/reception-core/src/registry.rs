//! Patient registry: the registration side of the reception desk.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::db::{Database, DbError, DbResult};
use crate::models::Patient;

/// Access layer for patient registration and lookup.
pub struct PatientRegistry<'a> {
    db: &'a Database,
}

impl<'a> PatientRegistry<'a> {
    /// Create a new registry over an open database.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Register a patient, or overwrite an existing registration with the
    /// same id_number in place (upsert). Returns the stored record.
    pub fn register_or_update(
        &self,
        id_number: &str,
        first_name: &str,
        last_name: &str,
        birth_date: NaiveDate,
    ) -> DbResult<Patient> {
        debug!(id_number, "registering patient");

        let patient = Patient::new(
            id_number.to_string(),
            first_name.to_string(),
            last_name.to_string(),
            birth_date,
        );
        self.db.upsert_patient(&patient)?;

        let stored = self
            .db
            .get_patient_by_id_number(id_number)?
            .ok_or_else(|| DbError::NotFound(format!("patient {id_number}")))?;

        info!(id_number, row_id = ?stored.id, "patient registered");
        Ok(stored)
    }

    /// Look up patients. id_number wins when both filters are supplied;
    /// with no filter, the result is empty, never an error.
    pub fn find(
        &self,
        id_number: Option<&str>,
        last_name: Option<&str>,
    ) -> DbResult<Vec<Patient>> {
        debug!(?id_number, ?last_name, "finding patients");

        if let Some(id_number) = id_number {
            return Ok(self
                .db
                .get_patient_by_id_number(id_number)?
                .into_iter()
                .collect());
        }
        if let Some(last_name) = last_name {
            return self.db.find_patients_by_last_name(last_name);
        }
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1985, 4, 12).unwrap()
    }

    #[test]
    fn test_register_then_find() {
        let db = setup_db();
        let registry = PatientRegistry::new(&db);

        registry
            .register_or_update("P001", "Jane", "Doe", birth_date())
            .unwrap();

        let found = registry.find(Some("P001"), None).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "Jane");
        assert_eq!(found[0].last_name, "Doe");
        assert_eq!(found[0].birth_date, birth_date());
    }

    #[test]
    fn test_reregister_updates_in_place() {
        let db = setup_db();
        let registry = PatientRegistry::new(&db);

        let first = registry
            .register_or_update("P001", "Jane", "Doe", birth_date())
            .unwrap();
        let second = registry
            .register_or_update("P001", "Jane", "Smith", birth_date())
            .unwrap();

        assert_eq!(second.last_name, "Smith");
        assert_eq!(second.id, first.id);

        let found = registry.find(Some("P001"), None).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_id_number_wins_over_last_name() {
        let db = setup_db();
        let registry = PatientRegistry::new(&db);

        registry
            .register_or_update("P001", "Jane", "Doe", birth_date())
            .unwrap();
        registry
            .register_or_update("P002", "Alice", "Brown", birth_date())
            .unwrap();

        // Both filters given: id_number is honored, last_name ignored
        let found = registry.find(Some("P001"), Some("Brown")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id_number, "P001");
    }

    #[test]
    fn test_no_filter_is_empty_not_error() {
        let db = setup_db();
        let registry = PatientRegistry::new(&db);

        registry
            .register_or_update("P001", "Jane", "Doe", birth_date())
            .unwrap();

        assert!(registry.find(None, None).unwrap().is_empty());
    }
}
