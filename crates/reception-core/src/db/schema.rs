//! SQLite schema definition.

/// Complete database schema for the reception desk.
///
/// `visits.patient_id` carries the patient's `id_number` and is deliberately
/// not a foreign key: a visit for an unregistered patient must still be
/// accepted and remain retrievable.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Patients
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    id INTEGER PRIMARY KEY,
    id_number TEXT NOT NULL UNIQUE,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    birth_date TEXT NOT NULL,                    -- ISO-8601 date
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_patients_last_name ON patients(last_name);

-- ============================================================================
-- Visits (insert-only)
-- ============================================================================

CREATE TABLE IF NOT EXISTS visits (
    id INTEGER PRIMARY KEY,
    patient_id TEXT NOT NULL,                    -- patients.id_number, unchecked
    visit_date TEXT NOT NULL,                    -- ISO-8601 date
    payment_amount INTEGER NOT NULL,
    patient_last_name TEXT NOT NULL,             -- denormalized, as entered
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_visits_patient ON visits(patient_id);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        // Re-applying must be a no-op, not an error
        conn.execute_batch(SCHEMA).unwrap();
    }

    #[test]
    fn test_id_number_unique() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute(
            "INSERT INTO patients (id_number, first_name, last_name, birth_date)
             VALUES ('P001', 'Jane', 'Doe', '1985-04-12')",
            [],
        )
        .unwrap();

        let result = conn.execute(
            "INSERT INTO patients (id_number, first_name, last_name, birth_date)
             VALUES ('P001', 'John', 'Smith', '1990-01-01')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_visit_accepts_unknown_patient() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        // No patients registered at all
        let result = conn.execute(
            "INSERT INTO visits (patient_id, visit_date, payment_amount, patient_last_name)
             VALUES ('P999', '2024-03-09', 100, 'Nobody')",
            [],
        );
        assert!(result.is_ok());
    }
}
