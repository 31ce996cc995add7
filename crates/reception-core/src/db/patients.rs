//! Patient database operations.

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};

use super::{Database, DbError, DbResult};
use crate::models::Patient;

/// Raw row before date parsing.
struct PatientRow {
    id: i64,
    id_number: String,
    first_name: String,
    last_name: String,
    birth_date: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<PatientRow> for Patient {
    type Error = DbError;

    fn try_from(row: PatientRow) -> Result<Self, Self::Error> {
        Ok(Patient {
            id: Some(row.id),
            id_number: row.id_number,
            first_name: row.first_name,
            last_name: row.last_name,
            birth_date: NaiveDate::parse_from_str(&row.birth_date, "%Y-%m-%d")?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const PATIENT_COLUMNS: &str =
    "id, id_number, first_name, last_name, birth_date, created_at, updated_at";

fn read_patient_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PatientRow> {
    Ok(PatientRow {
        id: row.get(0)?,
        id_number: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        birth_date: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

impl Database {
    /// Insert a patient, or overwrite the names and birth date in place when
    /// the id_number is already registered. Row id and created_at survive
    /// the update.
    pub fn upsert_patient(&self, patient: &Patient) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO patients (
                id_number, first_name, last_name, birth_date, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id_number) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                birth_date = excluded.birth_date,
                updated_at = datetime('now')
            "#,
            params![
                patient.id_number,
                patient.first_name,
                patient.last_name,
                patient.birth_date.to_string(),
                patient.created_at,
                patient.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Get a patient by id_number.
    pub fn get_patient_by_id_number(&self, id_number: &str) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {PATIENT_COLUMNS} FROM patients WHERE id_number = ?"
                ),
                [id_number],
                read_patient_row,
            )
            .optional()?
            .map(Patient::try_from)
            .transpose()
    }

    /// Find patients by exact last name, in registration order.
    pub fn find_patients_by_last_name(&self, last_name: &str) -> DbResult<Vec<Patient>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients WHERE last_name = ? ORDER BY id"
        ))?;

        let rows = stmt.query_map([last_name], read_patient_row)?;

        let mut patients = Vec::new();
        for row in rows {
            patients.push(row?.try_into()?);
        }
        Ok(patients)
    }
}
