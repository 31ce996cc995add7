//! Visit database operations.
//!
//! Lookups are eagerly joined with the referenced patient so callers get
//! display-ready records in one call.

use chrono::NaiveDate;
use rusqlite::params;

use super::{Database, DbError, DbResult};
use crate::models::{Patient, Visit, VisitRecord};

/// Raw joined row before date parsing. Patient columns are NULL when the
/// visit's patient_id matches no registered patient.
struct VisitJoinRow {
    id: i64,
    patient_id: String,
    visit_date: String,
    payment_amount: i64,
    patient_last_name: String,
    created_at: String,
    patient: Option<JoinedPatient>,
}

struct JoinedPatient {
    id: i64,
    id_number: String,
    first_name: String,
    last_name: String,
    birth_date: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<VisitJoinRow> for VisitRecord {
    type Error = DbError;

    fn try_from(row: VisitJoinRow) -> Result<Self, Self::Error> {
        let patient = row
            .patient
            .map(|p| {
                Ok::<_, DbError>(Patient {
                    id: Some(p.id),
                    id_number: p.id_number,
                    first_name: p.first_name,
                    last_name: p.last_name,
                    birth_date: NaiveDate::parse_from_str(&p.birth_date, "%Y-%m-%d")?,
                    created_at: p.created_at,
                    updated_at: p.updated_at,
                })
            })
            .transpose()?;

        Ok(VisitRecord {
            visit: Visit {
                id: Some(row.id),
                patient_id: row.patient_id,
                visit_date: NaiveDate::parse_from_str(&row.visit_date, "%Y-%m-%d")?,
                payment_amount: row.payment_amount,
                patient_last_name: row.patient_last_name,
                created_at: row.created_at,
            },
            patient,
        })
    }
}

const VISIT_JOIN_COLUMNS: &str = "v.id, v.patient_id, v.visit_date, v.payment_amount, \
     v.patient_last_name, v.created_at, \
     p.id, p.id_number, p.first_name, p.last_name, p.birth_date, \
     p.created_at, p.updated_at";

fn read_visit_join_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<VisitJoinRow> {
    let patient = match row.get::<_, Option<i64>>(6)? {
        Some(id) => Some(JoinedPatient {
            id,
            id_number: row.get(7)?,
            first_name: row.get(8)?,
            last_name: row.get(9)?,
            birth_date: row.get(10)?,
            created_at: row.get(11)?,
            updated_at: row.get(12)?,
        }),
        None => None,
    };

    Ok(VisitJoinRow {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        visit_date: row.get(2)?,
        payment_amount: row.get(3)?,
        patient_last_name: row.get(4)?,
        created_at: row.get(5)?,
        patient,
    })
}

impl Database {
    /// Insert a new visit. Unconditional: no check that patient_id matches
    /// a registered patient. Returns the assigned row id.
    pub fn insert_visit(&self, visit: &Visit) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO visits (
                patient_id, visit_date, payment_amount, patient_last_name, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                visit.patient_id,
                visit.visit_date.to_string(),
                visit.payment_amount,
                visit.patient_last_name,
                visit.created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Find visits by patient_id, joined with the patient, in insertion order.
    pub fn find_visits_by_patient_id(&self, patient_id: &str) -> DbResult<Vec<VisitRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            r#"
            SELECT {VISIT_JOIN_COLUMNS}
            FROM visits v
            LEFT JOIN patients p ON p.id_number = v.patient_id
            WHERE v.patient_id = ?
            ORDER BY v.id
            "#
        ))?;

        let rows = stmt.query_map([patient_id], read_visit_join_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?.try_into()?);
        }
        Ok(records)
    }

    /// Find visits whose linked patient has the given last name, in insertion
    /// order. Filters on the patient's actual name, not the denormalized copy,
    /// so orphaned visits never match.
    pub fn find_visits_by_last_name(&self, last_name: &str) -> DbResult<Vec<VisitRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            r#"
            SELECT {VISIT_JOIN_COLUMNS}
            FROM visits v
            JOIN patients p ON p.id_number = v.patient_id
            WHERE p.last_name = ?
            ORDER BY v.id
            "#
        ))?;

        let rows = stmt.query_map([last_name], read_visit_join_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?.try_into()?);
        }
        Ok(records)
    }
}
