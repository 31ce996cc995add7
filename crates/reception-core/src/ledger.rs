//! Visit ledger: the visit side of the reception desk.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::db::{Database, DbResult};
use crate::models::{Visit, VisitRecord};

/// Access layer for recording and finding visits.
pub struct VisitLedger<'a> {
    db: &'a Database,
}

impl<'a> VisitLedger<'a> {
    /// Create a new ledger over an open database.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Record a visit. The insert is unconditional: patient_id is not
    /// checked against the registry, and last_name is stored verbatim
    /// rather than derived from the referenced patient. Returns the
    /// stored visit with its assigned row id.
    pub fn record(
        &self,
        patient_id: &str,
        visit_date: NaiveDate,
        payment_amount: i64,
        last_name: &str,
    ) -> DbResult<Visit> {
        debug!(patient_id, %visit_date, "recording visit");

        let mut visit = Visit::new(
            patient_id.to_string(),
            visit_date,
            payment_amount,
            last_name.to_string(),
        );
        let id = self.db.insert_visit(&visit)?;
        visit.id = Some(id);

        info!(patient_id, row_id = id, "visit recorded");
        Ok(visit)
    }

    /// Look up visits, eagerly joined with the referenced patient.
    /// patient_id wins when both filters are supplied; the last_name
    /// filter matches the linked patient's actual name. With no filter,
    /// the result is empty, never an error.
    pub fn find(
        &self,
        patient_id: Option<&str>,
        last_name: Option<&str>,
    ) -> DbResult<Vec<VisitRecord>> {
        debug!(?patient_id, ?last_name, "finding visits");

        if let Some(patient_id) = patient_id {
            return self.db.find_visits_by_patient_id(patient_id);
        }
        if let Some(last_name) = last_name {
            return self.db.find_visits_by_last_name(last_name);
        }
        Ok(Vec::new())
    }
}
