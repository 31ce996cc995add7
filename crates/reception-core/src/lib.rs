//! Reception Desk Core Library
//!
//! Local-first data layer for a medical reception desk: register patients,
//! record visits, look both up. State lives in a single SQLite file with two
//! tables; every operation is a synchronous single-statement call.
//!
//! # Architecture
//!
//! ```text
//! Frontend (CLI / form)
//!        │
//!        ├── PatientRegistry ── register_or_update / find
//!        │                              │
//!        └── VisitLedger ─── record / find
//!                                       │
//!                                  [ Database ]
//!                              patients ── visits
//!                         (joined on id_number, unchecked)
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite storage layer and schema
//! - [`models`]: Domain types (Patient, Visit, VisitRecord)
//! - [`registry`]: Patient registration and lookup
//! - [`ledger`]: Visit recording and lookup
//!
//! Not-found is always an empty result, never an error; [`db::DbError`] is
//! reserved for genuine storage failures.

pub mod db;
pub mod ledger;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use db::{Database, DbError, DbResult};
pub use ledger::VisitLedger;
pub use models::{Patient, Visit, VisitRecord};
pub use registry::PatientRegistry;
