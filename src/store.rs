//! Shared in-memory application state — the data-store collaborator's
//! surface.
//!
//! Holds one consistent snapshot of the patient and incident collections.
//! Collections are replaced wholesale, never mutated in place, and every
//! replacement bumps a revision counter. The derived summary is memoized
//! on `(patient_id, revision)`, so it is recomputed only when the
//! identifier or a collection actually changes — not on every render.

use std::sync::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::dashboard::{render_summary, DashboardView, DisplayOptions};
use crate::error::DashboardError;
use crate::models::{FileAttachment, Incident, Patient};
use crate::summary::{summarize, PatientSummary};

/// Wire envelope the external data source supplies: both collections,
/// already validated, fully loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    pub patients: Vec<Patient>,
    pub incidents: Vec<Incident>,
}

#[derive(Debug, Default)]
struct Snapshot {
    patients: Vec<Patient>,
    incidents: Vec<Incident>,
    revision: u64,
}

#[derive(Debug)]
struct CachedSummary {
    patient_id: String,
    revision: u64,
    summary: PatientSummary,
}

/// Shared application state: the record snapshot plus the summary memo.
#[derive(Debug)]
pub struct AppState {
    snapshot: RwLock<Snapshot>,
    cache: Mutex<Option<CachedSummary>>,
}

impl AppState {
    /// Create an empty state; collections arrive via `load_seed` or the
    /// `replace_*` methods.
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(Snapshot::default()),
            cache: Mutex::new(None),
        }
    }

    /// Parses a seed JSON document and loads both collections.
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let seed: SeedData = serde_json::from_str(json)?;
        let state = Self::new();
        state.load_seed(seed)?;
        Ok(state)
    }

    /// Replaces both collections in one step.
    pub fn load_seed(&self, seed: SeedData) -> Result<(), DashboardError> {
        let mut snap = self.write()?;
        snap.patients = seed.patients;
        snap.incidents = seed.incidents;
        snap.revision += 1;
        tracing::debug!(
            revision = snap.revision,
            patients = snap.patients.len(),
            incidents = snap.incidents.len(),
            "snapshot replaced"
        );
        Ok(())
    }

    /// Swaps the patient collection.
    pub fn replace_patients(&self, patients: Vec<Patient>) -> Result<(), DashboardError> {
        let mut snap = self.write()?;
        snap.patients = patients;
        snap.revision += 1;
        Ok(())
    }

    /// Swaps the incident collection.
    pub fn replace_incidents(&self, incidents: Vec<Incident>) -> Result<(), DashboardError> {
        let mut snap = self.write()?;
        snap.incidents = incidents;
        snap.revision += 1;
        Ok(())
    }

    /// Current patient collection (cloned snapshot).
    pub fn patients(&self) -> Result<Vec<Patient>, DashboardError> {
        Ok(self.read()?.patients.clone())
    }

    /// Current incident collection (cloned snapshot).
    pub fn incidents(&self) -> Result<Vec<Incident>, DashboardError> {
        Ok(self.read()?.incidents.clone())
    }

    /// Revision of the current snapshot. Bumped on every replacement.
    pub fn revision(&self) -> Result<u64, DashboardError> {
        Ok(self.read()?.revision)
    }

    /// Memoized summary for one patient.
    ///
    /// `now` is deliberately not part of the cache key: a cached summary
    /// reflects the instant it was computed, and is reused until the
    /// identifier or a collection changes — the reference behavior
    /// recomputes on data changes, not on every render.
    pub fn summary_for(
        &self,
        patient_id: &str,
        now: NaiveDateTime,
    ) -> Result<Option<PatientSummary>, DashboardError> {
        let snap = self.read()?;
        let mut cache = self.cache.lock().map_err(|_| DashboardError::LockPoisoned)?;

        if let Some(cached) = cache.as_ref() {
            if cached.patient_id == patient_id && cached.revision == snap.revision {
                return Ok(Some(cached.summary.clone()));
            }
        }

        let summary = summarize(patient_id, &snap.patients, &snap.incidents, now);
        if let Some(ref s) = summary {
            *cache = Some(CachedSummary {
                patient_id: patient_id.to_string(),
                revision: snap.revision,
                summary: s.clone(),
            });
        }

        Ok(summary)
    }

    /// Assembles the dashboard view for the current user, reusing the
    /// summary memo.
    pub fn dashboard(
        &self,
        user: &CurrentUser,
        now: NaiveDateTime,
        options: &DisplayOptions,
    ) -> Result<DashboardView, DashboardError> {
        let patient_id = match user.linked_patient_id() {
            Some(id) => id.to_string(),
            None => return Ok(DashboardView::NotFound),
        };

        match self.summary_for(&patient_id, now)? {
            Some(summary) => Ok(DashboardView::Ready(render_summary(&summary, options))),
            None => Ok(DashboardView::NotFound),
        }
    }

    /// Resolves an attachment descriptor for the file-opener boundary.
    /// Requires a hit on both the incident and the attachment name.
    pub fn attachment(
        &self,
        incident_id: &str,
        file_name: &str,
    ) -> Result<FileAttachment, DashboardError> {
        let snap = self.read()?;
        let incident = snap
            .incidents
            .iter()
            .find(|i| i.id == incident_id)
            .ok_or_else(|| DashboardError::NotFound {
                entity_type: "Incident".into(),
                id: incident_id.into(),
            })?;

        incident
            .files
            .iter()
            .find(|f| f.name == file_name)
            .cloned()
            .ok_or_else(|| DashboardError::NotFound {
                entity_type: "FileAttachment".into(),
                id: file_name.into(),
            })
    }

    // ── Lock helpers ────────────────────────────────────────

    fn read(&self) -> Result<RwLockReadGuard<'_, Snapshot>, DashboardError> {
        self.snapshot.read().map_err(|_| DashboardError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Snapshot>, DashboardError> {
        self.snapshot.write().map_err(|_| DashboardError::LockPoisoned)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
