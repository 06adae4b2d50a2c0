//! Appointment summarization — the pure derivation behind the patient
//! dashboard.
//!
//! Given a patient id, the full record snapshot, and a reference instant,
//! derives the upcoming/past partition, the next appointment, and the
//! completed-treatment aggregates. No clock access, no I/O: callers
//! inject `now`, which keeps the whole step deterministic.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{Incident, IncidentStatus, Patient};

/// Derived dashboard aggregates for one patient. Recomputed whole on
/// every input change; never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientSummary {
    pub patient: Patient,
    /// All of the patient's incidents in their snapshot order, kept for
    /// rendering paths that need the unpartitioned list.
    pub incidents: Vec<Incident>,
    /// Strictly after `now`, soonest first.
    pub upcoming: Vec<Incident>,
    /// Strictly before `now`, most recent first. Membership is
    /// date-based only — cancelled visits still appear here.
    pub past: Vec<Incident>,
    pub next_appointment: Option<Incident>,
    /// Sum of `cost` over Completed incidents that carry one.
    pub total_cost: f64,
    /// Count of Completed incidents, independent of cost presence.
    pub completed_count: u32,
}

/// Summarizes `incidents` for the patient with id `patient_id`.
///
/// Returns `None` when no patient record carries that id — an absence
/// signal for the caller to render an empty state, not an error.
///
/// Both partition comparisons are strict: an incident scheduled exactly
/// at `now` belongs to neither bucket. Ties on `appointment_date` keep
/// their snapshot order (stable sorts).
pub fn summarize(
    patient_id: &str,
    patients: &[Patient],
    incidents: &[Incident],
    now: NaiveDateTime,
) -> Option<PatientSummary> {
    let patient = patients.iter().find(|p| p.id == patient_id)?.clone();

    let mine: Vec<Incident> = incidents
        .iter()
        .filter(|i| i.patient_id == patient_id)
        .cloned()
        .collect();

    let mut upcoming: Vec<Incident> = mine
        .iter()
        .filter(|i| i.appointment_date > now)
        .cloned()
        .collect();
    upcoming.sort_by(|a, b| a.appointment_date.cmp(&b.appointment_date));

    let mut past: Vec<Incident> = mine
        .iter()
        .filter(|i| i.appointment_date < now)
        .cloned()
        .collect();
    past.sort_by(|a, b| b.appointment_date.cmp(&a.appointment_date));

    let next_appointment = upcoming.first().cloned();

    let total_cost = mine
        .iter()
        .filter(|i| i.status == IncidentStatus::Completed)
        .filter_map(|i| i.cost)
        .sum();

    let completed_count = mine
        .iter()
        .filter(|i| i.status == IncidentStatus::Completed)
        .count() as u32;

    Some(PatientSummary {
        patient,
        incidents: mine,
        upcoming,
        past,
        next_appointment,
        total_cost,
        completed_count,
    })
}
