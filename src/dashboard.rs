//! Dashboard view assembly — what the rendering layer consumes.
//!
//! Mirrors the patient dashboard page sections: welcome header, personal
//! info, stat tiles, next-appointment card, and the capped upcoming and
//! treatment-history lists. Dates arrive pre-formatted and each status
//! carries a display tone, so the renderer holds no domain logic.
//!
//! The list caps are presentation-layer slicing only; the underlying
//! `PatientSummary` is never truncated here.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::config;
use crate::models::{FileAttachment, Incident, IncidentStatus, Patient};
use crate::summary::{summarize, PatientSummary};

/// Long form for the next-appointment card, e.g.
/// "Friday, March 1, 2024 2:30 PM".
const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y %-I:%M %p";
/// Short form with time for upcoming rows, e.g. "Mar 1, 2024 2:30 PM".
const LIST_DATE_FORMAT: &str = "%b %-d, %Y %-I:%M %p";
/// Date-only form for history rows, follow-ups, and dates of birth.
const DAY_FORMAT: &str = "%b %-d, %Y";

// ─── Display options ──────────────────────────────────────────────────────────

/// Per-section row caps. Callers tune these; the defaults match the
/// reference page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub upcoming_limit: usize,
    pub history_limit: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            upcoming_limit: config::DEFAULT_LIST_LIMIT,
            history_limit: config::DEFAULT_LIST_LIMIT,
        }
    }
}

// ─── View models ──────────────────────────────────────────────────────────────

/// Badge tone hint for a status chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    Info,
    Warning,
    Success,
    Danger,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeHeader {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub date_of_birth: String,
    pub contact: String,
    pub email: String,
    pub health_info: String,
}

/// Aggregate tiles for the stats row. `total_spent` is pre-formatted
/// ("$390") the way the page prints it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub upcoming_appointments: u32,
    pub completed_treatments: u32,
    pub total_spent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextAppointmentCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date_display: String,
    pub comments: Option<String>,
    pub status: IncidentStatus,
    pub tone: StatusTone,
}

/// One row of the upcoming-appointments section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date_display: String,
    pub status: IncidentStatus,
    pub tone: StatusTone,
    pub cost_display: Option<String>,
}

/// One row of the treatment-history section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: IncidentStatus,
    pub tone: StatusTone,
    pub treatment: Option<String>,
    pub date_display: String,
    pub cost_display: Option<String>,
    /// Descriptors handed to the file-opener boundary on demand.
    pub attachments: Vec<FileAttachment>,
    pub follow_up_display: Option<String>,
}

/// Everything the dashboard page renders, assembled in one call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub header: WelcomeHeader,
    pub personal: PersonalInfo,
    pub stats: DashboardStats,
    pub next_appointment: Option<NextAppointmentCard>,
    pub upcoming: Vec<AppointmentRow>,
    pub history: Vec<TreatmentRow>,
}

/// Renderer-facing result: assembled data, or the signal to show the
/// "patient data not found" placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DashboardView {
    NotFound,
    Ready(DashboardData),
}

// ─── Assembly ─────────────────────────────────────────────────────────────────

/// Assembles the dashboard for the current user against a record snapshot.
///
/// `NotFound` when the user carries no linked patient id or the id matches
/// no patient record — both render the same empty state.
pub fn assemble_dashboard(
    user: &CurrentUser,
    patients: &[Patient],
    incidents: &[Incident],
    now: NaiveDateTime,
    options: &DisplayOptions,
) -> DashboardView {
    let patient_id = match user.linked_patient_id() {
        Some(id) => id,
        None => return DashboardView::NotFound,
    };

    match summarize(patient_id, patients, incidents, now) {
        Some(summary) => DashboardView::Ready(render_summary(&summary, options)),
        None => DashboardView::NotFound,
    }
}

/// Builds the view model from an already-derived summary.
pub fn render_summary(summary: &PatientSummary, options: &DisplayOptions) -> DashboardData {
    let patient = &summary.patient;

    let header = WelcomeHeader {
        title: format!("Welcome, {}", patient.name),
        subtitle: "Here's your dental care overview".into(),
    };

    let personal = PersonalInfo {
        date_of_birth: format_day(patient.dob),
        contact: patient.contact.clone(),
        email: patient.email.clone(),
        health_info: patient.health_info.clone(),
    };

    let stats = DashboardStats {
        upcoming_appointments: summary.upcoming.len() as u32,
        completed_treatments: summary.completed_count,
        total_spent: format!("${}", summary.total_cost),
    };

    let next_appointment = summary.next_appointment.as_ref().map(|i| NextAppointmentCard {
        id: i.id.clone(),
        title: i.title.clone(),
        description: i.description.clone(),
        date_display: i.appointment_date.format(LONG_DATE_FORMAT).to_string(),
        comments: i.comments.clone(),
        status: i.status.clone(),
        tone: upcoming_tone(&i.status),
    });

    let upcoming = summary
        .upcoming
        .iter()
        .take(options.upcoming_limit)
        .map(appointment_row)
        .collect();

    let history = summary
        .past
        .iter()
        .take(options.history_limit)
        .map(treatment_row)
        .collect();

    DashboardData {
        header,
        personal,
        stats,
        next_appointment,
        upcoming,
        history,
    }
}

fn appointment_row(incident: &Incident) -> AppointmentRow {
    AppointmentRow {
        id: incident.id.clone(),
        title: incident.title.clone(),
        description: incident.description.clone(),
        date_display: incident.appointment_date.format(LIST_DATE_FORMAT).to_string(),
        status: incident.status.clone(),
        tone: upcoming_tone(&incident.status),
        cost_display: incident.cost.map(format_money),
    }
}

fn treatment_row(incident: &Incident) -> TreatmentRow {
    TreatmentRow {
        id: incident.id.clone(),
        title: incident.title.clone(),
        description: incident.description.clone(),
        status: incident.status.clone(),
        tone: history_tone(&incident.status),
        treatment: incident.treatment.clone(),
        date_display: incident.appointment_date.format(DAY_FORMAT).to_string(),
        cost_display: incident.cost.map(format_money),
        attachments: incident.files.clone(),
        follow_up_display: incident.next_date.map(|d| format_day(d.date())),
    }
}

/// Status tone in the upcoming section — anything past "in progress"
/// reads as settled there.
fn upcoming_tone(status: &IncidentStatus) -> StatusTone {
    match status {
        IncidentStatus::Scheduled => StatusTone::Info,
        IncidentStatus::InProgress => StatusTone::Warning,
        _ => StatusTone::Success,
    }
}

/// Status tone in the history section.
fn history_tone(status: &IncidentStatus) -> StatusTone {
    match status {
        IncidentStatus::Completed => StatusTone::Success,
        IncidentStatus::Cancelled => StatusTone::Danger,
        _ => StatusTone::Neutral,
    }
}

fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

fn format_money(amount: f64) -> String {
    format!("${amount}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn patient(id: &str) -> Patient {
        Patient {
            id: id.into(),
            name: "Alma Reyes".into(),
            dob: NaiveDate::from_ymd_opt(1990, 5, 14).unwrap(),
            contact: "555-0100".into(),
            email: "alma@example.com".into(),
            health_info: "No known allergies".into(),
        }
    }

    fn patient_user(patient_id: &str) -> CurrentUser {
        CurrentUser {
            id: "u2".into(),
            role: UserRole::Patient,
            patient_id: Some(patient_id.into()),
        }
    }

    fn incident(id: &str, date: NaiveDateTime, status: IncidentStatus) -> Incident {
        Incident {
            id: id.into(),
            patient_id: "P1".into(),
            title: format!("Visit {id}"),
            description: "Dental visit".into(),
            appointment_date: date,
            status,
            treatment: None,
            cost: None,
            files: Vec::new(),
            next_date: None,
            comments: None,
        }
    }

    fn data_for(view: DashboardView) -> DashboardData {
        match view {
            DashboardView::Ready(data) => data,
            DashboardView::NotFound => panic!("expected Ready"),
        }
    }

    #[test]
    fn admin_without_linked_patient_gets_not_found() {
        let user = CurrentUser {
            id: "u1".into(),
            role: UserRole::Admin,
            patient_id: None,
        };
        let view = assemble_dashboard(
            &user,
            &[patient("P1")],
            &[],
            dt(2024, 2, 1, 0, 0),
            &DisplayOptions::default(),
        );
        assert!(matches!(view, DashboardView::NotFound));
    }

    #[test]
    fn unknown_patient_id_gets_not_found() {
        let view = assemble_dashboard(
            &patient_user("P404"),
            &[patient("P1")],
            &[],
            dt(2024, 2, 1, 0, 0),
            &DisplayOptions::default(),
        );
        assert!(matches!(view, DashboardView::NotFound));
    }

    #[test]
    fn header_and_personal_info_are_formatted() {
        let view = assemble_dashboard(
            &patient_user("P1"),
            &[patient("P1")],
            &[],
            dt(2024, 2, 1, 0, 0),
            &DisplayOptions::default(),
        );
        let data = data_for(view);

        assert_eq!(data.header.title, "Welcome, Alma Reyes");
        assert_eq!(data.personal.date_of_birth, "May 14, 1990");
        assert_eq!(data.personal.contact, "555-0100");
        assert_eq!(data.personal.health_info, "No known allergies");
    }

    #[test]
    fn next_appointment_uses_long_date_form() {
        let mut visit = incident("n1", dt(2024, 3, 1, 14, 30), IncidentStatus::Scheduled);
        visit.comments = Some("Bring prior X-rays".into());

        let view = assemble_dashboard(
            &patient_user("P1"),
            &[patient("P1")],
            &[visit],
            dt(2024, 2, 1, 0, 0),
            &DisplayOptions::default(),
        );
        let data = data_for(view);

        let card = data.next_appointment.unwrap();
        assert_eq!(card.date_display, "Friday, March 1, 2024 2:30 PM");
        assert_eq!(card.comments.as_deref(), Some("Bring prior X-rays"));
        assert_eq!(card.tone, StatusTone::Info);
    }

    #[test]
    fn list_caps_slice_rows_but_not_stats() {
        let incidents: Vec<Incident> = (0..8)
            .map(|i| {
                incident(
                    &format!("u{i}"),
                    dt(2024, 3, 1 + i, 9, 0),
                    IncidentStatus::Scheduled,
                )
            })
            .collect();

        let view = assemble_dashboard(
            &patient_user("P1"),
            &[patient("P1")],
            &incidents,
            dt(2024, 2, 1, 0, 0),
            &DisplayOptions::default(),
        );
        let data = data_for(view);

        assert_eq!(data.upcoming.len(), 5);
        assert_eq!(data.stats.upcoming_appointments, 8);

        // Caps are parameters, not constants.
        let narrow = assemble_dashboard(
            &patient_user("P1"),
            &[patient("P1")],
            &incidents,
            dt(2024, 2, 1, 0, 0),
            &DisplayOptions {
                upcoming_limit: 2,
                history_limit: 1,
            },
        );
        assert_eq!(data_for(narrow).upcoming.len(), 2);
    }

    #[test]
    fn history_rows_carry_treatment_details() {
        let mut done = incident("h1", dt(2024, 1, 10, 9, 0), IncidentStatus::Completed);
        done.treatment = Some("Filling, upper left molar".into());
        done.cost = Some(150.0);
        done.files = vec![FileAttachment {
            name: "invoice.pdf".into(),
            url: "data:application/pdf;base64,JVBERg==".into(),
        }];
        done.next_date = Some(dt(2024, 7, 10, 9, 0));

        let cancelled = incident("h2", dt(2024, 1, 20, 9, 0), IncidentStatus::Cancelled);

        let view = assemble_dashboard(
            &patient_user("P1"),
            &[patient("P1")],
            &[done, cancelled],
            dt(2024, 2, 1, 0, 0),
            &DisplayOptions::default(),
        );
        let data = data_for(view);

        assert_eq!(data.history.len(), 2);
        // Most recent first.
        assert_eq!(data.history[0].id, "h2");
        assert_eq!(data.history[0].tone, StatusTone::Danger);

        let row = &data.history[1];
        assert_eq!(row.tone, StatusTone::Success);
        assert_eq!(row.date_display, "Jan 10, 2024");
        assert_eq!(row.cost_display.as_deref(), Some("$150"));
        assert_eq!(row.treatment.as_deref(), Some("Filling, upper left molar"));
        assert_eq!(row.attachments.len(), 1);
        assert_eq!(row.follow_up_display.as_deref(), Some("Jul 10, 2024"));
    }

    #[test]
    fn stats_total_spent_matches_page_format() {
        let mut a = incident("a", dt(2024, 1, 5, 9, 0), IncidentStatus::Completed);
        a.cost = Some(100.0);
        let mut b = incident("b", dt(2024, 1, 6, 9, 0), IncidentStatus::Completed);
        b.cost = Some(17.5);

        let view = assemble_dashboard(
            &patient_user("P1"),
            &[patient("P1")],
            &[a, b],
            dt(2024, 2, 1, 0, 0),
            &DisplayOptions::default(),
        );
        let data = data_for(view);

        assert_eq!(data.stats.total_spent, "$117.5");
        assert_eq!(data.stats.completed_treatments, 2);
    }

    #[test]
    fn upcoming_tone_mapping() {
        assert_eq!(upcoming_tone(&IncidentStatus::Scheduled), StatusTone::Info);
        assert_eq!(upcoming_tone(&IncidentStatus::InProgress), StatusTone::Warning);
        assert_eq!(upcoming_tone(&IncidentStatus::Completed), StatusTone::Success);
    }

    #[test]
    fn history_tone_mapping() {
        assert_eq!(history_tone(&IncidentStatus::Completed), StatusTone::Success);
        assert_eq!(history_tone(&IncidentStatus::Cancelled), StatusTone::Danger);
        assert_eq!(history_tone(&IncidentStatus::Scheduled), StatusTone::Neutral);
    }

    #[test]
    fn not_found_view_serializes_with_kind_tag() {
        let json = serde_json::to_string(&DashboardView::NotFound).unwrap();
        assert_eq!(json, r#"{"kind":"NotFound"}"#);
    }
}
