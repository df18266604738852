//! Check-in endpoints consumed by the event page

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::attendee::Attendee;
use crate::domain::checkin::{Celebration, CheckInSummary};
use crate::domain::team::Team;
use crate::infrastructure::checkin::RegisterRequest;

/// Request to check in an attendee
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInApiRequest {
    pub name: String,
    pub team: Team,
}

/// Attendee representation for rendering
#[derive(Debug, Clone, Serialize)]
pub struct AttendeeResponse {
    pub name: String,
    pub team: String,
    pub team_name: String,
    pub checked_in_at: String,
}

impl From<&Attendee> for AttendeeResponse {
    fn from(attendee: &Attendee) -> Self {
        Self {
            name: attendee.name().as_str().to_string(),
            team: attendee.team().as_str().to_string(),
            team_name: attendee.team().display_name().to_string(),
            checked_in_at: attendee.checked_in_at().to_rfc3339(),
        }
    }
}

/// Per-team slice of the summary
#[derive(Debug, Clone, Serialize)]
pub struct TeamCountResponse {
    pub team: String,
    pub team_name: String,
    pub count: u32,
}

/// Summary response
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub total: u32,
    pub capacity: u32,
    pub progress: f64,
    pub teams: Vec<TeamCountResponse>,
}

impl From<&CheckInSummary> for SummaryResponse {
    fn from(summary: &CheckInSummary) -> Self {
        Self {
            total: summary.total(),
            capacity: summary.capacity(),
            progress: summary.progress(),
            teams: Team::ALL
                .iter()
                .map(|&team| TeamCountResponse {
                    team: team.as_str().to_string(),
                    team_name: team.display_name().to_string(),
                    count: summary.count(team),
                })
                .collect(),
        }
    }
}

/// Celebration payload, present when a registration filled the event
#[derive(Debug, Clone, Serialize)]
pub struct CelebrationResponse {
    pub team: String,
    pub team_name: String,
    pub count: u32,
    pub message: String,
}

impl From<&Celebration> for CelebrationResponse {
    fn from(celebration: &Celebration) -> Self {
        Self {
            team: celebration.team().as_str().to_string(),
            team_name: celebration.team().display_name().to_string(),
            count: celebration.count(),
            message: celebration.message(),
        }
    }
}

/// Check-in response
#[derive(Debug, Clone, Serialize)]
pub struct CheckInResponse {
    pub attendee: AttendeeResponse,
    pub summary: SummaryResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub celebration: Option<CelebrationResponse>,
}

/// List attendees response
#[derive(Debug, Clone, Serialize)]
pub struct ListAttendeesResponse {
    pub attendees: Vec<AttendeeResponse>,
    pub total: usize,
}

/// POST /api/checkins
pub async fn check_in(
    State(state): State<AppState>,
    Json(request): Json<CheckInApiRequest>,
) -> Result<(StatusCode, Json<CheckInResponse>), ApiError> {
    debug!(name = %request.name, team = %request.team, "Checking in attendee");

    let registration = state
        .checkin_service
        .register(RegisterRequest {
            name: request.name,
            team: request.team,
        })
        .await
        .map_err(ApiError::from)?;

    let response = CheckInResponse {
        attendee: AttendeeResponse::from(&registration.attendee),
        summary: SummaryResponse::from(&registration.summary),
        celebration: registration
            .celebration
            .as_ref()
            .map(CelebrationResponse::from),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/checkins
pub async fn list_attendees(
    State(state): State<AppState>,
) -> Result<Json<ListAttendeesResponse>, ApiError> {
    let attendees = state
        .checkin_service
        .attendees()
        .await
        .map_err(ApiError::from)?;

    let responses: Vec<AttendeeResponse> = attendees.iter().map(AttendeeResponse::from).collect();
    let total = responses.len();

    Ok(Json(ListAttendeesResponse {
        attendees: responses,
        total,
    }))
}

/// GET /api/summary
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = state
        .checkin_service
        .summary()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(SummaryResponse::from(&summary)))
}
