use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub disable_time_restrictions: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDescriptor {
    pub id: i64,
    pub date: NaiveDateTime,
    pub is_test_session: bool,
    pub already_marked: bool,
}

#[derive(Debug, Deserialize)]
pub struct SessionsResponse {
    pub sessions: Vec<SessionDescriptor>,
}

#[derive(Debug, Serialize)]
pub struct MarkAttendanceRequest {
    pub session_id: i64,
    pub token: String,
}

// Error body shape used by the backend for non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiDetail {
    pub detail: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentSummary {
    pub uin: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceStatistics {
    pub total_sessions: u64,
    pub total_regular_sessions: u64,
    pub attended_sessions: u64,
    pub attended_regular_sessions: u64,
    pub attended_test_sessions: u64,
    pub attendance_percentage: f64,
    pub grade_points: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceRecord {
    pub session_id: i64,
    pub session_date: NaiveDateTime,
    pub marked_at: NaiveDateTime,
    pub is_test_session: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MyRecordsResponse {
    pub student: StudentSummary,
    pub statistics: AttendanceStatistics,
    pub records: Vec<AttendanceRecord>,
}
