use crate::eligibility::Verdict;
use crate::models::{MyRecordsResponse, SessionDescriptor};
use chrono::NaiveTime;

pub fn render_status_line(verdict: &Verdict, now: NaiveTime) -> String {
    format!("{} | {}", now.format("%I:%M:%S %p"), verdict.label)
}

pub fn render_session_option(session: &SessionDescriptor) -> String {
    let mut line = format!("Session {} - {}", session.id, session.date.format("%Y-%m-%d"));
    if session.is_test_session {
        line.push_str(" (TEST SESSION - 24hr token validity)");
    }
    if session.already_marked {
        line.push_str(" [already marked]");
    }
    line
}

pub fn render_session_list(sessions: &[SessionDescriptor]) -> String {
    if sessions.is_empty() {
        return "No sessions available for today".to_string();
    }
    sessions
        .iter()
        .map(render_session_option)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_records(records: &MyRecordsResponse) -> String {
    let stats = &records.statistics;
    format!(
        "Attendance statistics for {} ({})\n\
         Total sessions (all): {}\n\
         Attended (all): {}\n\
         Regular sessions: {}\n\
         Attended regular: {}\n\
         Test sessions attended: {}\n\
         Attendance: {:.2}%\n\
         Grade points: {}/10\n\
         Note: only regular sessions count toward your grade.",
        records.student.name,
        records.student.uin,
        stats.total_sessions,
        stats.attended_sessions,
        stats.total_regular_sessions,
        stats.attended_regular_sessions,
        stats.attended_test_sessions,
        stats.attendance_percentage,
        stats.grade_points,
    )
}
