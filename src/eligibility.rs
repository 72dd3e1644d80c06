use chrono::{Local, NaiveTime, Timelike};

pub const ATTENDANCE_START_HOUR: u32 = 8;
pub const ATTENDANCE_END_HOUR: u32 = 9;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EligibilityContext {
    pub time_restrictions_disabled: bool,
    pub has_test_session: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindowState {
    Open,
    Test,
    #[default]
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub allowed: bool,
    pub label: &'static str,
    pub state: WindowState,
}

pub fn evaluate_now(context: EligibilityContext) -> Verdict {
    evaluate(context, Local::now().time())
}

// Local wall-clock hour only; the session's calendar date is deliberately
// not consulted here (matches the deployed behavior).
pub fn evaluate(context: EligibilityContext, now: NaiveTime) -> Verdict {
    let within_window = (ATTENDANCE_START_HOUR..ATTENDANCE_END_HOUR).contains(&now.hour());

    if context.time_restrictions_disabled {
        Verdict {
            allowed: true,
            label: "Testing Mode - All Day Access Enabled",
            state: WindowState::Test,
        }
    } else if context.has_test_session {
        Verdict {
            allowed: true,
            label: "Test Session - 24 Hour Access",
            state: WindowState::Test,
        }
    } else if within_window {
        Verdict {
            allowed: true,
            label: "Attendance Window Open (8 AM - 9 AM)",
            state: WindowState::Open,
        }
    } else {
        Verdict {
            allowed: false,
            label: "Attendance Window Closed (Opens 8 AM - 9 AM)",
            state: WindowState::Closed,
        }
    }
}
