use crate::client::ApiClient;
use crate::eligibility::{self, EligibilityContext, Verdict};
use crate::errors::ClientError;
use crate::models::SessionDescriptor;
use chrono::NaiveTime;
use tracing::{debug, warn};

pub struct AttendanceController {
    client: ApiClient,
    context: EligibilityContext,
    sessions: Vec<SessionDescriptor>,
    selected: Option<i64>,
}

impl AttendanceController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            context: EligibilityContext::default(),
            sessions: Vec::new(),
            selected: None,
        }
    }

    pub fn context(&self) -> EligibilityContext {
        self.context
    }

    pub fn sessions(&self) -> &[SessionDescriptor] {
        &self.sessions
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    // The settings endpoint may be unreachable pre-authentication; keep the
    // previous value on any failure.
    pub async fn refresh_settings(&mut self) {
        match self.client.fetch_settings().await {
            Ok(settings) => {
                self.context.time_restrictions_disabled = settings.disable_time_restrictions;
            }
            Err(err) => debug!("settings unavailable, keeping previous value: {err}"),
        }
    }

    pub async fn refresh_sessions(&mut self) -> Result<&[SessionDescriptor], ClientError> {
        match self.client.fetch_today_sessions().await {
            Ok(sessions) => {
                // One-way latch: never cleared for the lifetime of this
                // controller, even if a later list has no test session.
                if sessions.iter().any(|session| session.is_test_session) {
                    self.context.has_test_session = true;
                }
                if let Some(id) = self.selected {
                    let still_selectable = sessions
                        .iter()
                        .any(|session| session.id == id && !session.already_marked);
                    if !still_selectable {
                        self.selected = None;
                    }
                }
                self.sessions = sessions;
                Ok(&self.sessions)
            }
            Err(err) => {
                self.sessions.clear();
                self.selected = None;
                Err(err)
            }
        }
    }

    pub fn select_session(&mut self, id: i64) {
        let Some(descriptor) = self.sessions.iter().find(|session| session.id == id) else {
            return;
        };
        if descriptor.already_marked {
            return;
        }
        if descriptor.is_test_session {
            self.context.has_test_session = true;
        }
        self.selected = Some(id);
    }

    pub fn evaluate(&self, now: NaiveTime) -> Verdict {
        eligibility::evaluate(self.context, now)
    }

    pub fn evaluate_now(&self) -> Verdict {
        eligibility::evaluate_now(self.context)
    }

    pub async fn my_records(&self) -> Result<crate::models::MyRecordsResponse, ClientError> {
        self.client.fetch_my_records().await
    }

    pub async fn submit(&mut self, session_id: i64, token: &str) -> Result<(), ClientError> {
        if self.selected != Some(session_id) {
            return Err(ClientError::invalid_input("please select a session"));
        }
        let marked = self
            .sessions
            .iter()
            .any(|session| session.id == session_id && session.already_marked);
        if marked {
            return Err(ClientError::invalid_input(
                "attendance already marked for this session",
            ));
        }
        if token.len() != 6 || !token.chars().all(|c| c.is_ascii_digit()) {
            return Err(ClientError::invalid_input(
                "please enter a valid 6-digit token",
            ));
        }

        self.client.mark_attendance(session_id, token).await?;

        // The server owns attendance state; reload rather than flag locally.
        if let Err(err) = self.refresh_sessions().await {
            warn!("failed to reload sessions after marking: {err}");
        }
        Ok(())
    }
}
