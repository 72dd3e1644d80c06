use crate::errors::ClientError;
use crate::models::{
    ApiDetail, MarkAttendanceRequest, MyRecordsResponse, SessionDescriptor, SessionsResponse,
    SettingsResponse,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    bearer: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, bearer: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer,
        }
    }

    pub async fn fetch_settings(&self) -> Result<SettingsResponse, ClientError> {
        let response = self
            .authorized(self.http.get(self.url("/api/admin/settings")))
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn fetch_today_sessions(&self) -> Result<Vec<SessionDescriptor>, ClientError> {
        let response = self
            .authorized(self.http.get(self.url("/api/student/sessions/today")))
            .send()
            .await?;
        let body: SessionsResponse = read_json(response).await?;
        Ok(body.sessions)
    }

    pub async fn mark_attendance(&self, session_id: i64, token: &str) -> Result<(), ClientError> {
        let response = self
            .authorized(self.http.post(self.url("/api/student/attendance/mark")))
            .json(&MarkAttendanceRequest {
                session_id,
                token: token.to_string(),
            })
            .send()
            .await?;
        read_json::<serde_json::Value>(response).await?;
        Ok(())
    }

    pub async fn fetch_my_records(&self) -> Result<MyRecordsResponse, ClientError> {
        let response = self
            .authorized(self.http.get(self.url("/api/student/attendance/my-records")))
            .send()
            .await?;
        read_json(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::AuthExpired);
    }
    if !status.is_success() {
        let detail = match response.json::<ApiDetail>().await {
            Ok(body) => body.detail,
            Err(_) => format!("request failed with status {status}"),
        };
        return Err(ClientError::Rejected(detail));
    }
    Ok(response.json().await?)
}
