//! Google Calendar API client.

use chrono::{Days, NaiveDate, NaiveTime};
use tracing::instrument;

use crate::error::CalendarError;
use crate::types::{ApiEvent, Event, EventListResponse};

const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

pub struct CalendarClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl CalendarClient {
    pub fn new(access_token: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token: access_token.to_string(),
            base_url: CALENDAR_API_BASE.to_string(),
        }
    }

    #[cfg(test)]
    pub fn new_with_base_url(access_token: &str, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token: access_token.to_string(),
            base_url: base_url.to_string(),
        }
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Find the event for a given date, if any.
    ///
    /// Prefers the event whose all-day start matches the date exactly;
    /// falls back to the first event in the day's window.
    #[instrument(skip(self), level = "info")]
    pub async fn find_event(
        &self,
        calendar_id: &str,
        date: NaiveDate,
    ) -> Result<Option<Event>, CalendarError> {
        let time_min = date.and_time(NaiveTime::MIN).and_utc();
        let time_max = (date + Days::new(1)).and_time(NaiveTime::MIN).and_utc();

        let url = format!(
            "{}/calendars/{}/events?timeMin={}&timeMax={}&singleEvents=true&orderBy=startTime",
            self.base_url,
            urlencoding::encode(calendar_id),
            urlencoding::encode(&time_min.to_rfc3339()),
            urlencoding::encode(&time_max.to_rfc3339()),
        );

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.auth_header())
            .send()
            .await?;

        let resp: EventListResponse = self.handle_response(response).await?;
        let mut events: Vec<Event> = resp.items.into_iter().map(Event::from_api).collect();

        if let Some(index) = events.iter().position(|e| e.date == Some(date)) {
            return Ok(Some(events.swap_remove(index)));
        }
        Ok(events.into_iter().next())
    }

    /// Create an all-day event with default reminders disabled.
    #[instrument(skip(self, summary, description), level = "info")]
    pub async fn create_event(
        &self,
        calendar_id: &str,
        date: NaiveDate,
        summary: &str,
        location: &str,
        description: Option<&str>,
    ) -> Result<Event, CalendarError> {
        let url = format!(
            "{}/calendars/{}/events",
            self.base_url,
            urlencoding::encode(calendar_id),
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            .json(&event_body(date, summary, location, description))
            .send()
            .await?;

        let api_event: ApiEvent = self.handle_response(response).await?;
        Ok(Event::from_api(api_event))
    }

    /// Replace an existing event with a fresh all-day body.
    #[instrument(skip(self, summary, description), level = "info")]
    pub async fn update_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        date: NaiveDate,
        summary: &str,
        location: &str,
        description: Option<&str>,
    ) -> Result<Event, CalendarError> {
        let url = format!(
            "{}/calendars/{}/events/{}",
            self.base_url,
            urlencoding::encode(calendar_id),
            urlencoding::encode(event_id),
        );

        let response = self
            .client
            .put(&url)
            .header("Authorization", self.auth_header())
            .json(&event_body(date, summary, location, description))
            .send()
            .await?;

        let api_event: ApiEvent = self.handle_response(response).await?;
        Ok(Event::from_api(api_event))
    }

    /// Create the day's event, or refresh it if one already exists.
    #[instrument(skip(self, summary, description), level = "info")]
    pub async fn upsert_event(
        &self,
        calendar_id: &str,
        date: NaiveDate,
        summary: &str,
        location: &str,
        description: Option<&str>,
    ) -> Result<Event, CalendarError> {
        match self.find_event(calendar_id, date).await? {
            Some(existing) => {
                self.update_event(calendar_id, &existing.id, date, summary, location, description)
                    .await
            }
            None => {
                self.create_event(calendar_id, date, summary, location, description)
                    .await
            }
        }
    }

    /// Helper to handle API responses and errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, CalendarError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| CalendarError::ApiError(format!("JSON parse error: {e}")))
        } else if status.as_u16() == 401 {
            Err(CalendarError::TokenExpired)
        } else if status.as_u16() == 403 {
            Err(CalendarError::AuthRequired)
        } else if status.as_u16() == 404 {
            let text = response.text().await.unwrap_or_default();
            Err(CalendarError::EventNotFound(text))
        } else if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            Err(CalendarError::RateLimited(retry_after))
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(CalendarError::ApiError(format!("{status}: {text}")))
        }
    }
}

/// All-day event body shared by create and update.
fn event_body(
    date: NaiveDate,
    summary: &str,
    location: &str,
    description: Option<&str>,
) -> serde_json::Value {
    serde_json::json!({
        "summary": summary,
        "location": location,
        "description": description.unwrap_or(""),
        "start": { "date": date.to_string() },
        "end": { "date": date.to_string() },
        "reminders": { "useDefault": false },
    })
}
