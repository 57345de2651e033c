//! Calendar API types and data structures.

use chrono::NaiveDate;
use serde::Deserialize;

/// A calendar event as used by the sync layer.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: String,
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Start date for all-day events; `None` for timed events.
    pub date: Option<NaiveDate>,
    pub html_link: Option<String>,
}

impl Event {
    pub(crate) fn from_api(api: ApiEvent) -> Self {
        let date = api
            .start
            .as_ref()
            .and_then(|t| t.date.as_deref())
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());

        Self {
            id: api.id,
            summary: api.summary.unwrap_or_default(),
            description: api.description,
            location: api.location,
            date,
            html_link: api.html_link,
        }
    }
}

// API response types.

/// Google Calendar API event resource.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEvent {
    pub id: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: Option<ApiEventTime>,
    pub html_link: Option<String>,
}

/// Start/end time of an event; all-day events carry `date`, timed events
/// carry `dateTime` (which the sync layer ignores).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEventTime {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListResponse {
    #[serde(default)]
    pub items: Vec<ApiEvent>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn all_day_start_parses_to_date() {
        let api: ApiEvent = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "summary": "AM☀️15° / PM⛅21°",
            "start": {"date": "2025-08-01"}
        }))
        .unwrap();

        let event = Event::from_api(api);
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 8, 1));
        assert_eq!(event.summary, "AM☀️15° / PM⛅21°");
    }

    #[test]
    fn timed_start_has_no_date() {
        let api: ApiEvent = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "start": {"dateTime": "2025-08-01T10:00:00Z"}
        }))
        .unwrap();

        let event = Event::from_api(api);
        assert_eq!(event.date, None);
        assert!(event.summary.is_empty());
    }
}
