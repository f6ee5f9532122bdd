use serde::{Deserialize, Serialize};

pub const BOOK_ROOM_PATH: &str = "/book-room";

/// Date fields captured from the dialog's form, form-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DateSelection {
    pub start_modal: String,
    pub end_modal: String,
}

impl DateSelection {
    /// Missing fields come back empty; the server decides what it accepts.
    pub fn from_payload(payload: &str) -> Self {
        serde_urlencoded::from_str(payload).unwrap_or_else(|e| {
            log::warn!("Unreadable date selection payload: {e}");
            Self::default()
        })
    }
}

/// Body of `POST /search-availability-json`. Field order matches the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityQuery {
    #[serde(rename = "start_modal")]
    pub start_date: String,
    #[serde(rename = "end_modal")]
    pub end_date: String,
    pub csrf_token: String,
    pub room_id: String,
}

impl AvailabilityQuery {
    pub fn new(selection: DateSelection, room_id: &str, csrf_token: &str) -> Self {
        Self {
            start_date: selection.start_modal,
            end_date: selection.end_modal,
            csrf_token: csrf_token.to_string(),
            room_id: room_id.to_string(),
        }
    }
}

/// Server answer. `ok=false` responses may omit every other field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityResult {
    pub ok: bool,
    pub message: String,
    pub room_id: String,
    pub start_date: String,
    pub end_date: String,
}

impl AvailabilityResult {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self { ok: false, message: message.into(), ..Self::default() }
    }
}

/// Link to the booking page for an available room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingLink {
    pub room_id: String,
    pub start_date: String,
    pub end_date: String,
}

impl BookingLink {
    pub fn href(&self) -> String {
        let params = [
            ("id", self.room_id.as_str()),
            ("s", self.start_date.as_str()),
            ("e", self.end_date.as_str()),
        ];
        // Percent-encodes everything outside [A-Za-z0-9*-._], so the result is attribute-safe.
        let query = serde_urlencoded::to_string(params).unwrap_or_default();
        format!("{BOOK_ROOM_PATH}?{query}")
    }
}

impl From<&AvailabilityResult> for BookingLink {
    fn from(result: &AvailabilityResult) -> Self {
        Self {
            room_id: result.room_id.clone(),
            start_date: result.start_date.clone(),
            end_date: result.end_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_encodes_form_field_names() {
        let selection = DateSelection {
            start_modal: "2024-06-01".to_string(),
            end_modal: "2024-06-05".to_string(),
        };
        let query = AvailabilityQuery::new(selection, "12", "tok");
        let body = serde_urlencoded::to_string(&query).expect("encode");
        assert_eq!(
            body,
            "start_modal=2024-06-01&end_modal=2024-06-05&csrf_token=tok&room_id=12"
        );
    }

    #[test]
    fn selection_tolerates_missing_fields() {
        let selection = DateSelection::from_payload("start_modal=2024-06-01");
        assert_eq!(selection.start_modal, "2024-06-01");
        assert_eq!(selection.end_modal, "");
    }

    #[test]
    fn result_parses_bare_rejection() {
        let result: AvailabilityResult = serde_json::from_str(r#"{"ok":false}"#).expect("parse");
        assert!(!result.ok);
        assert!(result.room_id.is_empty());
    }

    #[test]
    fn booking_href_escapes_hostile_values() {
        let link = BookingLink {
            room_id: "1\"><script>".to_string(),
            start_date: "2024-06-01".to_string(),
            end_date: "2024-06-05".to_string(),
        };
        let href = link.href();
        assert!(!href.contains('"'));
        assert!(!href.contains('<'));
        assert!(href.ends_with("&s=2024-06-01&e=2024-06-05"));
    }
}
