use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Office {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    #[default]
    Active,
    #[serde(rename = "In Repair", alias = "InRepair")]
    InRepair,
    Inactive,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 3] = [
        AssetStatus::Active,
        AssetStatus::InRepair,
        AssetStatus::Inactive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Active => "Active",
            AssetStatus::InRepair => "In Repair",
            AssetStatus::Inactive => "Inactive",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Active" => Some(AssetStatus::Active),
            "In Repair" | "InRepair" => Some(AssetStatus::InRepair),
            "Inactive" => Some(AssetStatus::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub inventory: String,
    #[serde(default)]
    pub status: AssetStatus,
    #[serde(default)]
    pub office_id: Option<String>,
    /// Populated by the global search endpoint instead of `office_id`.
    #[serde(default)]
    pub office: Option<Office>,
    /// Unreadable values are dropped rather than failing the whole list.
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Asset {
    pub fn owning_office_id(&self) -> Option<&str> {
        self.office_id
            .as_deref()
            .or_else(|| self.office.as_ref().map(|o| o.id.as_str()))
    }
}

/// Body for `POST /api/assets` and `PUT /api/assets/:id`. `id` is only set
/// when editing an existing asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub serial: String,
    pub inventory: String,
    pub status: AssetStatus,
    pub office_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoveAssetRequest {
    pub office_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    Create,
    Update,
    Delete,
    Move,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub action: ActivityAction,
    pub asset_name: String,
    #[serde(default)]
    pub from_office: Option<String>,
    #[serde(default)]
    pub to_office: Option<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Accepts RFC 3339, a zone-less date-time (read as UTC), a bare
/// `YYYY-MM-DD` date, or epoch milliseconds.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => parse_timestamp_str(raw),
        Value::Number(millis) => Utc.timestamp_millis_opt(millis.as_i64()?).single(),
        _ => None,
    }
}

fn parse_timestamp_str(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    parse_timestamp(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp: {}", value)))
}

fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_timestamp))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "PARSE_ERROR".to_string(),
            details: None,
        }
    }

    /// Builds an error from a non-2xx response. The message comes from the
    /// body's `message` (string or list of strings) or `error` field; any other
    /// body shape falls back to a status-based message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let message = parsed.as_ref().and_then(|value| {
            let from_message = match value.get("message") {
                Some(Value::String(msg)) if !msg.trim().is_empty() => Some(msg.clone()),
                Some(Value::Array(items)) => {
                    let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
                    (!parts.is_empty()).then(|| parts.join(", "))
                }
                _ => None,
            };
            from_message.or_else(|| {
                value
                    .get("error")
                    .and_then(|v| v.as_str())
                    .filter(|msg| !msg.trim().is_empty())
                    .map(str::to_string)
            })
        });
        Self {
            error: message.unwrap_or_else(|| format!("Request failed with status {}", status)),
            code: format!("HTTP_{}", status),
            details: parsed,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.code.strip_prefix("HTTP_")?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn asset_status_uses_spaced_repair_label_on_the_wire() {
        let value = serde_json::to_value(AssetStatus::InRepair).unwrap();
        assert_eq!(value, serde_json::json!("In Repair"));
        let parsed: AssetStatus = serde_json::from_str("\"InRepair\"").unwrap();
        assert_eq!(parsed, AssetStatus::InRepair);
    }

    #[wasm_bindgen_test]
    fn asset_payload_omits_id_when_creating() {
        let payload = AssetPayload {
            id: None,
            name: "Laptop".into(),
            serial: "SN-1".into(),
            inventory: "INV-1".into(),
            status: AssetStatus::Active,
            office_id: "o1".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["officeId"], serde_json::json!("o1"));
        assert_eq!(value["status"], serde_json::json!("Active"));
    }

    #[wasm_bindgen_test]
    fn move_request_serializes_office_id_only() {
        let value = serde_json::to_value(MoveAssetRequest {
            office_id: "o2".into(),
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({ "officeId": "o2" }));
    }
}
