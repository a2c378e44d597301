use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::upload::{UploadField, UploadState};

/// Placeholder stored in a photo URL field when the photo was marked uploaded.
pub const UPLOADED_MARKER: &str = "uploaded";

/// Payload sent to the log-creation provider when MSF is continued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepoLogInput {
    pub unit_id: String,
    #[serde(with = "iso8601_millis")]
    pub waktu_tiba: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto_segel_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto_sib_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto_ftw_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto_p2h_url: Option<String>,
    pub msf_completed: bool,
}

impl DepoLogInput {
    /// Builds a completed-MSF payload. Each photo URL carries
    /// [`UPLOADED_MARKER`] when its flag is set and is omitted otherwise.
    pub fn new(unit_id: String, waktu_tiba: DateTime<Utc>, uploads: UploadState) -> Self {
        let marker = |field: UploadField| {
            uploads
                .is_uploaded(field)
                .then(|| UPLOADED_MARKER.to_string())
        };
        Self {
            unit_id,
            waktu_tiba,
            foto_segel_url: marker(UploadField::Segel),
            foto_sib_url: marker(UploadField::Sib),
            foto_ftw_url: marker(UploadField::Ftw),
            foto_p2h_url: marker(UploadField::P2h),
            msf_completed: true,
        }
    }
}

/// A depot log record as returned by the log-creation provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepoLog {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub input: DepoLogInput,
}

/// ISO-8601 in UTC with millisecond precision and a `Z` suffix,
/// e.g. `2024-05-01T00:30:00.000Z`.
mod iso8601_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn arrival() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 30, 0).unwrap()
    }

    fn all_uploaded() -> UploadState {
        UploadField::ALL
            .into_iter()
            .fold(UploadState::default(), UploadState::with_uploaded)
    }

    #[test]
    fn new_marks_every_uploaded_photo() {
        let input = DepoLogInput::new("U-12".into(), arrival(), all_uploaded());
        assert_eq!(input.foto_segel_url.as_deref(), Some(UPLOADED_MARKER));
        assert_eq!(input.foto_sib_url.as_deref(), Some(UPLOADED_MARKER));
        assert_eq!(input.foto_ftw_url.as_deref(), Some(UPLOADED_MARKER));
        assert_eq!(input.foto_p2h_url.as_deref(), Some(UPLOADED_MARKER));
        assert!(input.msf_completed);
    }

    #[test]
    fn new_leaves_missing_photos_empty() {
        let uploads = UploadState::default().with_uploaded(UploadField::Sib);
        let input = DepoLogInput::new("U-12".into(), arrival(), uploads);
        assert_eq!(input.foto_segel_url, None);
        assert_eq!(input.foto_sib_url.as_deref(), Some(UPLOADED_MARKER));
        assert_eq!(input.foto_ftw_url, None);
        assert_eq!(input.foto_p2h_url, None);
    }

    #[test]
    fn payload_wire_shape() {
        let input = DepoLogInput::new("U-12".into(), arrival(), all_uploaded());
        insta::assert_snapshot!(
            serde_json::to_string(&input).unwrap(),
            @r#"{"unit_id":"U-12","waktu_tiba":"2024-05-01T00:30:00.000Z","foto_segel_url":"uploaded","foto_sib_url":"uploaded","foto_ftw_url":"uploaded","foto_p2h_url":"uploaded","msf_completed":true}"#
        );
    }

    #[test]
    fn payload_omits_unset_markers() {
        let input = DepoLogInput::new("U-7".into(), arrival(), UploadState::default());
        insta::assert_snapshot!(
            serde_json::to_string(&input).unwrap(),
            @r#"{"unit_id":"U-7","waktu_tiba":"2024-05-01T00:30:00.000Z","msf_completed":true}"#
        );
    }

    #[test]
    fn record_reads_back_from_stored_line() {
        let line = r#"{"id":"log-1","created_at":"2024-05-01T01:00:00Z","unit_id":"U-12","waktu_tiba":"2024-05-01T00:30:00.000Z","foto_sib_url":"uploaded","msf_completed":true}"#;
        let log: DepoLog = serde_json::from_str(line).unwrap();
        assert_eq!(log.id, "log-1");
        assert_eq!(log.input.unit_id, "U-12");
        assert_eq!(log.input.waktu_tiba, arrival());
        assert_eq!(log.input.foto_segel_url, None);
        assert_eq!(log.input.foto_sib_url.as_deref(), Some(UPLOADED_MARKER));
    }

    #[test]
    fn waktu_tiba_rejects_garbage() {
        let line = r#"{"unit_id":"U-12","waktu_tiba":"yesterday","msf_completed":true}"#;
        assert!(serde_json::from_str::<DepoLogInput>(line).is_err());
    }
}
