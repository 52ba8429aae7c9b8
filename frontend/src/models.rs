use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct VideoAsset {
    #[serde(rename = "thumbnailURL", default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "text_entries")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub video: Option<VideoAsset>,
}

impl Video {
    pub fn views(&self) -> u64 {
        self.view_count.unwrap_or(0)
    }

    /// `None` when the timestamp is absent or not in a recognised format.
    pub fn published(&self) -> Option<DateTime<Utc>> {
        self.published_at.as_deref().and_then(parse_timestamp)
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.video
            .as_ref()
            .and_then(|v| v.thumbnail_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct VideoPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Video>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct LocalizedTitle {
    #[serde(default)]
    pub english: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: LocalizedTitle,
}

impl Category {
    pub fn display_title(&self) -> &str {
        self.title
            .english
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.id)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CategoryResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Floats are truncated; negatives, strings and other shapes count as absent.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        value.as_u64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        })
    }))
}

// Non-string entries are skipped; anything other than an array is an empty list.
fn text_entries<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Array(entries)) => entries,
        _ => return Ok(Vec::new()),
    };
    Ok(entries
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
