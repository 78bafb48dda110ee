use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

/// Intensity bucket of a single day, as written by the snapshot generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContributionLevel {
    #[default]
    None,
    FirstQuartile,
    SecondQuartile,
    ThirdQuartile,
    FourthQuartile,
}

impl ContributionLevel {
    /// Parse a level name; anything unknown is treated as no activity
    pub fn from_name(name: &str) -> Self {
        match name {
            "FIRST_QUARTILE" => ContributionLevel::FirstQuartile,
            "SECOND_QUARTILE" => ContributionLevel::SecondQuartile,
            "THIRD_QUARTILE" => ContributionLevel::ThirdQuartile,
            "FOURTH_QUARTILE" => ContributionLevel::FourthQuartile,
            _ => ContributionLevel::None,
        }
    }

    /// Index used for the `gh-level-N` CSS class
    pub fn index(self) -> u8 {
        match self {
            ContributionLevel::None => 0,
            ContributionLevel::FirstQuartile => 1,
            ContributionLevel::SecondQuartile => 2,
            ContributionLevel::ThirdQuartile => 3,
            ContributionLevel::FourthQuartile => 4,
        }
    }
}

/// One day of the contribution calendar
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct DayRecord {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub count: f64,
    #[serde(default, deserialize_with = "lenient_level")]
    pub level: ContributionLevel,
}

/// The pre-generated GitHub activity document.
///
/// Every revision of the generator wrote a different subset of these fields,
/// so all of them are optional. A field with the wrong JSON type is treated
/// as missing instead of rejecting the whole document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ActivitySnapshot {
    #[serde(default, deserialize_with = "lenient_string")]
    pub profile_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub activity_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: Option<String>,

    // Yearly totals, in the order they are consulted
    #[serde(default, deserialize_with = "lenient_number")]
    pub yearly_contributions: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_contributions: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub contributions_last_year: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub annual_contributions: Option<f64>,

    // Earliest revision
    #[serde(default, deserialize_with = "lenient_number")]
    pub week_events: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_event_date: Option<String>,

    #[serde(default, deserialize_with = "lenient_days")]
    pub recent_days: Option<Vec<DayRecord>>,

    // Generator metadata, informational only
    #[serde(default, deserialize_with = "lenient_string")]
    pub generated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_contribution_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: Option<String>,
}

impl ActivitySnapshot {
    /// When the generator wrote this snapshot, if it said so in RFC 3339
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Whether the generator fell back to a placeholder payload
    pub fn is_generator_fallback(&self) -> bool {
        self.source.as_deref() == Some("fallback")
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match JsonValue::deserialize(deserializer)? {
        JsonValue::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match JsonValue::deserialize(deserializer)? {
        JsonValue::Number(n) => n.as_f64(),
        _ => None,
    })
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.unwrap_or(0.0))
}

fn lenient_level<'de, D>(deserializer: D) -> Result<ContributionLevel, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?
        .map(|name| ContributionLevel::from_name(&name))
        .unwrap_or_default())
}

fn lenient_days<'de, D>(deserializer: D) -> Result<Option<Vec<DayRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match JsonValue::deserialize(deserializer)? {
        JsonValue::Array(items) => Some(
            items
                .into_iter()
                .filter(JsonValue::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}
