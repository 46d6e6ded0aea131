use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Packaged,
    Canned,
    Beverages,
    Snacks,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Packaged => "Packaged Foods",
            Category::Canned => "Canned Foods",
            Category::Beverages => "Beverages",
            Category::Snacks => "Snacks",
            Category::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Near,
    #[default]
    #[serde(other)]
    New,
}

impl Condition {
    pub fn label(self) -> &'static str {
        match self {
            Condition::New => "New/Unused",
            Condition::Near => "Near Expiry",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Pending,
    OnHold,
    Redistributed,
    Discarded,
    #[serde(other)]
    Unknown,
}

impl ItemStatus {
    /// Redistributed, discarded and unrecognised items no longer need triage.
    pub fn is_open(self) -> bool {
        matches!(self, ItemStatus::Pending | ItemStatus::OnHold)
    }
}

/// Parsed `expiration_date`. Missing or malformed values never fail the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpiryDate {
    Date(NaiveDate),
    #[default]
    Unparsable,
}

impl ExpiryDate {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return ExpiryDate::Date(date);
        }
        if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
            return ExpiryDate::Date(stamp.date_naive());
        }
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
            return ExpiryDate::Date(stamp.date());
        }
        ExpiryDate::Unparsable
    }

    pub fn date(self) -> Option<NaiveDate> {
        match self {
            ExpiryDate::Date(date) => Some(date),
            ExpiryDate::Unparsable => None,
        }
    }
}

/// Only `expiration_date` and `condition` feed the score; every field falls
/// back to its default instead of rejecting the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub category: Category,
    #[serde(default, deserialize_with = "or_default")]
    pub condition: Condition,
    #[serde(default, with = "expiry_date_serde")]
    pub expiration_date: ExpiryDate,
    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<i64>,
    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub donation_no: Option<String>,
    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub donor_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<ItemStatus>,
}

/// Deserializes `T`, substituting `T::default()` for null or mistyped values.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

impl FoodItem {
    #[cfg(test)]
    pub fn new(name: &str, category: Category, condition: Condition, expiry: ExpiryDate) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            category,
            condition,
            expiration_date: expiry,
            quantity: None,
            donation_no: None,
            donor_name: None,
            status: None,
        }
    }

    /// Items without a status are treated as still awaiting distribution.
    pub fn is_open(&self) -> bool {
        self.status.map_or(true, ItemStatus::is_open)
    }
}

/// The backend sends `expiration_date` as an ISO date string or `null`.
mod expiry_date_serde {
    use super::ExpiryDate;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(expiry: &ExpiryDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match expiry {
            ExpiryDate::Date(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            ExpiryDate::Unparsable => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ExpiryDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(raw) => ExpiryDate::parse(&raw),
            _ => ExpiryDate::Unparsable,
        })
    }
}
