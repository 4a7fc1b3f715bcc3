use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::{format_date, Category, Plant};

/// One entry of the on-disk JSON array.
///
/// The category is read as any JSON value so that an unknown or non-text
/// tag drops only its own entry instead of failing the whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct PlantRecord {
    #[serde(default)]
    pub category: Option<Value>,
    pub name: String,
    #[serde(deserialize_with = "deserialize_interval")]
    pub water_interval: u32,
    pub last_watered: String,
}

/// Interval forms accepted on disk.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntervalValue {
    Integer(u64),
    Float(f64),
    Text(String),
}

/// Coerce the interval to whole days: integers as-is, floats truncated,
/// numeric strings parsed. Negative or out-of-range values are rejected.
fn deserialize_interval<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let interval = match IntervalValue::deserialize(deserializer)? {
        IntervalValue::Integer(n) => u32::try_from(n).ok(),
        IntervalValue::Float(f) if f.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&f) => {
            Some(f.trunc() as u32)
        }
        IntervalValue::Float(_) => None,
        IntervalValue::Text(s) => s.trim().parse::<u32>().ok(),
    };
    interval.ok_or_else(|| D::Error::custom("water_interval must be a non-negative number of days"))
}

impl PlantRecord {
    pub fn into_plant(self, today: NaiveDate) -> Option<Plant> {
        let Some(category) = self
            .category
            .as_ref()
            .and_then(Value::as_str)
            .and_then(Category::from_tag) else {
            tracing::debug!(
                "Skipping plant '{}' with unknown category {:?}",
                self.name,
                self.category
            );
            return None;
        };

        Some(Plant::from_date_text(
            category,
            self.name,
            self.water_interval,
            &self.last_watered,
            today,
        ))
    }
}

impl From<&Plant> for PlantRecord {
    fn from(plant: &Plant) -> Self {
        Self {
            category: Some(Value::from(plant.category.as_str())),
            name: plant.name.clone(),
            water_interval: plant.water_interval_days,
            last_watered: format_date(plant.last_watered),
        }
    }
}
