use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Stand-in age of a mastery event when a mastered skill has no
/// `lastPracticed` timestamp. The records do not track a real mastery date.
pub const MASTERY_FALLBACK_DAYS: i64 = 14;

/// Whole-month granularity used when rendering project durations.
pub const DAYS_PER_MONTH: i64 = 30;
