use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// `YYYY-MM-DD h:mm:ss`, hour on a 12-hour clock without padding.
pub const TIMESTAMP_PATTERN: &str = "%Y-%m-%d %-I:%M:%S";

/// Timezone used to render timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabelTimeZone {
    #[default]
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
    Named(Tz),
}

impl LabelTimeZone {
    pub(crate) fn validate(self) -> ChartResult<Self> {
        if let Self::FixedOffsetMinutes { minutes } = self {
            if !(-14 * 60..=14 * 60).contains(&i32::from(minutes)) {
                return Err(ChartError::InvalidData(
                    "timezone offset must be between -840 and 840 minutes".to_owned(),
                ));
            }
        }
        Ok(self)
    }
}

/// Formats epoch seconds with [`TIMESTAMP_PATTERN`] in `zone`.
pub fn format_timestamp(epoch_seconds: i64, zone: LabelTimeZone) -> ChartResult<String> {
    let utc = DateTime::<Utc>::from_timestamp(epoch_seconds, 0).ok_or_else(|| {
        ChartError::Time(format!("timestamp {epoch_seconds} is out of range"))
    })?;

    let text = match zone.validate()? {
        LabelTimeZone::Utc => utc.format(TIMESTAMP_PATTERN).to_string(),
        LabelTimeZone::FixedOffsetMinutes { minutes } => {
            let offset = FixedOffset::east_opt(i32::from(minutes) * 60).ok_or_else(|| {
                ChartError::Time(format!("invalid fixed offset of {minutes} minutes"))
            })?;
            utc.with_timezone(&offset).format(TIMESTAMP_PATTERN).to_string()
        }
        LabelTimeZone::Named(tz) => utc.with_timezone(&tz).format(TIMESTAMP_PATTERN).to_string(),
    };
    Ok(text)
}

/// Axis-label flavor of [`format_timestamp`] for fractional seconds.
///
/// Values that cannot be represented fall back to plain decimals.
#[must_use]
pub fn format_time_label(seconds: f64, zone: LabelTimeZone) -> String {
    if !seconds.is_finite() {
        return "nan".to_owned();
    }
    let rounded = seconds.round();
    if rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
        return format!("{seconds:.0}");
    }
    format_timestamp(rounded as i64, zone).unwrap_or_else(|_| format!("{seconds:.0}"))
}
