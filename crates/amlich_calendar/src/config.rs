//! Calendar configuration.

use crate::error::CalendarError;

/// Vietnam's offset from UTC, in hours.
pub const DEFAULT_TZ_HOURS: f64 = 7.0;

/// Settings shared by every conversion in a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarConfig {
    /// Local offset from UTC in hours. Decides on which local day a new moon
    /// or a solar-term boundary falls. Default: 7.0.
    pub tz_hours: f64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            tz_hours: DEFAULT_TZ_HOURS,
        }
    }
}

impl CalendarConfig {
    /// Validated constructor.
    pub fn new(tz_hours: f64) -> Result<Self, CalendarError> {
        let config = Self { tz_hours };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CalendarError> {
        if !self.tz_hours.is_finite() {
            return Err(CalendarError::InvalidConfig("tz_hours must be finite"));
        }
        if !(-12.0..=14.0).contains(&self.tz_hours) {
            return Err(CalendarError::InvalidConfig(
                "tz_hours must be within [-12, 14]",
            ));
        }
        Ok(())
    }
}
