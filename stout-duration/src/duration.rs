use crate::error::ConversionError;
use crate::unit::Unit;

/// A span of time stored as a floating-point count of nanoseconds.
///
/// Equality and ordering compare the raw nanosecond values exactly, so two
/// durations built through different units are equal only when their
/// nanosecond totals are bit-for-bit the same number.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Duration {
    nanos: f64,
}

impl Duration {
    pub const ZERO: Duration = Duration { nanos: 0.0 };

    #[must_use]
    pub fn new(magnitude: f64, unit: Unit) -> Self {
        Self {
            nanos: magnitude * unit.scale(),
        }
    }

    #[must_use]
    pub fn from_nanos(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::Nanoseconds)
    }

    #[must_use]
    pub fn from_micros(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::Microseconds)
    }

    #[must_use]
    pub fn from_millis(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::Milliseconds)
    }

    #[must_use]
    pub fn from_secs(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::Seconds)
    }

    #[must_use]
    pub fn from_mins(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::Minutes)
    }

    #[must_use]
    pub fn from_hours(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::Hours)
    }

    #[must_use]
    pub fn from_days(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::Days)
    }

    #[must_use]
    pub fn from_weeks(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::Weeks)
    }

    /// The magnitude of this duration expressed in `unit`.
    #[must_use]
    pub fn as_unit(&self, unit: Unit) -> f64 {
        self.nanos / unit.scale()
    }

    #[must_use]
    pub fn ns(&self) -> f64 {
        self.nanos
    }

    #[must_use]
    pub fn us(&self) -> f64 {
        self.as_unit(Unit::Microseconds)
    }

    #[must_use]
    pub fn ms(&self) -> f64 {
        self.as_unit(Unit::Milliseconds)
    }

    #[must_use]
    pub fn secs(&self) -> f64 {
        self.as_unit(Unit::Seconds)
    }

    #[must_use]
    pub fn mins(&self) -> f64 {
        self.as_unit(Unit::Minutes)
    }

    #[must_use]
    pub fn hrs(&self) -> f64 {
        self.as_unit(Unit::Hours)
    }

    #[must_use]
    pub fn days(&self) -> f64 {
        self.as_unit(Unit::Days)
    }

    #[must_use]
    pub fn weeks(&self) -> f64 {
        self.as_unit(Unit::Weeks)
    }

    /// The coarsest unit in which this duration reads naturally: the first
    /// unit whose next-coarser unit is still larger than the duration.
    #[must_use]
    pub fn display_unit(&self) -> Unit {
        for pair in Unit::ALL.windows(2) {
            if *self < Duration::new(1.0, pair[1]) {
                return pair[0];
            }
        }
        Unit::Weeks
    }
}

impl From<std::time::Duration> for Duration {
    fn from(d: std::time::Duration) -> Self {
        Self::from_nanos(d.as_nanos() as f64)
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = ConversionError;

    fn try_from(d: Duration) -> Result<Self, Self::Error> {
        if !d.nanos.is_finite() || d.nanos < 0.0 {
            return Err(ConversionError { nanos: d.nanos });
        }
        std::time::Duration::try_from_secs_f64(d.secs())
            .map_err(|_| ConversionError { nanos: d.nanos })
    }
}
