const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

/// Nanoseconds per unit, indexed by `Unit as usize`.
const NANOS_PER_UNIT: [u64; 8] = [
    NANOSECOND,
    MICROSECOND,
    MILLISECOND,
    SECOND,
    MINUTE,
    HOUR,
    DAY,
    WEEK,
];

/// A duration unit. Variants are declared from finest to coarsest and the
/// string forms are the exact suffixes accepted by [`crate::parse`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum Unit {
    #[strum(serialize = "ns")]
    Nanoseconds,
    #[strum(serialize = "us")]
    Microseconds,
    #[strum(serialize = "ms")]
    Milliseconds,
    #[strum(serialize = "secs")]
    Seconds,
    #[strum(serialize = "mins")]
    Minutes,
    #[strum(serialize = "hrs")]
    Hours,
    #[strum(serialize = "days")]
    Days,
    #[strum(serialize = "weeks")]
    Weeks,
}

impl Unit {
    pub const ALL: [Unit; 8] = [
        Unit::Nanoseconds,
        Unit::Microseconds,
        Unit::Milliseconds,
        Unit::Seconds,
        Unit::Minutes,
        Unit::Hours,
        Unit::Days,
        Unit::Weeks,
    ];

    /// Number of nanoseconds in one of this unit.
    #[must_use]
    pub const fn nanos(self) -> u64 {
        NANOS_PER_UNIT[self as usize]
    }

    /// The suffix used when parsing and displaying this unit.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        self.into()
    }

    pub(crate) fn scale(self) -> f64 {
        self.nanos() as f64
    }
}
