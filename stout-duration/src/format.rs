use std::fmt;

use crate::duration::Duration;

/// Renders the magnitude in [`Duration::display_unit`] with exactly two
/// fractional digits, e.g. `1.08mins` or `999.00ns`.
///
/// The precision is applied to an inner argument, so the caller's own
/// formatting options are neither consulted nor altered.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.display_unit();
        write!(f, "{:.2}{}", self.as_unit(unit), unit.suffix())
    }
}
