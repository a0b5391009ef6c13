//! Clock time display utilities.

use std::fmt;

use jiff::civil::DateTime;

/// A wrapper around a civil `DateTime` that displays the time of day on a
/// 12-hour clock.
///
/// # Format
///
/// `H:MM AM` / `H:MM PM`: the hour is not zero-padded, minutes always are,
/// and midnight/noon show as `12`.
///
/// # Examples
///
/// ```rust
/// use evening_core::display::ClockTime;
/// use jiff::civil::date;
///
/// let dt = date(2024, 1, 2).at(19, 0, 0, 0);
/// assert_eq!(ClockTime(&dt).to_string(), "7:00 PM");
/// ```
pub struct ClockTime<'a>(pub &'a DateTime);

impl<'a> fmt::Display for ClockTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.0.hour();
        let meridiem = if hour < 12 { "AM" } else { "PM" };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{}:{:02} {}", hour12, self.0.minute(), meridiem)
    }
}
