//! Calendar dates to Julian and modified Julian dates
//!
//! # References
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd ed., chapter 7.

/// Julian date at the start of the modified Julian epoch (1858-11-17 00:00)
pub const MJD_EPOCH: f64 = 2_400_000.5;

/// Splits a `yyyymmdd.f` value into year, month, day and hour
///
/// The fractional part is the fraction of the day elapsed.
pub fn split_integer_date(value: f64) -> (i64, i64, i64, f64) {
    let idate = value.floor() as i64;
    let year = idate / 10_000;
    let month = (idate - 10_000 * year) / 100;
    let day = idate - 10_000 * year - 100 * month;
    (year, month, day, 24.0 * (value - value.floor()))
}

/// Julian date; Julian calendar through 1582-10-04, Gregorian from 1582-10-15
pub fn julian_date(year: i64, month: i64, day: i64, hour: f64) -> f64 {
    let (y, m) = if month <= 2 { (year - 1, month + 12) } else { (year, month) };
    let gregorian = (year, month, day) >= (1582, 10, 15);
    let b = if gregorian {
        let a = y.div_euclid(100);
        2 - a + a.div_euclid(4)
    } else {
        0
    };
    (365.25 * (y + 4716) as f64).floor() + (30.6001 * (m + 1) as f64).floor() + day as f64 + b as f64
        - 1524.5
        + hour / 24.0
}

/// Modified Julian date; the day changes at midnight
pub fn modified_julian_date(jd: f64) -> f64 {
    jd - MJD_EPOCH
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_dates() {
        assert_relative_eq!(julian_date(2000, 1, 1, 12.0), 2_451_545.0);
        assert_relative_eq!(julian_date(1957, 10, 4, 19.26), 2_436_116.3025, epsilon = 1e-6);
        // last Julian-calendar day is followed directly by the first Gregorian day
        assert_relative_eq!(julian_date(1582, 10, 15, 0.0) - julian_date(1582, 10, 4, 0.0), 1.0);
    }

    #[test]
    fn test_modified_julian_date_from_integer_date() {
        let (y, m, d, h) = split_integer_date(20_000_101.0);
        assert_eq!((y, m, d), (2000, 1, 1));
        assert_eq!(h, 0.0);
        assert_relative_eq!(modified_julian_date(julian_date(y, m, d, h)), 51_544.0);
        assert_relative_eq!(modified_julian_date(julian_date(1858, 11, 17, 0.0)), 0.0);
    }
}
