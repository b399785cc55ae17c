//! Low-precision solar approximations.
//!
//! None of these need better than a minute or two of accuracy; they feed
//! the regional tables in [`crate::region`] rather than replace them.

use chrono::{Datelike, NaiveDate};

/// Sun's upper limb on the horizon including refraction, degrees below horizon.
pub const HORIZON_DEPRESSION: f64 = 0.833;

/// Table anchors assume this Fajr depression.
pub const TABLE_FAJR_ANGLE: f64 = 20.0;

/// Table anchors assume this Isha depression.
pub const TABLE_ISHA_ANGLE: f64 = 18.0;

/// Bound on `tan(lat) * tan(decl)` so polar days stay finite.
const SEASONAL_CLAMP: f64 = 0.95;

/// Day of year, 1-based.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Equation of time in minutes (apparent minus mean solar time).
pub fn equation_of_time_minutes(date: NaiveDate) -> f64 {
    let b = (360.0 * (f64::from(day_of_year(date)) - 81.0) / 365.0).to_radians();
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Solar declination in degrees (Cooper's formula).
pub fn declination(date: NaiveDate) -> f64 {
    23.44 * (360.0 * (284.0 + f64::from(day_of_year(date))) / 365.0).to_radians().sin()
}

/// Change in half day length, in hours, relative to an equinox day at `lat`.
///
/// Positive when days are longer than at equinox.
pub fn seasonal_delta_hours(lat: f64, date: NaiveDate) -> f64 {
    let x = (lat.to_radians().tan() * declination(date).to_radians().tan())
        .clamp(-SEASONAL_CLAMP, SEASONAL_CLAMP);
    x.asin().to_degrees() / 15.0
}

/// Hours between solar noon and the moment the sun is `depression` degrees
/// below the horizon, on an equinox day at `lat`.
pub fn depression_arc_hours(lat: f64, depression: f64) -> f64 {
    let cos_lat = lat.to_radians().cos().max(1e-6);
    let x = (-depression.to_radians().sin() / cos_lat).clamp(-1.0, 1.0);
    x.acos().to_degrees() / 15.0
}

/// Hours between solar noon and Asr on an equinox day at `lat`.
///
/// `shadow_factor` is 1 for the standard convention and 2 for Hanafi.
pub fn asr_arc_hours(lat: f64, shadow_factor: f64) -> f64 {
    let altitude = (1.0 / (shadow_factor + lat.abs().to_radians().tan())).atan();
    let cos_lat = lat.to_radians().cos().max(1e-6);
    let x = (altitude.sin() / cos_lat).clamp(-1.0, 1.0);
    x.acos().to_degrees() / 15.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_equation_of_time_extremes() {
        // early November: sun runs ~16 minutes fast
        let nov = equation_of_time_minutes(d(2024, 11, 3));
        assert!((15.0..17.5).contains(&nov), "nov eot {nov}");
        // mid February: ~14 minutes slow
        let feb = equation_of_time_minutes(d(2024, 2, 12));
        assert!((-15.5..-13.0).contains(&feb), "feb eot {feb}");
    }

    #[test]
    fn test_declination_solstices() {
        assert!(declination(d(2024, 6, 21)) > 23.0);
        assert!(declination(d(2024, 12, 21)) < -23.0);
        assert!(declination(d(2024, 3, 21)).abs() < 1.5);
    }

    #[test]
    fn test_seasonal_delta_sign_by_hemisphere() {
        let june = d(2024, 6, 21);
        assert!(seasonal_delta_hours(51.5, june) > 1.0);
        assert!(seasonal_delta_hours(-6.2, june) < 0.0);
        assert_eq!(seasonal_delta_hours(0.0, june), 0.0);
    }

    #[test]
    fn test_seasonal_delta_is_clamped_near_pole() {
        let h = seasonal_delta_hours(89.0, d(2024, 6, 21));
        assert!(h.is_finite());
        assert!(h < 6.0);
    }

    #[test]
    fn test_arcs_at_equator() {
        assert!((depression_arc_hours(0.0, 20.0) - 7.333).abs() < 0.01);
        assert!((asr_arc_hours(0.0, 1.0) - 3.0).abs() < 0.01);
        assert!(asr_arc_hours(0.0, 2.0) > asr_arc_hours(0.0, 1.0));
    }
}
