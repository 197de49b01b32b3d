//! Near-surface weather indices
//!
//! Temperatures are °F, elevation ft, humidity percent.
//!
//! # References
//! - Bolton, D. (1980). "The computation of equivalent potential temperature."
//!   Monthly Weather Review, 108, 1046-1053.
//! - Rothfusz, L.P. (1990). "The heat index equation." NWS Technical Attachment SR 90-23.
//! - Steadman, R.G. (1979). "The assessment of sultriness." J. Applied Meteorology, 18, 861-873.
//! - Pepi, J.W. (1987). "The summer simmer index." Weatherwise, 40, 143-145.
//! - Osczevski, R., Bluestein, M. (2005). "The new wind chill equivalent temperature chart."
//!   Bulletin of the American Meteorological Society, 86, 1453-1458.

fn to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

fn to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Saturation vapour pressure over water (hPa) at `t` °C
fn saturation_pressure(t: f64) -> f64 {
    6.1121 * (17.502 * t / (240.97 + t)).exp()
}

/// Standard-atmosphere station pressure (hPa) at `elevation` ft
fn station_pressure(elevation: f64) -> f64 {
    let h = elevation * 0.3048;
    1013.25 * (1.0 - 2.25577e-5 * h).max(0.0).powf(5.25588)
}

/// Dew point from dry- and wet-bulb temperatures (°F)
///
/// # Formula
/// ```text
/// e   = e_s(T_w) - 0.00066 (1 + 0.00115 T_w) (T - T_w) p
/// T_d = 240.97 ln(e / 6.1121) / (17.502 - ln(e / 6.1121))
/// ```
pub fn dew_point(dry_bulb: f64, wet_bulb: f64, elevation: f64) -> f64 {
    let t = to_celsius(dry_bulb);
    let tw = to_celsius(wet_bulb);
    let p = station_pressure(elevation);
    let e = (saturation_pressure(tw) - 0.00066 * (1.0 + 0.00115 * tw) * (t - tw) * p).max(1.0e-3);
    let x = (e / 6.1121).ln();
    to_fahrenheit(240.97 * x / (17.502 - x))
}

/// Relative humidity (%) from air and dew point temperatures
pub fn relative_humidity(air_temp: f64, dew_point: f64) -> f64 {
    let rh = saturation_pressure(to_celsius(dew_point)) / saturation_pressure(to_celsius(air_temp));
    100.0 * rh.min(1.0)
}

/// Height of the cumulus cloud base (ft), 222 ft per °F of dew point depression
pub fn cumulus_base_height(air_temp: f64, dew_point: f64) -> f64 {
    (222.0 * (air_temp - dew_point)).max(0.0)
}

/// Heat index (°F)
///
/// Steadman's simple form below 80 °F, Rothfusz's regression above.
pub fn heat_index(t: f64, rh: f64) -> f64 {
    let simple = 0.5 * (t + 61.0 + (t - 68.0) * 1.2 + 0.094 * rh);
    if 0.5 * (simple + t) < 80.0 {
        return simple;
    }
    -42.379 + 2.049_015_23 * t + 10.143_331_27 * rh
        - 0.224_755_41 * t * rh
        - 0.006_837_83 * t * t
        - 0.054_817_17 * rh * rh
        + 0.001_228_74 * t * t * rh
        + 0.000_852_82 * t * rh * rh
        - 0.000_001_99 * t * t * rh * rh
}

/// Summer simmer index (°F)
pub fn summer_simmer_index(t: f64, rh: f64) -> f64 {
    1.98 * (t - (0.55 - 0.0055 * rh) * (t - 58.0)) - 56.83
}

/// Wind chill temperature (°F) for wind in mi/h
///
/// Returns the air temperature when the wind is 3 mi/h or less or the air
/// is warmer than 50 °F.
pub fn wind_chill(t: f64, wind: f64) -> f64 {
    if wind <= 3.0 || t > 50.0 {
        return t;
    }
    let v = wind.powf(0.16);
    35.74 + 0.6215 * t - 35.75 * v + 0.4275 * t * v
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_saturated_air() {
        // equal dry and wet bulb means the dew point is the air temperature
        assert_relative_eq!(dew_point(70.0, 70.0, 0.0), 70.0, epsilon = 0.05);
        assert_relative_eq!(relative_humidity(70.0, 70.0), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dry_air() {
        let td = dew_point(90.0, 65.0, 2000.0);
        assert!(td < 65.0);
        let rh = relative_humidity(90.0, td);
        assert!(rh > 10.0 && rh < 40.0, "rh {rh}");
        assert_relative_eq!(cumulus_base_height(80.0, 50.0), 6660.0);
        assert_eq!(cumulus_base_height(50.0, 55.0), 0.0);
    }

    #[test]
    fn test_heat_index() {
        // NWS table: 90 °F at 70 % reads 105-106 °F
        let hi = heat_index(90.0, 70.0);
        assert!((hi - 105.9).abs() < 1.0, "hi {hi}");
        assert!(heat_index(60.0, 50.0) < 80.0);
    }

    #[test]
    fn test_wind_chill() {
        // NWS chart: 0 °F at 15 mi/h is -19 °F
        assert_relative_eq!(wind_chill(0.0, 15.0), -19.0, epsilon = 0.5);
        assert_eq!(wind_chill(60.0, 20.0), 60.0);
        assert_eq!(wind_chill(20.0, 2.0), 20.0);
    }

    #[test]
    fn test_summer_simmer() {
        let s = summer_simmer_index(90.0, 50.0);
        assert!(s > 90.0 && s < 110.0, "ssi {s}");
    }
}
