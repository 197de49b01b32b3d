//! Elliptical fire shape (Anderson 1983)
//!
//! A point-source fire grows as an ellipse whose shape depends only on the
//! effective wind speed. Spread in any direction follows from the head fire
//! rate and the ellipse eccentricity.
//!
//! # References
//! - Anderson, H.E. (1983). "Predicting wind-driven wild land fire size and shape."
//!   USDA Forest Service Research Paper INT-305.
//! - Catchpole, E.A., de Mestre, N.J., Gill, A.M. (1982). "Intensity of fire at its perimeter."
//!   Australian Forest Research, 12, 47-54.

use crate::SMIDGEN;

/// Square feet in one acre, inverted
pub const ACRES_PER_SQ_FT: f64 = 2.295684e-05;

/// Length-to-width ratio L/W = 1 + 0.25 × U_eff (mi/h)
pub fn length_to_width(eff_wind_mph: f64) -> f64 {
    1.0 + 0.25 * eff_wind_mph.max(0.0)
}

/// Ellipse eccentricity e = sqrt(L/W² - 1) / (L/W)
pub fn eccentricity(length_to_width: f64) -> f64 {
    let lw = length_to_width;
    if lw <= 1.0 {
        0.0
    } else {
        (lw * lw - 1.0).sqrt() / lw
    }
}

/// Angle between the direction of maximum spread and the vector direction
///
/// Both arguments are degrees clockwise from upslope; the result is folded
/// into [0, 180].
pub fn vector_beta(max_dir: f64, vector_dir: f64) -> f64 {
    let beta = (vector_dir - max_dir).abs();
    if beta > 180.0 {
        360.0 - beta
    } else {
        beta
    }
}

/// Spread rate at angle β from the head
///
/// # Formula
/// ```text
/// R_β = R_max × (1 - e) / (1 - e × cos β)
/// ```
pub fn spread_at_beta(ros_max: f64, eccentricity: f64, beta_deg: f64) -> f64 {
    if ros_max < SMIDGEN {
        return 0.0;
    }
    if beta_deg.abs() < SMIDGEN {
        return ros_max;
    }
    ros_max * (1.0 - eccentricity) / (1.0 - eccentricity * beta_deg.to_radians().cos())
}

/// Backing spread rate R_back = R_max × (1 - e) / (1 + e)
pub fn backing_rate(ros_max: f64, eccentricity: f64) -> f64 {
    ros_max * (1.0 - eccentricity) / (1.0 + eccentricity)
}

/// Fire width from its length and shape
pub fn width(length: f64, length_to_width: f64) -> f64 {
    if length_to_width < SMIDGEN {
        0.0
    } else {
        length / length_to_width
    }
}

/// Ellipse area π L W / 4 (ft²)
pub fn area(length: f64, width: f64) -> f64 {
    std::f64::consts::PI * length * width / 4.0
}

/// Ellipse perimeter approximated as π (L + W) / 2 (ft)
pub fn perimeter(length: f64, width: f64) -> f64 {
    std::f64::consts::PI * (length + width) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_calm_fire_is_circular() {
        let lw = length_to_width(0.0);
        assert_eq!(lw, 1.0);
        assert_eq!(eccentricity(lw), 0.0);
        assert_relative_eq!(spread_at_beta(10.0, 0.0, 135.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(backing_rate(10.0, 0.0), 10.0);
    }

    #[test]
    fn test_windy_fire_elongates() {
        let lw = length_to_width(8.0);
        assert_relative_eq!(lw, 3.0);
        let e = eccentricity(lw);
        assert_relative_eq!(e, 8.0_f64.sqrt() / 3.0, epsilon = 1e-12);
        assert!(spread_at_beta(10.0, e, 90.0) < 10.0);
        assert_relative_eq!(spread_at_beta(10.0, e, 180.0), backing_rate(10.0, e), epsilon = 1e-9);
    }

    #[test]
    fn test_vector_beta_folds() {
        assert_eq!(vector_beta(10.0, 350.0), 20.0);
        assert_eq!(vector_beta(90.0, 45.0), 45.0);
        assert_eq!(vector_beta(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_circle_area() {
        let a = area(100.0, 100.0);
        assert_relative_eq!(a, std::f64::consts::PI * 2500.0);
        assert_relative_eq!(perimeter(100.0, 100.0), std::f64::consts::PI * 100.0);
    }
}
