//! Safety zone sizing
//!
//! # References
//! - Butler, B.W., Cohen, J.D. (1998). "Firefighter safety zones: a theoretical model based on
//!   radiative heating." International Journal of Wildland Fire, 8(2), 73-77.

/// Separation distance between firefighters and flames (ft), four flame lengths
pub fn separation_distance(flame_length: f64) -> f64 {
    4.0 * flame_length
}

/// Safety zone radius (ft) and area (ft²)
///
/// The core area holds every person and piece of equipment; the separation
/// distance surrounds it.
///
/// # Arguments
/// * `sep_dist` - Separation distance (ft)
/// * `personnel`, `personnel_area` - Number of people and area per person (ft²)
/// * `equipment`, `equipment_area` - Number of machines and area per machine (ft²)
pub fn radius_and_size(
    sep_dist: f64,
    personnel: f64,
    personnel_area: f64,
    equipment: f64,
    equipment_area: f64,
) -> (f64, f64) {
    let core = (personnel * personnel_area + equipment * equipment_area).max(0.0);
    let radius = sep_dist + (core / std::f64::consts::PI).sqrt();
    (radius, std::f64::consts::PI * radius * radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_safety_zone() {
        assert_relative_eq!(separation_distance(10.0), 40.0);
        let (r, size) = radius_and_size(40.0, 0.0, 50.0, 0.0, 300.0);
        assert_relative_eq!(r, 40.0);
        assert_relative_eq!(size, std::f64::consts::PI * 1600.0);

        let (r, _) = radius_and_size(40.0, 10.0, 50.0, 1.0, 300.0);
        assert_relative_eq!(r, 40.0 + (800.0 / std::f64::consts::PI).sqrt());
    }
}
