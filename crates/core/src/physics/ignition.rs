//! Ignition probability from firebrands and lightning
//!
//! # References
//! - Schroeder, M.J. (1969). "Ignition probability." USDA Forest Service Office Report 2106-1.
//! - Latham, D.J., Schlieter, J.A. (1989). "Ignition probabilities of wildland fuels based on
//!   simulated lightning discharges." USDA Forest Service Research Paper INT-411.
//! - Rothermel, R.C. (1983). "How to predict the spread and intensity of forest and range fires."
//!   USDA Forest Service GTR INT-143 (fuel temperature).

/// Fine dead fuel temperature (°F) from air temperature and sun shading
///
/// Unshaded fuel runs 25 °F above the air; full shade brings it to 5 °F above.
pub fn fuel_temperature(air_temp: f64, shading: f64) -> f64 {
    air_temp + 25.0 - 20.0 * shading
}

/// Probability that a firebrand ignites fine dead fuel (fraction)
///
/// # Formula
/// ```text
/// Q_ig = 144.512 - 0.266 T - 0.00058 T² - 0.01 T M + 18.54 (1 - exp(-0.151 M)) + 6.4 M
/// X    = (400 - Q_ig) / 10
/// P    = 0.000048 X^4.3 / 50
/// ```
/// T in °C, M in percent.
///
/// # Arguments
/// * `fuel_temp` - Fuel temperature (°F)
/// * `fuel_mois` - Fine dead fuel moisture (fraction)
pub fn firebrand_probability(fuel_temp: f64, fuel_mois: f64) -> f64 {
    let t = (fuel_temp - 32.0) * 5.0 / 9.0;
    let m = 100.0 * fuel_mois;
    let qig = 144.512 - 0.266 * t - 0.00058 * t * t - 0.01 * t * m
        + 18.54 * (1.0 - (-0.151 * m).exp())
        + 6.4 * m;
    let x = (400.0 - qig) / 10.0;
    if x <= 0.0 {
        return 0.0;
    }
    (0.000048 * x.powf(4.3) / 50.0).clamp(0.0, 1.0)
}

/// Fuel beds tested by Latham and Schlieter, in item order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightningFuel {
    PonderosaPineLitter,
    PunkyWoodRottenChunky,
    PunkyWoodPowderDeep,
    PunkyWoodPowderShallow,
    LodgepolePineDuff,
    DouglasFirDuff,
    HighAltitudeMixed,
    PeatMoss,
}

impl LightningFuel {
    pub fn from_index(index: usize) -> Option<Self> {
        Some(match index {
            0 => Self::PonderosaPineLitter,
            1 => Self::PunkyWoodRottenChunky,
            2 => Self::PunkyWoodPowderDeep,
            3 => Self::PunkyWoodPowderShallow,
            4 => Self::LodgepolePineDuff,
            5 => Self::DouglasFirDuff,
            6 => Self::HighAltitudeMixed,
            7 => Self::PeatMoss,
            _ => return None,
        })
    }
}

/// Lightning stroke polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightningCharge {
    Negative,
    Positive,
    Unknown,
}

impl LightningCharge {
    /// Unrecognized indices are treated as unknown polarity
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Negative,
            1 => Self::Positive,
            _ => Self::Unknown,
        }
    }
}

/// Probability that a lightning stroke ignites the fuel bed (fraction)
///
/// Ignition given a long continuing current, scaled by the chance of such a
/// current for the stroke polarity (0.9 positive, 0.2 negative). Unknown
/// polarity weights the two by their observed frequency (27.7 % positive).
///
/// # Arguments
/// * `duff_depth` - Duff depth (in), used by the duff beds
/// * `fuel_mois` - Fuel moisture (fraction)
pub fn lightning_probability(
    fuel: LightningFuel,
    duff_depth: f64,
    fuel_mois: f64,
    charge: LightningCharge,
) -> f64 {
    const CC_POS: f64 = 0.9;
    const CC_NEG: f64 = 0.2;
    const FREQ_POS: f64 = 0.277;
    const FREQ_NEG: f64 = 0.723;

    let depth = (2.54 * duff_depth).clamp(0.0, 10.0);
    let m = (100.0 * fuel_mois).clamp(0.0, 40.0);
    let logistic = |a: f64, b: f64| 1.0 / (1.0 + (a - b * depth).exp());

    let (pos, neg) = match fuel {
        LightningFuel::PonderosaPineLitter => (0.92 * (-0.087 * m).exp(), 1.04 * (-0.054 * m).exp()),
        LightningFuel::PunkyWoodRottenChunky => (0.44 * (-0.110 * m).exp(), 0.59 * (-0.094 * m).exp()),
        LightningFuel::PunkyWoodPowderDeep => (0.86 * (-0.060 * m).exp(), 0.90 * (-0.056 * m).exp()),
        LightningFuel::PunkyWoodPowderShallow => (0.60 - 0.011 * m, 0.73 - 0.011 * m),
        LightningFuel::LodgepolePineDuff => (logistic(5.13, 0.68), logistic(3.84, 0.60)),
        LightningFuel::DouglasFirDuff => (logistic(6.69, 1.39), logistic(5.48, 1.28)),
        LightningFuel::HighAltitudeMixed => (0.62 * (-0.050 * m).exp(), 0.80 - 0.014 * m),
        LightningFuel::PeatMoss => (0.71 * (-0.070 * m).exp(), 0.84 * (-0.060 * m).exp()),
    };

    let p = match charge {
        LightningCharge::Positive => CC_POS * pos,
        LightningCharge::Negative => CC_NEG * neg,
        LightningCharge::Unknown => FREQ_POS * CC_POS * pos + FREQ_NEG * CC_NEG * neg,
    };
    p.clamp(0.0, 1.0)
}
