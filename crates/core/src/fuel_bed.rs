//! Fuel particles and the fuel-bed intermediates shared between nodes
//!
//! A fuel bed is a dynamically sized list of particles. Standard fuel
//! parameters build six particles, palmetto-gallberry seven and aspen four.
//! Nodes that derive bed-level quantities store them in [`FuelBedState`] so
//! later nodes (reaction intensity, forward spread, effective wind at vector)
//! can use the bed's Rothermel coefficients without recomputing them.

use serde::{Deserialize, Serialize};

/// Particle density used when no better value is known (lb/ft³)
pub const DEFAULT_DENSITY: f64 = 32.0;
/// Total mineral content of standard fuel particles (fraction)
pub const DEFAULT_TOTAL_MINERAL: f64 = 0.0555;
/// Effective (silica-free) mineral content of standard fuel particles (fraction)
pub const DEFAULT_EFFECTIVE_MINERAL: f64 = 0.01;

/// Life category of a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Life {
    /// Dead time-lag fuel
    Dead,
    LiveHerb,
    LiveWood,
    /// Dead litter, moistened like 100-h fuel
    Litter,
}

impl Life {
    /// Dead and litter particles burn in the dead category
    pub fn is_dead(self) -> bool {
        matches!(self, Life::Dead | Life::Litter)
    }

    /// 0 for the dead category, 1 for the live category
    pub fn category(self) -> usize {
        usize::from(!self.is_dead())
    }
}

/// Role of a particle within its bed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    Dead1,
    Dead10,
    Dead100,
    LiveHerb,
    LiveWood,
    /// Cured herbaceous load moved from the live herb particle
    DeadHerb,
    Litter,
    /// Palmetto-gallberry foliage and stems
    Other,
}

/// One fuel size class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelParticle {
    pub kind: ParticleKind,
    pub life: Life,
    /// Oven-dry load (lb/ft²)
    pub load: f64,
    /// Surface area to volume ratio (ft²/ft³)
    pub savr: f64,
    /// Particle density (lb/ft³)
    pub dens: f64,
    /// Low heat of combustion (Btu/lb)
    pub heat: f64,
    /// Total mineral content (fraction)
    pub stot: f64,
    /// Effective mineral content (fraction)
    pub seff: f64,
    /// Moisture content (fraction)
    pub mois: f64,
}

impl FuelParticle {
    /// New particle with standard density, heat and mineral content
    pub fn new(kind: ParticleKind, life: Life, load: f64, savr: f64) -> Self {
        Self {
            kind,
            life,
            load,
            savr,
            dens: DEFAULT_DENSITY,
            heat: 8000.0,
            stot: DEFAULT_TOTAL_MINERAL,
            seff: DEFAULT_EFFECTIVE_MINERAL,
            mois: 0.0,
        }
    }

    pub fn with_heat(mut self, heat: f64) -> Self {
        self.heat = heat;
        self
    }

    pub fn with_density(mut self, dens: f64) -> Self {
        self.dens = dens;
        self
    }

    pub fn with_minerals(mut self, stot: f64, seff: f64) -> Self {
        self.stot = stot;
        self.seff = seff;
        self
    }

    /// Mean total surface area per unit bed area (ft²/ft²)
    pub fn surface_area(&self) -> f64 {
        if self.dens > 0.0 {
            self.load * self.savr / self.dens
        } else {
            0.0
        }
    }
}

/// Loads, SAVRs and heats of a standard five-class fuel description
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardFuel {
    pub load1: f64,
    pub load10: f64,
    pub load100: f64,
    pub load_herb: f64,
    pub load_wood: f64,
    pub savr1: f64,
    pub savr_herb: f64,
    pub savr_wood: f64,
    pub heat_dead: f64,
    pub heat_live: f64,
}

impl StandardFuel {
    /// 1-h, 10-h, 100-h, live herb, live wood and an empty dead-herb slot
    pub fn particles(&self) -> Vec<FuelParticle> {
        use ParticleKind as K;
        vec![
            FuelParticle::new(K::Dead1, Life::Dead, self.load1, self.savr1).with_heat(self.heat_dead),
            FuelParticle::new(K::Dead10, Life::Dead, self.load10, 109.0).with_heat(self.heat_dead),
            FuelParticle::new(K::Dead100, Life::Dead, self.load100, 30.0).with_heat(self.heat_dead),
            FuelParticle::new(K::LiveHerb, Life::LiveHerb, self.load_herb, self.savr_herb)
                .with_heat(self.heat_live),
            FuelParticle::new(K::LiveWood, Life::LiveWood, self.load_wood, self.savr_wood)
                .with_heat(self.heat_live),
            FuelParticle::new(K::DeadHerb, Life::Dead, 0.0, self.savr_herb).with_heat(self.heat_dead),
        ]
    }
}

/// Palmetto-gallberry loads (lb/ft²) in particle order
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PalmettoLoads {
    pub dead1: f64,
    pub dead10: f64,
    pub dead_foliage: f64,
    pub live1: f64,
    pub live10: f64,
    pub live_foliage: f64,
    pub litter: f64,
}

impl PalmettoLoads {
    /// Seven particles with the Hough and Albini (1978) properties
    pub fn particles(&self) -> Vec<FuelParticle> {
        use ParticleKind as K;
        let dead = |kind, load, savr| {
            FuelParticle::new(kind, Life::Dead, load, savr)
                .with_heat(8300.0)
                .with_density(30.0)
                .with_minerals(0.030, 0.010)
        };
        let live = |kind, life, load, savr| {
            FuelParticle::new(kind, life, load, savr)
                .with_heat(8300.0)
                .with_density(46.0)
                .with_minerals(0.030, 0.015)
        };
        vec![
            dead(K::Dead1, self.dead1, 350.0),
            dead(K::Dead10, self.dead10, 140.0),
            dead(K::Other, self.dead_foliage, 2000.0),
            live(K::Other, Life::LiveWood, self.live1, 350.0),
            live(K::Other, Life::LiveWood, self.live10, 140.0),
            live(K::LiveHerb, Life::LiveHerb, self.live_foliage, 2000.0),
            FuelParticle::new(K::Litter, Life::Litter, self.litter, 2000.0)
                .with_heat(8300.0)
                .with_density(30.0)
                .with_minerals(0.030, 0.010),
        ]
    }
}

/// Aspen loads (lb/ft²) and SAVRs (ft²/ft³)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AspenFuel {
    pub load_dead1: f64,
    pub load_dead10: f64,
    pub load_live_herb: f64,
    pub load_live_woody: f64,
    pub savr_dead1: f64,
    pub savr_dead10: f64,
    pub savr_live_herb: f64,
    pub savr_live_woody: f64,
}

impl AspenFuel {
    pub fn particles(&self) -> Vec<FuelParticle> {
        use ParticleKind as K;
        let p = |kind, life, load, savr| FuelParticle::new(kind, life, load, savr).with_minerals(0.055, 0.010);
        vec![
            p(K::Dead1, Life::Dead, self.load_dead1, self.savr_dead1),
            p(K::Dead10, Life::Dead, self.load_dead10, self.savr_dead10),
            p(K::LiveHerb, Life::LiveHerb, self.load_live_herb, self.savr_live_herb),
            p(K::LiveWood, Life::LiveWood, self.load_live_woody, self.savr_live_woody),
        ]
    }
}

/// Per-category (dead, live) totals used by the reaction intensity
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LifeTotals {
    /// Surface-area weighting of the category within the bed
    pub area_fraction: f64,
    /// Net (mineral-free) area-weighted load (lb/ft²)
    pub net_load: f64,
    /// Area-weighted heat of combustion (Btu/lb)
    pub heat: f64,
    /// Area-weighted effective mineral content
    pub seff: f64,
}

/// Bed-level Rothermel intermediates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelBedState {
    /// Characteristic SAVR (ft²/ft³)
    pub sigma: f64,
    /// Bulk density (lb/ft³)
    pub bulk_density: f64,
    /// Packing ratio
    pub packing_ratio: f64,
    /// Packing ratio over optimum packing ratio
    pub beta_ratio: f64,
    /// Optimum reaction velocity (1/min)
    pub gamma: f64,
    /// Wind factor coefficients C, B and E
    pub wind_c: f64,
    pub wind_b: f64,
    pub wind_e: f64,
    /// Slope factor coefficient (multiplies slope²)
    pub slope_k: f64,
    /// Dead and live totals
    pub life: [LifeTotals; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_particles() {
        let fuel = StandardFuel {
            load1: 0.1,
            load10: 0.2,
            load100: 0.3,
            load_herb: 0.4,
            load_wood: 0.5,
            savr1: 2000.0,
            savr_herb: 1800.0,
            savr_wood: 1500.0,
            heat_dead: 8000.0,
            heat_live: 9000.0,
        };
        let parts = fuel.particles();
        assert_eq!(parts.len(), 6);
        assert_eq!(parts[1].savr, 109.0);
        assert_eq!(parts[2].savr, 30.0);
        assert_eq!(parts[4].heat, 9000.0);
        assert_eq!(parts[5].kind, ParticleKind::DeadHerb);
        assert_eq!(parts[5].load, 0.0);
        assert_eq!(parts[5].savr, 1800.0);
        assert!(parts[5].life.is_dead());
    }

    #[test]
    fn test_palmetto_and_aspen_particle_counts() {
        let palmetto = PalmettoLoads::default().particles();
        assert_eq!(palmetto.len(), 7);
        assert_eq!(palmetto[6].life, Life::Litter);
        assert_eq!(palmetto[3].dens, 46.0);
        assert_eq!(palmetto[5].seff, 0.015);
        assert_eq!(AspenFuel::default().particles().len(), 4);
    }

    #[test]
    fn test_life_category() {
        assert_eq!(Life::Litter.category(), 0);
        assert_eq!(Life::LiveHerb.category(), 1);
        assert!(!Life::LiveWood.is_dead());
    }
}
