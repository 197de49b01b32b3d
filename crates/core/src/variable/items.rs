//! Item lists for discrete variables

pub const NO_YES: &[&str] = &["No", "Yes"];

pub const COMPASS: &[&str] = &[
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

pub const ATTACK_TACTIC: &[&str] = &["HeadAttack", "RearAttack"];

pub const CONTAIN_STATUS: &[&str] = &["Contained", "Withdrawn", "Escaped"];

pub const CROWN_FIRE_TYPE: &[&str] = &["Surface", "Torching", "ConditionalCrown", "Crowning"];

pub const WIND_DRIVEN: &[&str] = &["PlumeDominated", "WindDriven"];

pub const LIGHTNING_FUEL_TYPE: &[&str] = &[
    "PonderosaPineLitter",
    "PunkyWoodRottenChunky",
    "PunkyWoodPowderDeep",
    "PunkyWoodPowderShallow",
    "LodgepolePineDuff",
    "DouglasFirDuff",
    "HighAltitudeMixed",
    "PeatMoss",
];

pub const LIGHTNING_CHARGE: &[&str] = &["Negative", "Positive", "Unknown"];

pub const FIRE_SOURCE: &[&str] = &[
    "RidgeTop",
    "MidslopeWindward",
    "ValleyBottom",
    "MidslopeLeeward",
];

pub const ASPEN_SEVERITY: &[&str] = &["Low", "ModerateOrHigh"];

pub const ASPEN_TYPE: &[&str] = &[
    "AspenShrub",
    "AspenTallForb",
    "AspenLowForb",
    "MixedForb",
    "MixedShrub",
];

pub const LOAD_TRANSFER_EQ: &[&str] = &["Static", "Dynamic"];

pub const WIND_ADJ_METHOD: &[&str] = &["Sheltered", "Unsheltered", "UserInput"];

pub const SPECIES_MORTALITY: &[&str] = &["NonSpruce", "Spruce"];

/// Torching-tree species, in the order of the flame coefficient table
pub const SPECIES_SPOT: &[&str] = &[
    "ABBA", "ABGR", "ABLA", "PICO", "PIEC2", "PIEL", "PIEN", "PIMO3", "PIPA2", "PIPO", "PISE",
    "PITA", "PSME", "TSHE",
];

/// Mortality species, in the order of the bark coefficient table
pub const SPECIES: &[&str] = &[
    "ABAM", "ABCO", "ABGR", "ABLA", "ABMA", "CADE27", "JUOC", "LAOC", "PIAL", "PICO", "PIEN",
    "PIJE", "PILA", "PIMO3", "PIPO", "PSME", "THPL", "TSHE", "TSME",
];

