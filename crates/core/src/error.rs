//! Error taxonomy for the computation graph
//!
//! Lookup failures (unknown names, missing catalog entries, out-of-range
//! indices) abort the current computation. Near-zero denominators inside the
//! equations are not errors; they resolve to documented fallback values.

use thiserror::Error;

/// Errors raised by the variable store, the catalogs and the equation nodes
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EqError {
    /// No variable is registered under this name
    #[error("unknown variable \"{0}\"")]
    UnknownVariable(String),

    /// No computation node is registered under this name
    #[error("unknown function \"{0}\"")]
    UnknownFunction(String),

    /// No configuration property is registered under this name
    #[error("unknown configuration property \"{0}\"")]
    UnknownProperty(String),

    /// Property exists but holds a value of the other type
    #[error("configuration property \"{name}\" is not {expected}")]
    PropertyType {
        name: String,
        expected: &'static str,
    },

    /// Fuel model name missing from the fuel catalog
    #[error("fuel model \"{0}\" not found")]
    FuelModelNotFound(String),

    /// Moisture scenario name missing from the scenario catalog
    #[error("moisture scenario \"{0}\" not found")]
    MoistureScenarioNotFound(String),

    /// Species index beyond the coefficient table
    #[error("species index {index} is outside 0..{count} for {table}")]
    SpeciesOutOfRange {
        table: &'static str,
        index: usize,
        count: usize,
    },

    /// Discrete item index beyond the variable's item list
    #[error("item {index} is outside 0..{count} for {variable}")]
    ItemOutOfRange {
        variable: &'static str,
        index: usize,
        count: usize,
    },

    /// Unit name not in the unit table
    #[error("unknown units \"{0}\"")]
    UnknownUnits(String),

    /// Units belong to different dimensions
    #[error("cannot convert \"{from}\" to \"{to}\"")]
    IncompatibleUnits { from: String, to: String },

    /// Configuration file could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl EqError {
    /// Stable key handed to the localized-message service
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::UnknownVariable(_) => "EqCalc:VariableNotFound",
            Self::UnknownFunction(_) => "EqCalc:FunctionNotFound",
            Self::UnknownProperty(_) | Self::PropertyType { .. } => "EqCalc:PropertyNotFound",
            Self::FuelModelNotFound(_) => "EqCalc:FuelModelNotFound",
            Self::MoistureScenarioNotFound(_) => "EqCalc:MoisScenarioNotFound",
            Self::SpeciesOutOfRange { .. } => "EqCalc:SpeciesIndexOutOfRange",
            Self::ItemOutOfRange { .. } => "EqCalc:ItemIndexOutOfRange",
            Self::UnknownUnits(_) | Self::IncompatibleUnits { .. } => "EqCalc:UnitsConversion",
            Self::Config(_) => "EqCalc:Configuration",
        }
    }

    /// Context string accompanying the message key
    pub fn context(&self) -> String {
        match self {
            Self::UnknownVariable(s)
            | Self::UnknownFunction(s)
            | Self::UnknownProperty(s)
            | Self::FuelModelNotFound(s)
            | Self::MoistureScenarioNotFound(s)
            | Self::UnknownUnits(s)
            | Self::Config(s) => s.clone(),
            Self::PropertyType { name, .. } => name.clone(),
            Self::SpeciesOutOfRange { index, .. } | Self::ItemOutOfRange { index, .. } => {
                index.to_string()
            }
            Self::IncompatibleUnits { from, to } => format!("{from} -> {to}"),
        }
    }

    /// Renders this error through a message catalog
    pub fn localized(&self, catalog: &dyn MessageCatalog) -> String {
        catalog
            .message(self.message_key(), &self.context())
            .unwrap_or_else(|| self.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, EqError>;

/// Maps an error key plus context to a display string
pub trait MessageCatalog {
    /// Returns `None` when the key has no translation
    fn message(&self, key: &str, context: &str) -> Option<String>;
}

/// English catalog; defers to the error's own `Display`
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishMessages;

impl MessageCatalog for EnglishMessages {
    fn message(&self, _key: &str, _context: &str) -> Option<String> {
        None
    }
}
