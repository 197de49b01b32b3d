//! Variable values, display conversion and masking flags

use super::registry::{Items, VarId, VarKind};
use crate::error::{EqError, Result};
use crate::tokenizer::{self, LIST_DELIMITERS};
use crate::units;

/// One named, unit-aware value slot
///
/// The native value is the single source of truth. The display value is
/// recomputed from it on every write and is never read back implicitly.
#[derive(Debug, Clone)]
pub struct Variable {
    id: VarId,
    items: Vec<String>,
    native: f64,
    display: f64,
    display_units: String,
    factor: f64,
    offset: f64,
    decimals: u8,
    active_item: usize,
    store: String,
    tokens: usize,
    label: String,
    /// Shown to the user as an entry field
    pub is_user_input: bool,
    /// Shown to the user as a result
    pub is_user_output: bool,
    /// Held at a fixed value by the current configuration
    pub is_constant: bool,
}

impl Variable {
    fn new(id: VarId, fuel_models: &[String], scenarios: &[String]) -> Result<Self> {
        let spec = id.spec();
        let (factor, offset) = units::factor_offset(spec.native_units, spec.display_units)?;
        let items = match spec.kind {
            VarKind::Discrete(Items::Static(list)) => {
                list.iter().map(|s| (*s).to_string()).collect()
            }
            VarKind::Discrete(Items::FuelModels) => fuel_models.to_vec(),
            VarKind::Discrete(Items::MoistureScenarios) => scenarios.to_vec(),
            VarKind::Continuous | VarKind::List | VarKind::Text => Vec::new(),
        };
        Ok(Self {
            id,
            items,
            native: 0.0,
            display: offset,
            display_units: spec.display_units.to_string(),
            factor,
            offset,
            decimals: spec.decimals,
            active_item: 0,
            store: String::new(),
            tokens: 0,
            label: String::new(),
            is_user_input: false,
            is_user_output: false,
            is_constant: false,
        })
    }

    pub fn id(&self) -> VarId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn kind(&self) -> VarKind {
        self.id.spec().kind
    }

    /// Value in native units
    pub fn native(&self) -> f64 {
        self.native
    }

    /// Value in display units
    pub fn display(&self) -> f64 {
        self.display
    }

    pub fn native_units(&self) -> &'static str {
        self.id.spec().native_units
    }

    pub fn display_units(&self) -> &str {
        &self.display_units
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: &str) {
        label.clone_into(&mut self.label);
    }

    /// Sets the native value and recomputes the display value
    pub fn update(&mut self, value: f64) {
        self.native = value;
        self.display = value * self.factor + self.offset;
    }

    /// Sets the native value from a display-unit value
    pub fn update_display(&mut self, value: f64) {
        self.update((value - self.offset) / self.factor);
    }

    /// Selects a discrete item; the native value becomes the item's index
    pub fn update_item(&mut self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(EqError::ItemOutOfRange {
                variable: self.name(),
                index,
                count: self.items.len(),
            });
        }
        self.active_item = index;
        self.update(index as f64);
        Ok(())
    }

    /// Index of the active discrete item
    pub fn active_item(&self) -> usize {
        self.active_item
    }

    /// Name of the active discrete item, empty for non-discrete variables
    pub fn active_item_name(&self) -> &str {
        self.items.get(self.active_item).map_or("", String::as_str)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Raw entry text
    pub fn text(&self) -> &str {
        &self.store
    }

    /// Number of delimited tokens in the raw entry
    pub fn token_count(&self) -> usize {
        self.tokens
    }

    /// Stores raw entry text and derives the value the variable's kind implies
    ///
    /// Continuous and list entries are read in display units. Discrete entries
    /// select the item with the matching name.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        // a bad item name leaves the entry unchanged
        let index = match self.kind() {
            VarKind::Discrete(_) => {
                let wanted = text.trim();
                let index = self.items.iter().position(|item| item == wanted).ok_or(EqError::ItemOutOfRange {
                    variable: self.name(),
                    index: self.items.len(),
                    count: self.items.len(),
                })?;
                Some(index)
            }
            _ => None,
        };

        text.clone_into(&mut self.store);
        self.tokens = tokenizer::count(text, LIST_DELIMITERS);
        match (self.kind(), index) {
            (VarKind::Continuous | VarKind::List, _) => {
                self.update_display(tokenizer::number(text, LIST_DELIMITERS, 0));
            }
            (_, Some(index)) => self.update_item(index)?,
            _ => {}
        }
        Ok(())
    }

    /// Rewrites the raw text from the display value
    pub fn sync_text(&mut self) {
        self.store = format!("{:.*}", usize::from(self.decimals), self.display);
        self.tokens = 1;
    }

    /// Token `index` of the raw entry converted from display to native units
    pub fn token_native(&self, index: usize) -> f64 {
        (tokenizer::number(&self.store, LIST_DELIMITERS, index) - self.offset) / self.factor
    }

    /// Changes the display units; the native value is untouched
    pub fn set_display_units(&mut self, units_name: &str) -> Result<()> {
        let (factor, offset) = units::factor_offset(self.native_units(), units_name)?;
        self.factor = factor;
        self.offset = offset;
        units_name.clone_into(&mut self.display_units);
        self.update(self.native);
        Ok(())
    }

    fn clear_masks(&mut self) {
        self.is_user_input = false;
        self.is_user_output = false;
        self.is_constant = false;
    }
}

/// All variables of a computation graph, indexed by [`VarId`]
#[derive(Debug, Clone)]
pub struct VariableStore {
    vars: Vec<Variable>,
}

impl VariableStore {
    /// Builds every variable with zero values and cleared masks
    pub fn new(fuel_models: &[String], scenarios: &[String]) -> Result<Self> {
        let vars = VarId::ALL
            .iter()
            .map(|&id| Variable::new(id, fuel_models, scenarios))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { vars })
    }

    pub fn get(&self, id: VarId) -> &Variable {
        &self.vars[id.index()]
    }

    pub fn get_mut(&mut self, id: VarId) -> &mut Variable {
        &mut self.vars[id.index()]
    }

    /// Looks up a variable by external name
    pub fn by_name(&self, name: &str) -> Result<&Variable> {
        VarId::from_name(name)
            .map(|id| self.get(id))
            .ok_or_else(|| EqError::UnknownVariable(name.to_string()))
    }

    /// Mutable lookup by external name
    pub fn by_name_mut(&mut self, name: &str) -> Result<&mut Variable> {
        let id = VarId::from_name(name).ok_or_else(|| EqError::UnknownVariable(name.to_string()))?;
        Ok(self.get_mut(id))
    }

    /// Native value
    pub fn value(&self, id: VarId) -> f64 {
        self.vars[id.index()].native
    }

    /// Writes a native value
    pub fn set(&mut self, id: VarId, value: f64) {
        self.vars[id.index()].update(value);
    }

    /// Active item index of a discrete variable
    pub fn item(&self, id: VarId) -> usize {
        self.vars[id.index()].active_item
    }

    pub fn item_name(&self, id: VarId) -> &str {
        self.vars[id.index()].active_item_name()
    }

    pub fn set_item(&mut self, id: VarId, index: usize) -> Result<()> {
        self.vars[id.index()].update_item(index)
    }

    /// Selects a discrete item by its name
    pub fn set_item_by_name(&mut self, id: VarId, name: &str) -> Result<()> {
        let v = &mut self.vars[id.index()];
        let index = v.items.iter().position(|item| item == name).ok_or(EqError::ItemOutOfRange {
            variable: v.name(),
            index: v.items.len(),
            count: v.items.len(),
        })?;
        v.update_item(index)
    }

    /// Sets the value in display units
    pub fn set_display(&mut self, id: VarId, value: f64) {
        self.vars[id.index()].update_display(value);
    }

    pub fn text(&self, id: VarId) -> &str {
        &self.vars[id.index()].store
    }

    pub fn set_text(&mut self, id: VarId, text: &str) -> Result<()> {
        self.vars[id.index()].set_text(text)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.vars.iter()
    }

    /// Variables currently shown as entry fields
    pub fn user_inputs(&self) -> impl Iterator<Item = VarId> + '_ {
        self.vars.iter().filter(|v| v.is_user_input).map(|v| v.id)
    }

    /// Variables currently shown as results
    pub fn user_outputs(&self) -> impl Iterator<Item = VarId> + '_ {
        self.vars.iter().filter(|v| v.is_user_output).map(|v| v.id)
    }

    /// Clears input, output and constant flags on every variable
    pub fn clear_masks(&mut self) {
        self.vars.iter_mut().for_each(Variable::clear_masks);
    }
}
