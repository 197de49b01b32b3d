//! Computation nodes and their activation state

mod registry;

pub use registry::FunId;

/// Active flags for every node
///
/// A fresh registry has every node inactive.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    active: Vec<bool>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self {
            active: vec![false; FunId::COUNT],
        }
    }

    pub fn is_active(&self, id: FunId) -> bool {
        self.active[id.index()]
    }

    pub fn set_active(&mut self, id: FunId, active: bool) {
        self.active[id.index()] = active;
    }

    /// Activates every node in `ids`
    pub fn activate(&mut self, ids: &[FunId]) {
        for &id in ids {
            self.set_active(id, true);
        }
    }

    /// Deactivates every node in `ids`
    pub fn deactivate(&mut self, ids: &[FunId]) {
        for &id in ids {
            self.set_active(id, false);
        }
    }

    /// Active nodes in execution order
    pub fn active(&self) -> impl Iterator<Item = FunId> + '_ {
        FunId::ALL.iter().copied().filter(|&id| self.is_active(id))
    }

    /// Deactivates every node
    pub fn clear(&mut self) {
        self.active.fill(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_registry_is_inactive() {
        let r = FunctionRegistry::new();
        assert_eq!(r.active().count(), 0);
    }

    #[test]
    fn test_active_in_execution_order() {
        let mut r = FunctionRegistry::new();
        r.activate(&[FunId::SafetyZoneRadius, FunId::MapScale, FunId::SurfaceFireSpreadAtHead]);
        let order: Vec<_> = r.active().collect();
        assert_eq!(
            order,
            vec![FunId::MapScale, FunId::SurfaceFireSpreadAtHead, FunId::SafetyZoneRadius]
        );
        r.deactivate(&[FunId::MapScale]);
        assert!(!r.is_active(FunId::MapScale));
        r.clear();
        assert_eq!(r.active().count(), 0);
    }
}
