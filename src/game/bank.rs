use crate::game::resources::ResourceBundle;
use crate::types::Resource;

/// The bounded resource pool. Starts at 19 of each kind; distribution and
/// build payments move units between it and player hands, never creating or
/// destroying any.
#[derive(Debug, Clone)]
pub struct Bank {
    supply: ResourceBundle,
}

impl Bank {
    pub fn standard() -> Self {
        Self {
            supply: ResourceBundle::from_counts([19, 19, 19, 19, 19]),
        }
    }

    pub fn has_enough(&self, resource: Resource, amount: u8) -> bool {
        self.supply.get(resource) >= amount
    }

    /// Removes and returns `min(amount, available)`. Callers wanting
    /// all-or-nothing semantics check `has_enough` first.
    pub fn withdraw(&mut self, resource: Resource, amount: u8) -> u8 {
        self.supply.remove_up_to(resource, amount)
    }

    pub fn deposit(&mut self, resource: Resource, amount: u8) {
        self.supply.add(resource, amount);
    }

    pub fn remaining(&self, resource: Resource) -> u8 {
        self.supply.get(resource)
    }

    /// Takes a whole bundle back, e.g. a build payment.
    pub fn receive(&mut self, bundle: &ResourceBundle) {
        self.supply.add_bundle(bundle);
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::standard()
    }
}
