use crate::wire;
use serde::{Deserialize, Serialize};

/// Linking component IDs with their respective microgrid ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicrogridComponentIDs {
    pub microgrid_id: u64,
    /// Component IDs belonging to this microgrid, order preserved as
    /// reported on the wire.
    pub component_ids: Vec<u64>,
}

impl MicrogridComponentIDs {
    pub fn from_wire(ids: wire::microgrid_models::MicrogridComponentIDs) -> Self {
        Self {
            microgrid_id: ids.microgrid_id,
            component_ids: ids.component_ids,
        }
    }

    pub fn to_wire(&self) -> wire::microgrid_models::MicrogridComponentIDs {
        wire::microgrid_models::MicrogridComponentIDs {
            microgrid_id: self.microgrid_id,
            component_ids: self.component_ids.clone(),
        }
    }
}
