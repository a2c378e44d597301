use serde::{Deserialize, Serialize};

/// A transport unit as supplied by the units provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub nomor_unit: String,
    pub driver_name: String,
}

impl Unit {
    /// Creates a unit from its ID, fleet number, and driver name.
    pub fn new(
        id: impl Into<String>,
        nomor_unit: impl Into<String>,
        driver_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            nomor_unit: nomor_unit.into(),
            driver_name: driver_name.into(),
        }
    }

    /// Label shown in the unit picker: `"{nomor_unit} - {driver_name}"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.nomor_unit, self.driver_name)
    }
}
