use serde::{Deserialize, Serialize};

/// Categories of components that can be part of a microgrid.
///
/// Same wire contract as [`super::metric::Metric`]: discriminants are the
/// wire enum codes, unknown codes resolve to `Unspecified`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    prost::Enumeration,
)]
#[repr(i32)]
pub enum ComponentCategory {
    Unspecified = 0,
    /// The point of connection to the public grid.
    Grid = 1,
    Meter = 2,
    Inverter = 3,
    Converter = 4,
    Battery = 5,
    EvCharger = 6,
    Electrolyzer = 7,
    /// Combined heat and power plant.
    Chp = 8,
}

impl ComponentCategory {
    /// Converts a wire enum code to a `ComponentCategory`.
    ///
    /// Total: unknown codes map to `ComponentCategory::Unspecified`.
    pub fn from_wire(code: i32) -> Self {
        Self::try_from(code).unwrap_or(Self::Unspecified)
    }

    /// Converts this `ComponentCategory` to its wire enum code.
    pub fn to_wire(self) -> i32 {
        self as i32
    }

    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ComponentCategory::Unspecified => "COMPONENT_CATEGORY_UNSPECIFIED",
            ComponentCategory::Grid => "COMPONENT_CATEGORY_GRID",
            ComponentCategory::Meter => "COMPONENT_CATEGORY_METER",
            ComponentCategory::Inverter => "COMPONENT_CATEGORY_INVERTER",
            ComponentCategory::Converter => "COMPONENT_CATEGORY_CONVERTER",
            ComponentCategory::Battery => "COMPONENT_CATEGORY_BATTERY",
            ComponentCategory::EvCharger => "COMPONENT_CATEGORY_EV_CHARGER",
            ComponentCategory::Electrolyzer => "COMPONENT_CATEGORY_ELECTROLYZER",
            ComponentCategory::Chp => "COMPONENT_CATEGORY_CHP",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "COMPONENT_CATEGORY_UNSPECIFIED" => Some(Self::Unspecified),
            "COMPONENT_CATEGORY_GRID" => Some(Self::Grid),
            "COMPONENT_CATEGORY_METER" => Some(Self::Meter),
            "COMPONENT_CATEGORY_INVERTER" => Some(Self::Inverter),
            "COMPONENT_CATEGORY_CONVERTER" => Some(Self::Converter),
            "COMPONENT_CATEGORY_BATTERY" => Some(Self::Battery),
            "COMPONENT_CATEGORY_EV_CHARGER" => Some(Self::EvCharger),
            "COMPONENT_CATEGORY_ELECTROLYZER" => Some(Self::Electrolyzer),
            "COMPONENT_CATEGORY_CHP" => Some(Self::Chp),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_roundtrip_all_categories() {
        for code in 0..=8 {
            let category = ComponentCategory::from_wire(code);
            assert_eq!(category.to_wire(), code);
            if code != 0 {
                assert_ne!(category, ComponentCategory::Unspecified);
            }
        }
    }

    #[test]
    fn test_unknown_code_falls_back_to_unspecified() {
        assert_eq!(
            ComponentCategory::from_wire(9),
            ComponentCategory::Unspecified
        );
        assert_eq!(
            ComponentCategory::from_wire(-3),
            ComponentCategory::Unspecified
        );
    }

    #[test]
    fn test_str_names() {
        assert_eq!(
            ComponentCategory::Battery.as_str_name(),
            "COMPONENT_CATEGORY_BATTERY"
        );
        assert_eq!(
            ComponentCategory::from_str_name("COMPONENT_CATEGORY_GRID"),
            Some(ComponentCategory::Grid)
        );
        assert_eq!(ComponentCategory::from_str_name("COMPONENT_CATEGORY"), None);
    }
}
