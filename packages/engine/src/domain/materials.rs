//! Material table - families, fall direction, flammability, flow speed
//!
//! Behaviour is keyed off the family, never off inheritance. Every predicate
//! the rules need (traversal, flow-through, ignition) lives here so each
//! family derives it from the same table.

use super::cell::{
    Material, COLOR_BEDROCK, COLOR_EMPTY, COLOR_FIRE, COLOR_SAND, COLOR_SMOKE, COLOR_STONE,
    COLOR_WATER, COLOR_WOOD,
};

pub type MaterialId = u8;

pub const MATERIAL_COUNT: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    Empty,
    MovableSolid,
    UnmovableSolid,
    Liquid,
    Gas,
    /// Bedrock: the wall around (and optionally inside) the world.
    Boundary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallDirection {
    Up,
    Down,
    None,
}

impl FallDirection {
    /// Row delta of one fall step (+y is down).
    #[inline]
    pub fn dy(self) -> i32 {
        match self {
            FallDirection::Up => -1,
            FallDirection::Down => 1,
            FallDirection::None => 0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MaterialProps {
    pub name: &'static str,
    pub family: Family,
    pub fall: FallDirection,
    /// Whether fall speed is multiplied by the gravity acceleration each frame.
    pub accelerates: bool,
    /// Per-test chance to catch fire from a burning neighbour.
    pub flammability: f64,
    /// Max cells scanned per side when flowing (fluids only).
    pub flow_speed: u32,
    pub color: u32,
}

pub const MATERIAL_DATA: [MaterialProps; MATERIAL_COUNT] = [
    MaterialProps { name: "empty", family: Family::Empty, fall: FallDirection::None, accelerates: false, flammability: 0.0, flow_speed: 0, color: COLOR_EMPTY },
    MaterialProps { name: "sand", family: Family::MovableSolid, fall: FallDirection::Down, accelerates: true, flammability: 0.0, flow_speed: 0, color: COLOR_SAND },
    MaterialProps { name: "water", family: Family::Liquid, fall: FallDirection::Down, accelerates: true, flammability: 0.0, flow_speed: 5, color: COLOR_WATER },
    MaterialProps { name: "smoke", family: Family::Gas, fall: FallDirection::Up, accelerates: false, flammability: 0.0, flow_speed: 3, color: COLOR_SMOKE },
    MaterialProps { name: "stone", family: Family::UnmovableSolid, fall: FallDirection::None, accelerates: false, flammability: 0.0, flow_speed: 0, color: COLOR_STONE },
    MaterialProps { name: "wood", family: Family::UnmovableSolid, fall: FallDirection::None, accelerates: false, flammability: 0.01, flow_speed: 0, color: COLOR_WOOD },
    MaterialProps { name: "fire", family: Family::UnmovableSolid, fall: FallDirection::None, accelerates: false, flammability: 0.0, flow_speed: 0, color: COLOR_FIRE },
    MaterialProps { name: "bedrock", family: Family::Boundary, fall: FallDirection::None, accelerates: false, flammability: 0.0, flow_speed: 0, color: COLOR_BEDROCK },
];

#[inline]
pub fn props(material: Material) -> &'static MaterialProps {
    &MATERIAL_DATA[material as usize]
}

#[inline]
pub fn family_of(material: Material) -> Family {
    props(material).family
}

#[inline]
pub fn is_gas(material: Material) -> bool {
    family_of(material) == Family::Gas
}

#[inline]
pub fn is_fluid(material: Material) -> bool {
    matches!(family_of(material), Family::Liquid | Family::Gas)
}

/// Can `mover` occupy or pass through a cell holding `target`?
#[inline]
pub fn can_traverse(mover: Material, target: Material) -> bool {
    if target == Material::Empty {
        return true;
    }
    match family_of(mover) {
        Family::MovableSolid | Family::UnmovableSolid => is_fluid(target),
        Family::Liquid => is_gas(target),
        Family::Gas | Family::Empty | Family::Boundary => false,
    }
}

/// Relaxed traversal used only by the flow search: fluids see through fluids.
#[inline]
pub fn can_flow_through(mover: Material, target: Material) -> bool {
    can_traverse(mover, target) || is_fluid(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_discriminant() {
        for m in Material::ALL {
            assert_eq!(props(m).name, m.name());
        }
        assert_eq!(props(Material::Water).flow_speed, 5);
        assert_eq!(props(Material::Wood).flammability, 0.01);
    }

    #[test]
    fn bedrock_is_never_traversable() {
        for m in Material::ALL {
            assert!(!can_traverse(m, Material::Bedrock), "{:?} traversed bedrock", m);
            assert!(!can_flow_through(m, Material::Bedrock));
        }
    }

    #[test]
    fn traversal_by_family() {
        assert!(can_traverse(Material::Sand, Material::Water));
        assert!(can_traverse(Material::Sand, Material::Smoke));
        assert!(!can_traverse(Material::Sand, Material::Sand));
        assert!(!can_traverse(Material::Sand, Material::Stone));

        assert!(can_traverse(Material::Water, Material::Empty));
        assert!(can_traverse(Material::Water, Material::Smoke));
        assert!(!can_traverse(Material::Water, Material::Water));
        assert!(!can_traverse(Material::Water, Material::Sand));

        assert!(can_traverse(Material::Smoke, Material::Empty));
        assert!(!can_traverse(Material::Smoke, Material::Water));
    }

    #[test]
    fn fluids_flow_through_fluids_only() {
        assert!(can_flow_through(Material::Water, Material::Water));
        assert!(can_flow_through(Material::Smoke, Material::Water));
        assert!(!can_flow_through(Material::Water, Material::Stone));
        assert!(!can_flow_through(Material::Water, Material::Fire));
    }
}
