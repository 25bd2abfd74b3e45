//! Cell values - one material tag plus the little per-cell state it needs
//!
//! A cell has no identity beyond its grid position. Moving a cell copies the
//! value (fall speed included) to the destination; nothing is allocated or
//! destroyed except when a rule spawns or removes a cell outright.

use super::materials::{props, MaterialId, MATERIAL_COUNT};

// ABGR packed colors (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA])
pub const COLOR_EMPTY: u32 = 0xFF00_0000;
pub const COLOR_SAND: u32 = 0xFF80_B2C2;
pub const COLOR_WATER: u32 = 0xFFA0_6B1C;
pub const COLOR_SMOKE: u32 = 0xFF5A_5A5A;
pub const COLOR_STONE: u32 = 0xFF80_8080;
pub const COLOR_WOOD: u32 = 0xFF37_4E6F;
pub const COLOR_FIRE: u32 = 0xFF22_58E2;
pub const COLOR_BEDROCK: u32 = 0xFFFF_FFFF;

/// Closed set of compiled-in materials.
///
/// The discriminant doubles as the id exported to JS and as the index into
/// [`MATERIAL_DATA`](super::materials::MATERIAL_DATA).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Material {
    Empty = 0,
    Sand = 1,
    Water = 2,
    Smoke = 3,
    Stone = 4,
    Wood = 5,
    Fire = 6,
    Bedrock = 7,
}

impl Material {
    pub const ALL: [Material; MATERIAL_COUNT] = [
        Material::Empty,
        Material::Sand,
        Material::Water,
        Material::Smoke,
        Material::Stone,
        Material::Wood,
        Material::Fire,
        Material::Bedrock,
    ];

    #[inline]
    pub fn id(self) -> MaterialId {
        self as MaterialId
    }

    #[inline]
    pub fn from_id(id: MaterialId) -> Option<Material> {
        Self::ALL.get(id as usize).copied()
    }

    #[inline]
    pub fn name(self) -> &'static str {
        props(self).name
    }
}

/// A single grid cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub material: Material,
    /// Cosmetic only, never read by the rules.
    pub color: u32,
    /// Vertical cells-per-frame multiplier, always >= 1.0.
    pub fall_speed: f32,
}

impl Cell {
    pub const EMPTY: Cell = Cell { material: Material::Empty, color: COLOR_EMPTY, fall_speed: 1.0 };

    /// What every out-of-bounds read returns.
    pub const BEDROCK: Cell = Cell { material: Material::Bedrock, color: COLOR_BEDROCK, fall_speed: 1.0 };

    #[inline]
    pub fn new(material: Material) -> Self {
        Self {
            material,
            color: props(material).color,
            fall_speed: 1.0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.material == Material::Empty
    }

    #[inline]
    pub fn with_fall_speed(self, fall_speed: f32) -> Self {
        debug_assert!(fall_speed >= 1.0, "fall speed below 1.0: {}", fall_speed);
        Self { fall_speed, ..self }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}

impl From<Material> for Cell {
    fn from(material: Material) -> Self {
        Cell::new(material)
    }
}
