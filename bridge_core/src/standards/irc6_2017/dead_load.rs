//! # Dead Load (Cl. 203)
//!
//! Unit weights of materials for computing dead load, tabulated by the
//! standard in t/m³. [`Material::unit_weight`] converts to kN/m³ with
//! g = 9.81 m/s².
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::standards::irc6_2017::Material;
//!
//! let rcc: Material = "concrete_cement_reinforced".parse().unwrap();
//! assert_eq!(rcc.unit_weight_t_m3(), 2.5);
//! assert!((rcc.unit_weight() - 24.525).abs() < 1e-9);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_non_negative, CalcError, CalcResult};
use crate::reference::{ClauseRef, Standard};
use crate::units::GRAVITY;

pub const DEAD_LOAD: ClauseRef = ClauseRef::new(Standard::Irc6_2017, "203");

/// Construction material listed under Cl. 203
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    AshlarGranite,
    AshlarSandstone,
    StoneSettsGranite,
    StoneSettsBasalt,
    BallastGranite,
    BallastBasalt,
    BrickworkPressedCement,
    BrickworkCommonCement,
    BrickworkCommonLime,
    ConcreteAsphalt,
    ConcreteBitumen,
    ConcreteCementPlain,
    ConcreteCementPlainPlums,
    ConcreteCementReinforced,
    ConcreteCementPrestressed,
    ConcreteLimeBrick,
    ConcreteLimeStone,
    EarthCompacted,
    Gravel,
    MacadamBinder,
    MacadamRolled,
    SandLoose,
    SandWet,
    RubbleStoneCoursed,
    StoneMasonryLime,
    Water,
    Wood,
    CastIron,
    WroughtIron,
    Steel,
}

impl Material {
    pub const ALL: [Material; 30] = [
        Material::AshlarGranite,
        Material::AshlarSandstone,
        Material::StoneSettsGranite,
        Material::StoneSettsBasalt,
        Material::BallastGranite,
        Material::BallastBasalt,
        Material::BrickworkPressedCement,
        Material::BrickworkCommonCement,
        Material::BrickworkCommonLime,
        Material::ConcreteAsphalt,
        Material::ConcreteBitumen,
        Material::ConcreteCementPlain,
        Material::ConcreteCementPlainPlums,
        Material::ConcreteCementReinforced,
        Material::ConcreteCementPrestressed,
        Material::ConcreteLimeBrick,
        Material::ConcreteLimeStone,
        Material::EarthCompacted,
        Material::Gravel,
        Material::MacadamBinder,
        Material::MacadamRolled,
        Material::SandLoose,
        Material::SandWet,
        Material::RubbleStoneCoursed,
        Material::StoneMasonryLime,
        Material::Water,
        Material::Wood,
        Material::CastIron,
        Material::WroughtIron,
        Material::Steel,
    ];

    /// Key used in parameter files
    pub fn key(&self) -> &'static str {
        match self {
            Material::AshlarGranite => "ashlar_granite",
            Material::AshlarSandstone => "ashlar_sandstone",
            Material::StoneSettsGranite => "stone_setts_granite",
            Material::StoneSettsBasalt => "stone_setts_basalt",
            Material::BallastGranite => "ballast_granite",
            Material::BallastBasalt => "ballast_basalt",
            Material::BrickworkPressedCement => "brickwork_pressed_cement",
            Material::BrickworkCommonCement => "brickwork_common_cement",
            Material::BrickworkCommonLime => "brickwork_common_lime",
            Material::ConcreteAsphalt => "concrete_asphalt",
            Material::ConcreteBitumen => "concrete_bitumen",
            Material::ConcreteCementPlain => "concrete_cement_plain",
            Material::ConcreteCementPlainPlums => "concrete_cement_plain_plums",
            Material::ConcreteCementReinforced => "concrete_cement_reinforced",
            Material::ConcreteCementPrestressed => "concrete_cement_prestressed",
            Material::ConcreteLimeBrick => "concrete_lime_brick",
            Material::ConcreteLimeStone => "concrete_lime_stone",
            Material::EarthCompacted => "earth_compacted",
            Material::Gravel => "gravel",
            Material::MacadamBinder => "macadam_binder",
            Material::MacadamRolled => "macadam_rolled",
            Material::SandLoose => "sand_loose",
            Material::SandWet => "sand_wet",
            Material::RubbleStoneCoursed => "rubble_stone_coursed",
            Material::StoneMasonryLime => "stone_masonry_lime",
            Material::Water => "water",
            Material::Wood => "wood",
            Material::CastIron => "cast_iron",
            Material::WroughtIron => "wrought_iron",
            Material::Steel => "steel",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Material::AshlarGranite => "Ashlar (granite)",
            Material::AshlarSandstone => "Ashlar (sandstone)",
            Material::StoneSettsGranite => "Stone setts (granite)",
            Material::StoneSettsBasalt => "Stone setts (basalt)",
            Material::BallastGranite => "Ballast (stone screened, granite)",
            Material::BallastBasalt => "Ballast (stone screened, basalt)",
            Material::BrickworkPressedCement => "Brickwork (pressed) in cement mortar",
            Material::BrickworkCommonCement => "Brickwork (common) in cement mortar",
            Material::BrickworkCommonLime => "Brickwork (common) in lime mortar",
            Material::ConcreteAsphalt => "Concrete (asphalt)",
            Material::ConcreteBitumen => "Concrete (bitumen)",
            Material::ConcreteCementPlain => "Concrete (cement) plain",
            Material::ConcreteCementPlainPlums => "Concrete (cement) plain with plums",
            Material::ConcreteCementReinforced => "Concrete (cement) reinforced",
            Material::ConcreteCementPrestressed => "Concrete (cement) prestressed",
            Material::ConcreteLimeBrick => "Concrete (lime) brick aggregate",
            Material::ConcreteLimeStone => "Concrete (lime) stone aggregate",
            Material::EarthCompacted => "Earth (compacted)",
            Material::Gravel => "Gravel",
            Material::MacadamBinder => "Macadam (binder premix)",
            Material::MacadamRolled => "Macadam (rolled)",
            Material::SandLoose => "Sand (loose)",
            Material::SandWet => "Sand (wet compressed)",
            Material::RubbleStoneCoursed => "Coursed rubble stone masonry (cement mortar)",
            Material::StoneMasonryLime => "Stone masonry (lime mortar)",
            Material::Water => "Water",
            Material::Wood => "Wood",
            Material::CastIron => "Cast iron",
            Material::WroughtIron => "Wrought iron",
            Material::Steel => "Steel (rolled or cast)",
        }
    }

    /// Unit weight as tabulated (t/m³)
    pub fn unit_weight_t_m3(&self) -> f64 {
        match self {
            Material::Wood => 0.8,
            Material::Water => 1.0,
            Material::BallastGranite | Material::ConcreteBitumen => 1.4,
            Material::BallastBasalt => 1.6,
            Material::SandLoose => 1.7,
            Material::BrickworkCommonLime | Material::Gravel => 1.8,
            Material::BrickworkCommonCement
            | Material::ConcreteLimeBrick
            | Material::SandWet => 1.9,
            Material::EarthCompacted => 2.0,
            Material::ConcreteLimeStone => 2.1,
            Material::BrickworkPressedCement
            | Material::ConcreteAsphalt
            | Material::MacadamBinder => 2.2,
            Material::AshlarSandstone | Material::StoneMasonryLime => 2.4,
            Material::ConcreteCementPlain
            | Material::ConcreteCementPlainPlums
            | Material::ConcreteCementReinforced
            | Material::ConcreteCementPrestressed => 2.5,
            Material::StoneSettsGranite
            | Material::MacadamRolled
            | Material::RubbleStoneCoursed => 2.6,
            Material::AshlarGranite | Material::StoneSettsBasalt => 2.7,
            Material::CastIron => 7.2,
            Material::WroughtIron => 7.7,
            Material::Steel => 7.8,
        }
    }

    /// Unit weight (kN/m³)
    pub fn unit_weight(&self) -> f64 {
        self.unit_weight_t_m3() * GRAVITY
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Material {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Material::ALL
            .iter()
            .copied()
            .find(|m| m.key() == s)
            .ok_or_else(|| CalcError::invalid_input("material", s, "Not a Cl. 203 material"))
    }
}

/// Weight of `volume_m3` of `material` (kN)
pub fn dead_weight(material: Material, volume_m3: f64) -> CalcResult<f64> {
    let volume = ensure_non_negative("volume_m3", volume_m3)?;
    Ok(material.unit_weight() * volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_materials_listed_once() {
        let mut keys: Vec<_> = Material::ALL.iter().map(|m| m.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 30);
    }

    #[test]
    fn test_unit_weights() {
        assert_eq!(Material::Steel.unit_weight_t_m3(), 7.8);
        assert_eq!(Material::Water.unit_weight_t_m3(), 1.0);
        assert_eq!(Material::Wood.unit_weight_t_m3(), 0.8);
        assert!((Material::Water.unit_weight() - 9.81).abs() < 1e-12);
    }

    #[test]
    fn test_parse_key() {
        assert_eq!("sand_wet".parse::<Material>().unwrap(), Material::SandWet);
        assert!("unobtainium".parse::<Material>().is_err());
        for m in Material::ALL {
            assert_eq!(m.key().parse::<Material>().unwrap(), m);
        }
    }

    #[test]
    fn test_dead_weight() {
        let w = dead_weight(Material::ConcreteCementReinforced, 2.0).unwrap();
        assert!((w - 49.05).abs() < 1e-9);
        assert!(dead_weight(Material::Steel, -1.0).is_err());
    }

    #[test]
    fn test_serde_key_matches() {
        let json = serde_json::to_string(&Material::StoneSettsBasalt).unwrap();
        assert_eq!(json, "\"stone_setts_basalt\"");
    }
}
