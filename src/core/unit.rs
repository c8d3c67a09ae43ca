use std::str::FromStr;

use bon::Builder;

use crate::quantity::power::Megawatts;

/// Generating technology of a unit.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum UnitKind {
    /// Thermal unit burning gas.
    #[display("gasfired")]
    GasFired,

    /// Thermal unit burning kerosine.
    #[display("turbojet")]
    Turbojet,

    /// Intermittent unit, its output depends on the wind availability.
    #[display("windturbine")]
    WindTurbine,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown unit kind `{0}`")]
pub struct UnknownUnitKind(pub String);

impl FromStr for UnitKind {
    type Err = UnknownUnitKind;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "gasfired" => Ok(Self::GasFired),
            "turbojet" => Ok(Self::Turbojet),
            "windturbine" => Ok(Self::WindTurbine),
            _ => Err(UnknownUnitKind(kind.to_owned())),
        }
    }
}

/// Power plant as described by the request.
#[derive(Clone, Debug, Builder)]
pub struct Unit {
    #[builder(into)]
    pub name: String,

    pub kind: UnitKind,

    /// Fuel-to-power conversion efficiency, only meaningful for thermal units.
    #[builder(default)]
    pub efficiency: f64,

    /// Minimal power the unit produces whenever it is switched on.
    #[builder(default = Megawatts::ZERO)]
    pub min_power: Megawatts,

    /// Nominal maximum power.
    pub max_power: Megawatts,
}
