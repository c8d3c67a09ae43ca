use ordered_float::OrderedFloat;

use crate::core::{
    error::DispatchError,
    fuel::Fuels,
    unit::{Unit, UnitKind},
};

/// Marginal cost figure, the lower the earlier the unit is dispatched.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    derive_more::Display,
    derive_more::From,
)]
#[from(f64, OrderedFloat<f64>)]
pub struct Merit(pub OrderedFloat<f64>);

impl Merit {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
}

impl Unit {
    /// Calculate the unit's merit under the given fuel prices.
    ///
    /// When a carbon rate is given, the fuel cost gets **multiplied** by the carbon price
    /// (carbon rate times the CO₂ price).
    pub fn merit(&self, fuels: &Fuels, carbon_rate: Option<f64>) -> Result<Merit, DispatchError> {
        let fuel_price = match self.kind {
            UnitKind::WindTurbine => return Ok(Merit::ZERO),
            UnitKind::GasFired => fuels.gas,
            UnitKind::Turbojet => fuels.kerosine,
        };
        if !(self.efficiency.is_finite() && self.efficiency > 0.0) {
            return Err(DispatchError::InvalidUnit {
                name: self.name.clone(),
                efficiency: self.efficiency,
            });
        }
        let fuel_cost = fuel_price.0 / self.efficiency;
        Ok(Merit::from(carbon_rate.map_or(fuel_cost, |rate| fuel_cost * (rate * fuels.co2.0))))
    }
}
