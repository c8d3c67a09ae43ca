use bon::Builder;

use crate::quantity::{
    percent::Percent,
    price::{EuroPerMegawattHour, EuroPerTonne},
};

/// Market conditions for a single dispatch.
#[derive(Copy, Clone, Debug, Builder)]
pub struct Fuels {
    pub gas: EuroPerMegawattHour,
    pub kerosine: EuroPerMegawattHour,
    pub co2: EuroPerTonne,

    /// Share of the nominal wind turbine power that is currently available.
    pub wind: Percent,
}
