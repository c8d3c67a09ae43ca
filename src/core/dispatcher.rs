use bon::Builder;

use crate::{
    core::{
        allocation::Allocation,
        error::DispatchError,
        fuel::Fuels,
        merit::MeritOrder,
        plan::Plan,
        unit::Unit,
    },
    prelude::*,
    quantity::power::Megawatts,
};

#[derive(Clone, Debug, Builder)]
pub struct DispatchRequest {
    pub load: Megawatts,

    /// Carbon pricing is only applied when the rate is present.
    pub carbon_rate: Option<f64>,

    pub fuels: Fuels,

    #[builder(default)]
    pub units: Vec<Unit>,
}

impl DispatchRequest {
    pub fn merit_order(&self) -> Result<MeritOrder<'_>, DispatchError> {
        MeritOrder::rank(&self.units, &self.fuels, self.carbon_rate)
    }
}

/// Split the required load over the units, so that the total matches the load exactly.
///
/// Every call builds its own allocation from scratch.
#[instrument(skip_all, fields(load = %request.load, n_units = request.units.len()))]
pub fn dispatch(request: &DispatchRequest) -> Result<Plan, DispatchError> {
    let merit_order = request.merit_order()?;
    let allocation = Allocation::allocate(&merit_order, &request.fuels, request.load);
    allocation.try_into_plan(request.load)
}
