use crate::{
    core::{cost::Merit, error::DispatchError, fuel::Fuels, unit::Unit},
    prelude::*,
};

#[derive(Copy, Clone, Debug)]
pub struct MeritEntry<'a> {
    pub unit: &'a Unit,
    pub merit: Merit,
}

/// Units ranked by their merit, the cheapest first.
#[derive(Clone, Debug, derive_more::Deref)]
pub struct MeritOrder<'a>(Vec<MeritEntry<'a>>);

impl<'a> MeritOrder<'a> {
    #[instrument(skip_all, fields(n_units = units.len()))]
    pub fn rank(
        units: &'a [Unit],
        fuels: &Fuels,
        carbon_rate: Option<f64>,
    ) -> Result<Self, DispatchError> {
        let mut entries = units
            .iter()
            .map(|unit| unit.merit(fuels, carbon_rate).map(|merit| MeritEntry { unit, merit }))
            .collect::<Result<Vec<_>, _>>()?;

        // Stable, so that units of equal merit keep their input order:
        entries.sort_by_key(|entry| entry.merit);

        for entry in &entries {
            debug!(unit = %entry.unit.name, merit = %entry.merit, "ranked");
        }
        Ok(Self(entries))
    }
}
