use crate::{
    core::{fuel::Fuels, merit::MeritOrder, overload::Resolution, unit::Unit},
    prelude::*,
    quantity::power::Megawatts,
};

/// Power assigned to a unit while the allocation is being built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<'a> {
    pub name: &'a str,
    pub power: Megawatts,
    pub min_power: Megawatts,
}

/// Units considered so far together with their assigned power, in the merit order.
#[derive(Clone, Debug, Default)]
pub struct Allocation<'a> {
    pub(super) entries: Vec<Entry<'a>>,
}

impl<'a> Allocation<'a> {
    /// Distribute the required load over the units, walking them in the merit order.
    #[instrument(skip_all, fields(required_load = %required_load))]
    pub fn allocate(
        merit_order: &MeritOrder<'a>,
        fuels: &Fuels,
        required_load: Megawatts,
    ) -> Self {
        let mut allocation = Self::default();
        for entry in merit_order.iter() {
            allocation.allocate_unit(entry.unit, fuels, required_load);
            debug!(total = %allocation.total(), "allocated");
        }
        allocation
    }

    fn allocate_unit(&mut self, unit: &'a Unit, fuels: &Fuels, required_load: Megawatts) {
        let remaining_load = (required_load - self.total()).round_to_tenth();
        if remaining_load == Megawatts::ZERO {
            self.push(unit, Megawatts::ZERO);
            return;
        }

        let capacity = unit.capacity(fuels).floor_to_tenth();
        if remaining_load >= capacity {
            self.push(unit, capacity);
        } else if remaining_load < unit.min_power {
            // The unit cannot run below its minimum, so the previous units have to make room:
            let overload = (unit.min_power - remaining_load).round_to_tenth();
            if overload == Megawatts::ZERO {
                self.push(unit, unit.min_power);
                return;
            }
            warn!(unit = %unit.name, %overload, "overload detected, redistributing…");
            match self.resolve_overload(unit, overload) {
                Resolution::Accommodated => {
                    for entry in self.entries() {
                        info!(unit = entry.name, power = %entry.power, "corrected");
                    }
                }
                Resolution::Excluded { unabsorbed } => {
                    warn!(unit = %unit.name, %unabsorbed, "failed to include the unit");
                }
            }
        } else {
            self.push(unit, remaining_load);
        }
    }

    /// Append the unit with the specified power.
    pub(super) fn push(&mut self, unit: &'a Unit, power: Megawatts) {
        info!(unit = %unit.name, %power, "attributed");
        self.entries.push(Entry { name: &unit.name, power, min_power: unit.min_power });
    }

    /// Total power assigned so far.
    pub fn total(&self) -> Megawatts {
        self.entries.iter().map(|entry| entry.power).sum()
    }

    pub fn entries(&self) -> &[Entry<'a>] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::unit::UnitKind,
        quantity::{
            percent::Percent,
            price::{EuroPerMegawattHour, EuroPerTonne},
        },
    };

    fn fuels() -> Fuels {
        Fuels::builder()
            .gas(EuroPerMegawattHour(13.4))
            .kerosine(EuroPerMegawattHour(50.8))
            .co2(EuroPerTonne(20.0))
            .wind(Percent(50.0))
            .build()
    }

    fn gas_fired(name: &str, min_power: f64, max_power: f64) -> Unit {
        Unit::builder()
            .name(name)
            .kind(UnitKind::GasFired)
            .efficiency(0.53)
            .min_power(Megawatts(min_power))
            .max_power(Megawatts(max_power))
            .build()
    }

    fn wind_turbine(name: &str, max_power: f64) -> Unit {
        Unit::builder()
            .name(name)
            .kind(UnitKind::WindTurbine)
            .max_power(Megawatts(max_power))
            .build()
    }

    fn allocate(units: &[Unit], required_load: f64) -> Vec<f64> {
        let merit_order = MeritOrder::rank(units, &fuels(), None).unwrap();
        Allocation::allocate(&merit_order, &fuels(), Megawatts(required_load))
            .entries()
            .iter()
            .map(|entry| entry.power.0)
            .collect()
    }

    #[test]
    fn test_full_capacity() {
        assert_eq!(allocate(&[gas_fired("gasfiredbig1", 0.0, 100.0)], 100.0), [100.0]);
    }

    /// The last unit closes the gap exactly.
    #[test]
    fn test_partial_capacity() {
        let units = [gas_fired("gasfiredbig1", 50.0, 200.0)];
        assert_eq!(allocate(&units, 100.0), [100.0]);
    }

    /// Units after the load is met still appear in the allocation.
    #[test]
    fn test_load_met() {
        let units =
            [gas_fired("gasfiredbig1", 0.0, 200.0), gas_fired("gasfiredbig2", 0.0, 200.0)];
        assert_eq!(allocate(&units, 150.0), [150.0, 0.0]);
    }

    #[test]
    fn test_zero_load() {
        let units = [wind_turbine("windpark1", 200.0), gas_fired("gasfiredbig1", 100.0, 460.0)];
        assert_eq!(allocate(&units, 0.0), [0.0, 0.0]);
    }

    /// Wind capacity is derated by the availability.
    #[test]
    fn test_wind_derated() {
        let units = [wind_turbine("windpark1", 200.0), gas_fired("gasfiredbig1", 0.0, 460.0)];
        assert_eq!(allocate(&units, 300.0), [100.0, 200.0]);
    }

    /// The wind park makes room for the gas-fired minimum.
    #[test]
    fn test_overload_redistributed() {
        let units = [wind_turbine("windpark1", 900.0), gas_fired("gasfiredbig1", 100.0, 460.0)];
        assert_eq!(allocate(&units, 480.0), [380.0, 100.0]);
    }

    /// Nothing precedes the unit, so it gets excluded.
    #[test]
    fn test_overload_first_unit() {
        let units =
            [gas_fired("gasfiredbig1", 100.0, 460.0), gas_fired("gasfiredbig2", 100.0, 460.0)];
        assert_eq!(allocate(&units, 50.0), [0.0, 0.0]);
    }

    /// Capacity is rounded down, so the unit never goes over its maximum.
    #[test]
    fn test_capacity_rounded_down() {
        let units =
            [gas_fired("gasfiredbig1", 0.0, 100.06), gas_fired("gasfiredbig2", 0.0, 200.0)];
        assert_eq!(allocate(&units, 200.0), [100.0, 100.0]);
    }

    /// Derated capacity is issued in tenths of a megawatt.
    #[test]
    fn test_rounding() {
        let units = [wind_turbine("windpark1", 36.22), gas_fired("gasfiredbig1", 0.0, 460.0)];
        assert_eq!(allocate(&units, 100.0), [18.1, 81.9]);
    }
}
