use crate::{
    core::{
        fuel::Fuels,
        unit::{Unit, UnitKind},
    },
    quantity::power::Megawatts,
};

impl Unit {
    /// Maximum power the unit can deliver right now.
    ///
    /// Wind turbines are derated by the wind availability, other units deliver their nominal power.
    pub fn capacity(&self, fuels: &Fuels) -> Megawatts {
        match self.kind {
            UnitKind::WindTurbine => Megawatts(self.max_power.0 * fuels.wind.to_proportion()),
            UnitKind::GasFired | UnitKind::Turbojet => self.max_power,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::{
        percent::Percent,
        price::{EuroPerMegawattHour, EuroPerTonne},
    };

    fn fuels(wind: f64) -> Fuels {
        Fuels::builder()
            .gas(EuroPerMegawattHour(13.4))
            .kerosine(EuroPerMegawattHour(50.8))
            .co2(EuroPerTonne(20.0))
            .wind(Percent(wind))
            .build()
    }

    #[test]
    fn test_wind_turbine() {
        let unit = Unit::builder()
            .name("windpark1")
            .kind(UnitKind::WindTurbine)
            .max_power(Megawatts(200.0))
            .build();
        assert_eq!(unit.capacity(&fuels(50.0)), Megawatts(100.0));
        assert_eq!(unit.capacity(&fuels(0.0)), Megawatts::ZERO);
        assert_eq!(unit.capacity(&fuels(100.0)), Megawatts(200.0));
    }

    #[test]
    fn test_wind_turbine_fractional() {
        let unit = Unit::builder()
            .name("windpark2")
            .kind(UnitKind::WindTurbine)
            .max_power(Megawatts(36.22))
            .build();
        assert_eq!(unit.capacity(&fuels(50.0)), Megawatts(18.11));
    }

    #[test]
    fn test_thermal_ignores_wind() {
        let unit = Unit::builder()
            .name("gasfiredbig1")
            .kind(UnitKind::GasFired)
            .efficiency(0.53)
            .min_power(Megawatts(100.0))
            .max_power(Megawatts(200.0))
            .build();
        assert_eq!(unit.capacity(&fuels(50.0)), Megawatts(200.0));
    }
}
