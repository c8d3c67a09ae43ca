use std::ops::ControlFlow;

use crate::{
    core::{
        allocation::{Allocation, Entry},
        unit::Unit,
    },
    quantity::power::Megawatts,
};

/// Outcome of an overload resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum Resolution {
    /// The previous units made room, and the unit runs at its minimal power.
    Accommodated,

    /// The previous units could not absorb the overload, and the unit is switched off.
    Excluded { unabsorbed: Megawatts },
}

impl<'a> Allocation<'a> {
    /// Make room for the unit's minimal power by reducing the previously allocated units,
    /// starting from the most expensive one.
    ///
    /// Reductions applied before a failure are kept.
    pub fn resolve_overload(&mut self, unit: &'a Unit, overload: Megawatts) -> Resolution {
        let flow = self.entries.iter_mut().rev().try_fold(overload, |overload, entry| {
            let overload = entry.absorb(overload);
            if overload == Megawatts::ZERO {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(overload)
            }
        });
        match flow {
            ControlFlow::Break(()) => {
                self.push(unit, unit.min_power);
                Resolution::Accommodated
            }
            ControlFlow::Continue(unabsorbed) => {
                self.push(unit, Megawatts::ZERO);
                Resolution::Excluded { unabsorbed }
            }
        }
    }
}

impl Entry<'_> {
    /// Take as much of the overload as the entry's operating range allows and return the rest.
    fn absorb(&mut self, overload: Megawatts) -> Megawatts {
        let remaining_power = (self.power - overload).round_to_tenth();
        if remaining_power <= Megawatts::ZERO {
            self.power = Megawatts::ZERO;
            -remaining_power
        } else if remaining_power >= self.min_power {
            self.power = remaining_power;
            Megawatts::ZERO
        } else {
            // Cannot run between zero and the minimum:
            self.power = self.min_power;
            (self.min_power - remaining_power).round_to_tenth()
        }
    }
}
