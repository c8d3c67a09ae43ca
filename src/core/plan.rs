use serde::Serialize;

use crate::{
    core::{allocation::Allocation, error::DispatchError},
    quantity::power::Megawatts,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DispatchedUnit {
    pub name: String,

    #[serde(rename = "p")]
    pub power: Megawatts,
}

/// Final production plan in the merit order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, derive_more::Deref, derive_more::IntoIterator)]
#[serde(transparent)]
pub struct Plan(Vec<DispatchedUnit>);

impl Plan {
    pub fn total(&self) -> Megawatts {
        self.iter().map(|unit| unit.power).sum()
    }
}

impl Allocation<'_> {
    /// Verify that the allocation meets the required load and turn it into the plan.
    pub fn try_into_plan(self, required_load: Megawatts) -> Result<Plan, DispatchError> {
        let dispatched = self.total().round_to_tenth();
        let required = required_load.round_to_tenth();
        if dispatched != required {
            return Err(DispatchError::UnreachableLoad { dispatched, required });
        }
        Ok(Plan(
            self.entries
                .into_iter()
                .map(|entry| DispatchedUnit { name: entry.name.to_owned(), power: entry.power })
                .collect(),
        ))
    }
}
