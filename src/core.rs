//! Merit-order dispatch of a required load over a fleet of power plants.

pub mod allocation;
pub mod capacity;
pub mod cost;
pub mod dispatcher;
pub mod error;
pub mod fuel;
pub mod merit;
pub mod overload;
pub mod plan;
pub mod unit;
