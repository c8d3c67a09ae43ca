//! Production plan request document, as posted by the clients.

pub mod validator;

use serde::Deserialize;
use serde_json::Value;

use self::validator::{ValidationError, parse_carbon, validate};
use crate::{
    core::{
        dispatcher::DispatchRequest,
        error::DispatchError,
        fuel::Fuels,
        unit::{Unit, UnitKind},
    },
    quantity::{
        percent::Percent,
        power::Megawatts,
        price::{EuroPerMegawattHour, EuroPerTonne},
    },
};

/// Validated request document.
#[derive(Debug)]
pub struct Document {
    carbon: Option<f64>,
    payload: Payload,
}

impl Document {
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let document: Value = serde_json::from_slice(body).map_err(ValidationError::MalformedJson)?;
        Self::from_value(&document)
    }

    pub fn from_value(document: &Value) -> Result<Self, ValidationError> {
        let payload = validate(document)?;
        let carbon = parse_carbon(document)?;
        let payload = Payload::deserialize(payload).map_err(ValidationError::Deserialize)?;
        Ok(Self { carbon, payload })
    }

    pub fn into_request(self) -> Result<DispatchRequest, DispatchError> {
        let units = self
            .payload
            .power_plants
            .into_iter()
            .map(Unit::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DispatchRequest::builder()
            .load(self.payload.load)
            .maybe_carbon_rate(self.carbon)
            .fuels(self.payload.fuels.into())
            .units(units)
            .build())
    }
}

#[derive(Debug, Deserialize)]
struct Payload {
    load: Megawatts,

    fuels: FuelPrices,

    #[serde(rename = "powerplants")]
    power_plants: Vec<PowerPlant>,
}

#[derive(Debug, Deserialize)]
struct FuelPrices {
    #[serde(rename = "gas(euro/MWh)")]
    gas: EuroPerMegawattHour,

    #[serde(rename = "kerosine(euro/MWh)")]
    kerosine: EuroPerMegawattHour,

    #[serde(rename = "co2(euro/ton)")]
    co2: EuroPerTonne,

    #[serde(rename = "wind(%)")]
    wind: Percent,
}

impl From<FuelPrices> for Fuels {
    fn from(prices: FuelPrices) -> Self {
        Self::builder()
            .gas(prices.gas)
            .kerosine(prices.kerosine)
            .co2(prices.co2)
            .wind(prices.wind)
            .build()
    }
}

#[derive(Debug, Deserialize)]
struct PowerPlant {
    name: String,

    #[serde(rename = "type")]
    kind: String,

    efficiency: f64,

    #[serde(rename = "pmin")]
    min_power: Megawatts,

    #[serde(rename = "pmax")]
    max_power: Megawatts,
}

impl TryFrom<PowerPlant> for Unit {
    type Error = DispatchError;

    fn try_from(power_plant: PowerPlant) -> Result<Self, Self::Error> {
        let Ok(kind) = power_plant.kind.parse::<UnitKind>() else {
            return Err(DispatchError::UnknownUnitKind {
                name: power_plant.name,
                kind: power_plant.kind,
            });
        };
        Ok(Self::builder()
            .name(power_plant.name)
            .kind(kind)
            .efficiency(power_plant.efficiency)
            .min_power(power_plant.min_power)
            .max_power(power_plant.max_power)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const BODY: &str = r#"{
        "carbon": "0.3",
        "payload": {
            "load": 910,
            "fuels": {
                "gas(euro/MWh)": 13.4,
                "kerosine(euro/MWh)": 50.8,
                "co2(euro/ton)": 20,
                "wind(%)": 60
            },
            "powerplants": [
                {"name": "gasfiredbig1", "type": "gasfired", "efficiency": 0.53, "pmin": 100, "pmax": 460},
                {"name": "tj1", "type": "turbojet", "efficiency": 0.3, "pmin": 0, "pmax": 16},
                {"name": "windpark1", "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 150}
            ]
        }
    }"#;

    #[test]
    fn test_into_request() {
        let request = Document::from_slice(BODY.as_bytes()).unwrap().into_request().unwrap();
        assert_eq!(request.load, Megawatts(910.0));
        assert_eq!(request.carbon_rate, Some(0.3));
        assert_eq!(request.fuels.gas, EuroPerMegawattHour(13.4));
        assert_eq!(request.fuels.wind, Percent(60.0));
        assert_eq!(request.units.len(), 3);
        assert_eq!(request.units[1].kind, UnitKind::Turbojet);
        assert_eq!(request.units[2].max_power, Megawatts(150.0));
    }

    #[test]
    fn test_malformed_json() {
        let error = Document::from_slice(b"{\"payload\":").unwrap_err();
        assert!(matches!(error, ValidationError::MalformedJson(_)), "{error:?}");
    }

    #[test]
    fn test_unknown_unit_kind() {
        let mut document: Value = serde_json::from_str(BODY).unwrap();
        document["payload"]["powerplants"][1]["type"] = json!("nuclear");
        let error = Document::from_value(&document).unwrap().into_request().unwrap_err();
        assert!(
            matches!(
                &error,
                DispatchError::UnknownUnitKind { name, kind } if name == "tj1" && kind == "nuclear",
            ),
            "{error:?}",
        );
    }

    #[test]
    fn test_without_carbon() {
        let mut document: Value = serde_json::from_str(BODY).unwrap();
        document.as_object_mut().unwrap().remove("carbon");
        let request = Document::from_value(&document).unwrap().into_request().unwrap();
        assert_eq!(request.carbon_rate, None);
    }
}
