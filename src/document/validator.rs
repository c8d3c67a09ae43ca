//! Structural validation of the request document before it gets deserialized.

use serde_json::{Map, Value};

/// JSON value type, as reported in the validation errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum JsonType {
    #[display("null")]
    Null,

    #[display("boolean")]
    Boolean,

    #[display("number")]
    Number,

    #[display("string")]
    String,

    #[display("array")]
    Array,

    #[display("object")]
    Object,
}

impl From<&Value> for JsonType {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("key `{key}` missing from {location}")]
    MissingKey { key: &'static str, location: String },

    #[error("key `{key}` in {location} links to {actual} value instead of {expected}")]
    WrongType { key: &'static str, location: String, actual: JsonType, expected: JsonType },

    #[error("{location} is {actual} instead of object")]
    NotAnObject { location: String, actual: JsonType },

    #[error("cannot convert carbon value `{0}` to a number")]
    InvalidCarbonValue(String),

    #[error("failed to deserialize the payload: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl ValidationError {
    /// Stable machine-readable error code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedJson(_) | Self::Deserialize(_) => "malformed_json",
            Self::MissingKey { .. } => "missing_key",
            Self::WrongType { .. } | Self::NotAnObject { .. } => "wrong_type",
            Self::InvalidCarbonValue(_) => "invalid_carbon_value",
        }
    }
}

const FUEL_KEYS: [&str; 4] = ["gas(euro/MWh)", "kerosine(euro/MWh)", "co2(euro/ton)", "wind(%)"];
const POWER_PLANT_NUMBER_KEYS: [&str; 3] = ["pmin", "pmax", "efficiency"];

/// Check that every required key is present and has the right type.
///
/// Returns the payload on success.
pub fn validate(document: &Value) -> Result<&Value, ValidationError> {
    let document = expect_object(document, "request")?;
    let payload_value = require(document, "payload", "request", JsonType::Object)?;
    let payload = expect_object(payload_value, "payload")?;

    require(payload, "load", "payload", JsonType::Number)?;

    let fuels = expect_object(require(payload, "fuels", "payload", JsonType::Object)?, "fuels")?;
    for key in FUEL_KEYS {
        require(fuels, key, "fuels", JsonType::Number)?;
    }

    let power_plants = require(payload, "powerplants", "payload", JsonType::Array)?;
    for (n, power_plant) in power_plants.as_array().into_iter().flatten().enumerate() {
        let location = format!("power plant number {n}");
        let power_plant = expect_object(power_plant, &location)?;
        require(power_plant, "name", &location, JsonType::String)?;
        require(power_plant, "type", &location, JsonType::String)?;
        for key in POWER_PLANT_NUMBER_KEYS {
            require(power_plant, key, &location, JsonType::Number)?;
        }
    }

    Ok(payload_value)
}

/// Parse the optional carbon rate, which may come either as a number or as a numeric string.
///
/// `null` is treated the same as the missing key.
pub fn parse_carbon(document: &Value) -> Result<Option<f64>, ValidationError> {
    let carbon = match document.get("carbon") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(string)) => string.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match carbon {
        Some(carbon) if carbon.is_finite() => Ok(Some(carbon)),
        _ => Err(ValidationError::InvalidCarbonValue(document["carbon"].to_string())),
    }
}

fn require<'a>(
    object: &'a Map<String, Value>,
    key: &'static str,
    location: &str,
    expected: JsonType,
) -> Result<&'a Value, ValidationError> {
    let value = object
        .get(key)
        .ok_or_else(|| ValidationError::MissingKey { key, location: location.to_owned() })?;
    let actual = JsonType::from(value);
    if actual != expected {
        return Err(ValidationError::WrongType {
            key,
            location: location.to_owned(),
            actual,
            expected,
        });
    }
    Ok(value)
}

fn expect_object<'a>(
    value: &'a Value,
    location: &str,
) -> Result<&'a Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| ValidationError::NotAnObject {
        location: location.to_owned(),
        actual: JsonType::from(value),
    })
}
