use crate::quantity::power::Megawatts;

/// Reasons why no production plan could be produced.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("unknown power plant type `{kind}` of `{name}`")]
    UnknownUnitKind { name: String, kind: String },

    #[error("failed to compute the merit order of `{name}`, efficiency is {efficiency}")]
    InvalidUnit { name: String, efficiency: f64 },

    #[error("failed to reach the required load: {dispatched} dispatched instead of {required}")]
    UnreachableLoad { dispatched: Megawatts, required: Megawatts },
}

impl DispatchError {
    /// Stable machine-readable error code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownUnitKind { .. } => "unknown_unit_kind",
            Self::InvalidUnit { .. } => "invalid_unit",
            Self::UnreachableLoad { .. } => "unreachable_load",
        }
    }
}
