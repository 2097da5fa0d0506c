use std::error::Error as _;

/// A request references something it does not define.
///
/// Raised by the network builder before any engine object exists.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BuildError {
    #[error("duplicate node id '{id}'")]
    DuplicateNode { id: String },

    #[error("invalid link '{link}': {from} -> {to} references an unknown node")]
    UnknownLinkEndpoint { link: String, from: String, to: String },

    #[error("invalid demand '{demand}': target node '{target}' does not exist")]
    UnknownDemandTarget { demand: String, target: String },
}

/// The engine refused to assemble or run a network.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EngineError {
    #[error("invalid parameters for {entity}: {reason}")]
    InvalidParameter { entity: String, reason: String },

    #[error("simulation horizon must be positive, got {0}")]
    InvalidHorizon(u64),

    #[error("network has already been simulated")]
    AlreadySimulated,
}

/// Everything that can stop one orchestration call.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("simulation failed")]
    Engine(#[from] EngineError),

    #[error("simulation aborted: {0}")]
    Aborted(String),
}

impl SimulationError {
    /// True when the request itself is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SimulationError::Build(_))
    }

    /// The message followed by every underlying cause.
    pub fn report(&self) -> String {
        let mut text = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        text
    }
}

/// Failures while writing results of an offline run.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
