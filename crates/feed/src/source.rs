use crate::{RemoteSource, SyntheticSource};
use livetemp_core::Reading;
use thiserror::Error;

/// Why a tick could not produce a reading.
///
/// Recovered by the scheduler: a failed tick publishes an absent reading
/// and the next tick proceeds independently.  Never crosses into the
/// render layer.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot build HTTP client: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Payload(String),
}

/// The sample source the feed runs — one capability, two variants,
/// selected by configuration.
#[derive(Debug)]
pub enum Sampler {
    Synthetic(SyntheticSource),
    Remote(RemoteSource),
}

impl Sampler {
    /// Produce one reading for the current tick.
    pub async fn produce(&self) -> Result<Reading, FetchError> {
        match self {
            Sampler::Synthetic(source) => Ok(source.produce()),
            Sampler::Remote(source) => source.produce().await,
        }
    }
}
