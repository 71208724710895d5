use thiserror::Error;

use crate::memory::TraceError;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Trace(#[from] TraceError),
    #[error("benchmark must run at least one repetition")]
    ZeroRepeat,
    #[error("reducer {variant} returned different values across repetitions")]
    UnstableResult { variant: &'static str },
    #[error("reducers disagree: naive returned {naive}, streaming returned {streaming}")]
    ResultMismatch { naive: i128, streaming: i128 },
}
