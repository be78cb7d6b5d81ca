use crate::core::integrals::IntegralError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("screening cutoff must be finite and non-negative, got {0}")]
    InvalidCutoff(f64),

    #[error(
        "QQR screening is unsupported: its extent estimator was never functional and has not been reimplemented"
    )]
    QqrUnsupported,

    #[error("CSAM screening was not enabled when this sieve was built")]
    CsamDisabled,

    #[error("integral evaluation failed: {source}")]
    Integrals {
        #[from]
        source: IntegralError,
    },
}
