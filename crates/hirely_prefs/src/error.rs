use thiserror::Error;

use crate::axis::PrefAxis;

#[derive(Debug, Error, PartialEq)]
pub enum PreferenceError {
    /// A `set` with a value outside the axis's allowed set. The call is a
    /// no-op: no persistence, no in-memory change, no notification.
    #[error("invalid value `{value}` for preference axis `{axis}`")]
    InvalidValue { axis: PrefAxis, value: String },
}
