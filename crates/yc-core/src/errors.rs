//! Error types for the yieldcurve date kernel.
//!
//! Every fallible operation in the workspace returns [`Result`] with the
//! single [`Error`] enum below.  Malformed input, out-of-range dates,
//! unsupported conventions and schedule stub mismatches are distinct variants
//! so that callers can tell "bad data" apart from "feature not available".
//!
//! The `ensure!`, `ensure_post!` and `fail!` macros cover the common
//! precondition / postcondition / runtime-failure cases.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A tenor or date string could not be parsed.
    #[error("unable to parse '{input}': {reason}")]
    Parse {
        /// The offending input, echoed back verbatim.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// A serial date fell outside the valid range.
    #[error("serial date {value} is out of range [{min}, {max}]")]
    Range {
        /// The rejected serial value.
        value: i64,
        /// The smallest accepted serial value.
        min: i32,
        /// The largest accepted serial value.
        max: i32,
    },

    /// A convention or input shape that the kernel does not support.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// A schedule that forbids stubs did not land exactly on its end date.
    #[error(
        "schedule does not land on end date {end}: last generated date {landed} \
         leaves a stub of {days} day(s)"
    )]
    StubMismatch {
        /// `end - landed`, in calendar days.
        days: i32,
        /// Serial of the last date reached by regular stepping.
        landed: i32,
        /// Serial of the requested end date.
        end: i32,
    },

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated.
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Build an [`Error::Parse`] echoing `input`.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use yc_core::{ensure, errors::Error};
/// fn positive(x: f64) -> yc_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use yc_core::{ensure_post, errors::Error};
/// fn compute(x: f64) -> yc_core::errors::Result<f64> {
///     let result = x * 2.0;
///     ensure_post!(result > 0.0, "result must be positive, got {result}");
///     Ok(result)
/// }
/// assert!(compute(1.0).is_ok());
/// assert!(compute(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::NotImplemented(...))` immediately.
///
/// # Example
/// ```
/// use yc_core::{fail, errors::Error};
/// fn unsupported() -> yc_core::errors::Result<()> {
///     fail!("modified following roll");
/// }
/// assert!(matches!(unsupported(), Err(Error::NotImplemented(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::NotImplemented(format!($($msg)*)))
    };
}
