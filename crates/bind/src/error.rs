use crate::meta::BindingSource;
use thiserror::Error;

/// Errors produced while binding a parameter.
///
/// Absent keys and empty values are *not* errors; they travel through the
/// pipeline as [`Binding::Absent`](crate::Binding::Absent) or empty candidate
/// sets. An error here means the request data could not be used for the
/// declared target ([`Missing`](BindError::Missing),
/// [`Convert`](BindError::Convert), [`Encoding`](BindError::Encoding)) or the
/// host is wired wrong ([`NoBinder`](BindError::NoBinder)).
#[derive(Error, Debug)]
pub enum BindError {
    #[error("no value for required parameter `{name}`")]
    Missing { name: String },

    #[error("cannot convert `{value}` for parameter `{name}`: {reason}")]
    Convert { name: String, value: String, reason: String },

    #[error("value for parameter `{name}` is not valid UTF-8")]
    Encoding { name: String },

    #[error("no binder registered for {kind} parameter `{name}`")]
    NoBinder { name: String, kind: BindingSource },
}

impl BindError {
    pub fn missing<S: ToString>(name: S) -> Self {
        Self::Missing { name: name.to_string() }
    }

    pub fn convert<N: ToString, V: ToString, R: ToString>(name: N, value: V, reason: R) -> Self {
        Self::Convert { name: name.to_string(), value: value.to_string(), reason: reason.to_string() }
    }

    pub fn encoding<S: ToString>(name: S) -> Self {
        Self::Encoding { name: name.to_string() }
    }

    pub fn no_binder<S: ToString>(name: S, source: BindingSource) -> Self {
        Self::NoBinder { name: name.to_string(), kind: source }
    }

    /// Whether this error is a host wiring bug rather than bad request data.
    pub fn is_wiring_error(&self) -> bool {
        matches!(self, Self::NoBinder { .. })
    }
}
