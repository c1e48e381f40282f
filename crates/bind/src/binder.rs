//! Model binders: strategies that produce candidate values for a parameter.
//!
//! A binder answers one question per request: which raw string values are the
//! candidates for this parameter? Turning candidates into the declared target
//! type is a separate step ([`Bindable`](crate::Bindable)); binders never
//! parse numbers or build collections themselves.

use crate::decode::decode;
use crate::error::BindError;
use crate::meta::{ParamMeta, TargetShape};
use crate::value::{DecodedValues, ValueProvider};
use tracing::debug;

/// The outcome of a bind: either the key was never sent, or an ordered
/// candidate value set (possibly empty) was produced.
///
/// `Absent` defers to the framework's required/optional handling; it is never
/// collapsed into an empty candidate set, and an empty candidate set (a
/// present key with no usable tokens) is never promoted to `Absent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// The key is not present on the request at all.
    Absent,
    /// Candidate values for the target, in encounter order.
    Values(Vec<String>),
}

impl Binding {
    pub fn is_absent(&self) -> bool {
        matches!(self, Binding::Absent)
    }
}

/// A strategy producing a [`Binding`] for one parameter.
///
/// Binders are pure over their inputs: no I/O, no shared state, one call per
/// request parameter on whatever task the host runs the request on.
pub trait ModelBinder: Send + Sync {
    fn bind(&self, meta: &ParamMeta, values: &dyn ValueProvider) -> Result<Binding, BindError>;
}

fn bind_verbatim(meta: &ParamMeta, values: &dyn ValueProvider) -> Result<Binding, BindError> {
    if !values.contains(meta.name()) {
        return Ok(Binding::Absent);
    }
    Ok(Binding::Values(values.values(meta.name())?))
}

/// The default header binder: every raw header line, verbatim and in order,
/// is a candidate value.
///
/// For a scalar target bound from a header the client sent on several lines,
/// the first line wins during conversion; the binder itself never drops data.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderBinder;

impl ModelBinder for HeaderBinder {
    fn bind(&self, meta: &ParamMeta, values: &dyn ValueProvider) -> Result<Binding, BindError> {
        bind_verbatim(meta, values)
    }
}

/// The default query binder: every value of a matching query pair, in order.
///
/// Repeated keys are the sequence mechanism for query strings, so no token
/// splitting is ever applied here.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryBinder;

impl ModelBinder for QueryBinder {
    fn bind(&self, meta: &ParamMeta, values: &dyn ValueProvider) -> Result<Binding, BindError> {
        bind_verbatim(meta, values)
    }
}

/// Header binder that splits array-valued headers into tokens before
/// delegating to a default binder.
///
/// For sequence-shaped targets, the raw header lines are run through
/// [`decode`](crate::decode) and the delegate is re-entered with a
/// [`DecodedValues`] provider carrying the tokens, so the delegate applies
/// its own presence and ordering rules to the adjusted input. Scalar targets
/// are delegated untouched: a scalar header value containing a comma must
/// come through verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitHeaderBinder<B = HeaderBinder> {
    inner: B,
}

impl SplitHeaderBinder<HeaderBinder> {
    pub fn new() -> Self {
        Self { inner: HeaderBinder }
    }
}

impl<B: ModelBinder> SplitHeaderBinder<B> {
    /// Builds the splitting binder around an explicit delegate.
    pub fn with_delegate(inner: B) -> Self {
        Self { inner }
    }
}

impl<B: ModelBinder> ModelBinder for SplitHeaderBinder<B> {
    fn bind(&self, meta: &ParamMeta, values: &dyn ValueProvider) -> Result<Binding, BindError> {
        if meta.shape() != TargetShape::Sequence {
            return self.inner.bind(meta, values);
        }
        if !values.contains(meta.name()) {
            // Absent stays the delegate's call, same as for scalars.
            return self.inner.bind(meta, values);
        }

        let raw = values.values(meta.name())?;
        let tokens = decode(raw.iter().map(String::as_str));
        debug!(name = meta.name(), raw_values = raw.len(), tokens = tokens.len(), "decoded header tokens");

        let decoded = DecodedValues::new(meta.name(), tokens);
        self.inner.bind(meta, &decoded)
    }
}
