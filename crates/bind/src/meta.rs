//! Parameter metadata handed to the binding pipeline.
//!
//! A [`ParamMeta`] describes one handler parameter: which request part its
//! value comes from, under which key, and whether the declared target type is
//! a scalar or a sequence. Binder providers decide on this metadata alone
//! whether they can handle a parameter.

use std::fmt;

/// The request part a parameter is bound from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingSource {
    /// A named request header.
    Header,
    /// A named query-string key.
    Query,
}

impl fmt::Display for BindingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingSource::Header => f.write_str("header"),
            BindingSource::Query => f.write_str("query"),
        }
    }
}

/// The shape of the declared target type.
///
/// Binders may behave differently for the two shapes; most notably, header
/// token splitting applies to [`Sequence`](TargetShape::Sequence) targets
/// only, so a scalar header value containing a comma is never torn apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetShape {
    /// A single value (string, number, ...).
    Scalar,
    /// An ordered collection of values.
    Sequence,
}

/// Metadata for a single parameter to bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamMeta {
    name: &'static str,
    source: BindingSource,
    shape: TargetShape,
}

impl ParamMeta {
    /// Metadata for a parameter bound from the request header `name`.
    pub fn header(name: &'static str, shape: TargetShape) -> Self {
        Self { name, source: BindingSource::Header, shape }
    }

    /// Metadata for a parameter bound from the query-string key `name`.
    pub fn query(name: &'static str, shape: TargetShape) -> Self {
        Self { name, source: BindingSource::Query, shape }
    }

    /// The header name or query key this parameter reads.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The request part the value comes from.
    pub fn source(&self) -> BindingSource {
        self.source
    }

    /// The declared target shape.
    pub fn shape(&self) -> TargetShape {
        self.shape
    }
}
