//! Binder providers and the ordered provider registry.
//!
//! Providers are the extension point a host framework consults during
//! parameter binding: each one answers whether it can handle a parameter
//! (from its metadata alone) and, if so, supplies the binder to use. The
//! [`Binders`] registry keeps providers in an explicit order and the first
//! provider that accepts a parameter wins, so installing a custom provider at
//! the front overrides the stock behavior without touching it.

use crate::binder::{HeaderBinder, ModelBinder, QueryBinder, SplitHeaderBinder};
use crate::meta::{BindingSource, ParamMeta};
use std::sync::Arc;
use tracing::debug;

/// The capability interface for one binding strategy.
///
/// `accepts` must be cheap and side-effect free; `binder_for` is only called
/// after `accepts` returned true for the same metadata.
pub trait BinderProvider: Send + Sync {
    /// Can this provider handle the parameter?
    fn accepts(&self, meta: &ParamMeta) -> bool;

    /// The binder to use for the parameter.
    fn binder_for(&self, meta: &ParamMeta) -> Arc<dyn ModelBinder>;
}

/// Provider for the stock verbatim header binder.
pub struct HeaderBinderProvider {
    binder: Arc<dyn ModelBinder>,
}

impl HeaderBinderProvider {
    pub fn new() -> Self {
        Self { binder: Arc::new(HeaderBinder::default()) }
    }
}

impl Default for HeaderBinderProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl BinderProvider for HeaderBinderProvider {
    fn accepts(&self, meta: &ParamMeta) -> bool {
        meta.source() == BindingSource::Header
    }

    fn binder_for(&self, _meta: &ParamMeta) -> Arc<dyn ModelBinder> {
        Arc::clone(&self.binder)
    }
}

/// Provider for the token-splitting header binder.
///
/// Accepts every header-sourced parameter regardless of shape; the binder
/// itself delegates scalars verbatim, so installing this provider in front
/// of [`HeaderBinderProvider`] changes sequence bindings only.
pub struct SplitHeaderBinderProvider {
    binder: Arc<dyn ModelBinder>,
}

impl SplitHeaderBinderProvider {
    pub fn new() -> Self {
        Self { binder: Arc::new(SplitHeaderBinder::new()) }
    }
}

impl Default for SplitHeaderBinderProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl BinderProvider for SplitHeaderBinderProvider {
    fn accepts(&self, meta: &ParamMeta) -> bool {
        meta.source() == BindingSource::Header
    }

    fn binder_for(&self, _meta: &ParamMeta) -> Arc<dyn ModelBinder> {
        Arc::clone(&self.binder)
    }
}

/// Provider for the stock query binder.
pub struct QueryBinderProvider {
    binder: Arc<dyn ModelBinder>,
}

impl QueryBinderProvider {
    pub fn new() -> Self {
        Self { binder: Arc::new(QueryBinder::default()) }
    }
}

impl Default for QueryBinderProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl BinderProvider for QueryBinderProvider {
    fn accepts(&self, meta: &ParamMeta) -> bool {
        meta.source() == BindingSource::Query
    }

    fn binder_for(&self, _meta: &ParamMeta) -> Arc<dyn ModelBinder> {
        Arc::clone(&self.binder)
    }
}

/// An explicit, ordered binder provider chain.
///
/// The default chain carries the stock providers: verbatim header binding
/// and query binding.
///
/// # Example
/// ```
/// use modelbind::{Binders, SplitHeaderBinderProvider};
///
/// // Same chain as the default, with token splitting in front of it.
/// let binders = Binders::builder()
///     .defaults()
///     .add_first(SplitHeaderBinderProvider::new())
///     .build();
/// # let _ = binders;
/// ```
pub struct Binders {
    providers: Vec<Box<dyn BinderProvider>>,
}

impl Binders {
    pub fn builder() -> BindersBuilder {
        BindersBuilder::new()
    }

    /// Walks the chain in order and returns the first accepted binder.
    ///
    /// `None` means no registered provider can handle the parameter, which
    /// is a host wiring problem, not a property of the request.
    pub fn resolve(&self, meta: &ParamMeta) -> Option<Arc<dyn ModelBinder>> {
        for (index, provider) in self.providers.iter().enumerate() {
            if provider.accepts(meta) {
                debug!(name = meta.name(), source = %meta.source(), provider = index, "binder resolved");
                return Some(provider.binder_for(meta));
            }
        }
        debug!(name = meta.name(), source = %meta.source(), "no binder provider accepted the parameter");
        None
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for Binders {
    fn default() -> Self {
        Self::builder().defaults().build()
    }
}

pub struct BindersBuilder {
    providers: Vec<Box<dyn BinderProvider>>,
}

impl BindersBuilder {
    fn new() -> Self {
        Self { providers: Vec::new() }
    }

    /// Appends the stock provider chain (header, then query).
    pub fn defaults(self) -> Self {
        self.add_last(HeaderBinderProvider::new()).add_last(QueryBinderProvider::new())
    }

    pub fn add_first<P: BinderProvider + 'static>(mut self, provider: P) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }

    pub fn add_last<P: BinderProvider + 'static>(mut self, provider: P) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn build(self) -> Binders {
        Binders { providers: self.providers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::Binding;
    use crate::error::BindError;
    use crate::meta::TargetShape;
    use crate::value::{DecodedValues, ValueProvider};
    use mockall::mock;
    use mockall::predicate::always;

    mock! {
        Provider {}

        impl BinderProvider for Provider {
            fn accepts(&self, meta: &ParamMeta) -> bool;
            fn binder_for(&self, meta: &ParamMeta) -> Arc<dyn ModelBinder>;
        }
    }

    struct FixedBinder(Binding);

    impl ModelBinder for FixedBinder {
        fn bind(&self, _meta: &ParamMeta, _values: &dyn ValueProvider) -> Result<Binding, BindError> {
            Ok(self.0.clone())
        }
    }

    fn meta() -> ParamMeta {
        ParamMeta::header("Hello", TargetShape::Sequence)
    }

    #[test]
    fn first_accepting_provider_wins() {
        let mut first = MockProvider::new();
        first.expect_accepts().with(always()).times(1).return_const(true);
        first
            .expect_binder_for()
            .times(1)
            .returning(|_| Arc::new(FixedBinder(Binding::Values(vec!["first".into()]))));

        let mut second = MockProvider::new();
        second.expect_accepts().times(0);
        second.expect_binder_for().times(0);

        let binders = Binders::builder().add_last(first).add_last(second).build();
        let binder = binders.resolve(&meta()).expect("first provider accepts");

        let provider = DecodedValues::new("Hello", Vec::new());
        assert_eq!(binder.bind(&meta(), &provider).unwrap(), Binding::Values(vec!["first".into()]));
    }

    #[test]
    fn declining_provider_falls_through() {
        let mut first = MockProvider::new();
        first.expect_accepts().times(1).return_const(false);
        first.expect_binder_for().times(0);

        let mut second = MockProvider::new();
        second.expect_accepts().times(1).return_const(true);
        second
            .expect_binder_for()
            .times(1)
            .returning(|_| Arc::new(FixedBinder(Binding::Absent)));

        let binders = Binders::builder().add_last(first).add_last(second).build();
        assert!(binders.resolve(&meta()).is_some());
    }

    #[test]
    fn empty_chain_resolves_nothing() {
        let binders = Binders::builder().build();
        assert!(binders.is_empty());
        assert!(binders.resolve(&meta()).is_none());
    }

    #[test]
    fn add_first_takes_precedence_over_defaults() {
        let mut custom = MockProvider::new();
        custom.expect_accepts().times(1).return_const(true);
        custom
            .expect_binder_for()
            .times(1)
            .returning(|_| Arc::new(FixedBinder(Binding::Absent)));

        let binders = Binders::builder().defaults().add_first(custom).build();
        assert_eq!(binders.len(), 3);
        // The mock would panic on drop if the stock header provider had won.
        binders.resolve(&meta()).unwrap();
    }

    #[test]
    fn default_chain_covers_both_sources() {
        let binders = Binders::default();
        assert!(binders.resolve(&ParamMeta::header("h", TargetShape::Scalar)).is_some());
        assert!(binders.resolve(&ParamMeta::query("q", TargetShape::Sequence)).is_some());
    }

    #[test]
    fn stock_providers_hand_out_usable_binders() {
        let header_meta = ParamMeta::header("Hello", TargetShape::Scalar);
        let provider = HeaderBinderProvider::new();
        assert!(provider.accepts(&header_meta));
        let binder = provider.binder_for(&header_meta);
        let values = DecodedValues::new("Hello", vec!["x".to_string()]);
        assert_eq!(binder.bind(&header_meta, &values).unwrap(), Binding::Values(vec!["x".into()]));

        let split_meta = ParamMeta::header("Hello", TargetShape::Sequence);
        let provider = SplitHeaderBinderProvider::new();
        assert!(provider.accepts(&split_meta));
        let binder = provider.binder_for(&split_meta);
        let values = DecodedValues::new("Hello", vec!["x y,z".to_string()]);
        assert_eq!(
            binder.bind(&split_meta, &values).unwrap(),
            Binding::Values(vec!["x".into(), "y".into(), "z".into()])
        );

        let query_meta = ParamMeta::query("tag", TargetShape::Sequence);
        let provider = QueryBinderProvider::new();
        assert!(provider.accepts(&query_meta));
        let binder = provider.binder_for(&query_meta);
        let values = DecodedValues::new("tag", vec!["a".to_string()]);
        assert_eq!(binder.bind(&query_meta, &values).unwrap(), Binding::Values(vec!["a".into()]));
    }
}
