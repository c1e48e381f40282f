//! Request handling module that provides access to HTTP request information,
//! path parameters and the parameter binding pipeline.
//!
//! This module contains the core types for working with HTTP requests in the
//! web framework:
//! - `RequestContext`: Provides access to request data and binds typed parameters
//! - `PathParams`: Handles URL path parameters extracted from request paths

use http::request::Parts;
use http::{HeaderMap, Method, Uri, Version};
use matchit::Params;
use modelbind::{Bindable, BindError, BindingSource, Binders, HeaderValues, ParamMeta, QueryValues};

/// Represents the context of an HTTP request, providing access to the request
/// data, any path parameters extracted from the URL, and the binder registry
/// the server was configured with.
///
/// The lifetime parameters ensure that the request context does not outlive the server
/// or the request data it references.
pub struct RequestContext<'server: 'req, 'req> {
    parts: &'req Parts,
    path_params: &'req PathParams<'server, 'req>,
    binders: &'server Binders,
}

impl<'server, 'req> RequestContext<'server, 'req> {
    /// Creates a new RequestContext from request parts, path parameters and
    /// the server's binder registry.
    pub fn new(parts: &'req Parts, path_params: &'req PathParams<'server, 'req>, binders: &'server Binders) -> Self {
        Self { parts, path_params, binders }
    }

    /// Returns the HTTP method of the request
    pub fn method(&self) -> &Method {
        &self.parts.method
    }

    /// Returns the URI of the request
    pub fn uri(&self) -> &Uri {
        &self.parts.uri
    }

    /// Returns the HTTP version of the request
    pub fn version(&self) -> Version {
        self.parts.version
    }

    /// Returns the HTTP headers of the request
    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    /// Returns a reference to the path parameters extracted from the request URL
    pub fn path_params(&self) -> &PathParams<'server, 'req> {
        self.path_params
    }

    /// Returns the binder registry configured on the server
    pub fn binders(&self) -> &Binders {
        self.binders
    }

    /// Binds one parameter of the request to a typed value.
    ///
    /// Resolution walks the binder chain in order; the resolved binder reads
    /// the value source named by the metadata (headers or query string) and
    /// the target type converts the outcome. No registered provider accepting
    /// the parameter is reported as [`BindError::NoBinder`], which is a
    /// server wiring problem rather than a client error.
    pub fn bind_param<T: Bindable>(&self, meta: &ParamMeta) -> Result<T, BindError> {
        let binder =
            self.binders.resolve(meta).ok_or_else(|| BindError::no_binder(meta.name(), meta.source()))?;

        let binding = match meta.source() {
            BindingSource::Header => binder.bind(meta, &HeaderValues::new(self.headers()))?,
            BindingSource::Query => {
                let values = match self.uri().query() {
                    Some(query) => QueryValues::parse(query),
                    None => QueryValues::empty(),
                };
                binder.bind(meta, &values)?
            }
        };

        T::from_binding(meta, binding)
    }
}

/// Represents path parameters extracted from the URL path of an HTTP request.
///
/// Path parameters are named segments in the URL path that can be extracted and accessed
/// by name. For example, in the path "/users/{id}", "id" is a path parameter.
#[derive(Debug, Clone)]
pub struct PathParams<'server, 'req> {
    params: Option<Params<'server, 'req>>,
}

impl<'server, 'req> PathParams<'server, 'req> {
    /// Creates an empty PathParams instance with no parameters
    #[inline]
    pub fn empty() -> Self {
        Self { params: None }
    }

    /// Returns true if there are no path parameters
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of path parameters
    #[inline]
    pub fn len(&self) -> usize {
        self.params.as_ref().map_or(0, Params::len)
    }

    /// Gets the value of a path parameter by its name
    /// Returns None if the parameter doesn't exist
    #[inline]
    pub fn get(&self, key: impl AsRef<str>) -> Option<&'req str> {
        self.params.as_ref().and_then(|params| params.get(key))
    }
}

impl<'server, 'req> From<Params<'server, 'req>> for PathParams<'server, 'req> {
    fn from(params: Params<'server, 'req>) -> Self {
        if params.is_empty() {
            Self::empty()
        } else {
            Self { params: Some(params) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Request;
    use modelbind::SplitHeaderBinderProvider;

    fn parts(uri: &str, headers: &[(&'static str, &str)]) -> Parts {
        let mut builder = Request::builder().uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    fn splitting_binders() -> Binders {
        Binders::builder().defaults().add_first(SplitHeaderBinderProvider::new()).build()
    }

    #[test]
    fn binds_scalar_header_verbatim() {
        let parts = parts("/binding", &[("Hello", "x y,z")]);
        let params = PathParams::empty();
        let binders = splitting_binders();
        let ctx = RequestContext::new(&parts, &params, &binders);

        let meta = ParamMeta::header("Hello", String::SHAPE);
        let value: String = ctx.bind_param(&meta).unwrap();
        assert_eq!(value, "x y,z");
    }

    #[test]
    fn binds_sequence_header_with_splitting() {
        let parts = parts("/binding", &[("Hello", "x y,z")]);
        let params = PathParams::empty();
        let binders = splitting_binders();
        let ctx = RequestContext::new(&parts, &params, &binders);

        let meta = ParamMeta::header("Hello", <Vec<String>>::SHAPE);
        let value: Vec<String> = ctx.bind_param(&meta).unwrap();
        assert_eq!(value, vec!["x", "y", "z"]);
    }

    #[test]
    fn default_chain_binds_sequence_header_verbatim() {
        let parts = parts("/binding", &[("Hello", "x y,z")]);
        let params = PathParams::empty();
        let binders = Binders::default();
        let ctx = RequestContext::new(&parts, &params, &binders);

        let meta = ParamMeta::header("Hello", <Vec<String>>::SHAPE);
        let value: Vec<String> = ctx.bind_param(&meta).unwrap();
        assert_eq!(value, vec!["x y,z"]);
    }

    #[test]
    fn absent_header_is_missing_for_required_target() {
        let parts = parts("/binding", &[]);
        let params = PathParams::empty();
        let binders = splitting_binders();
        let ctx = RequestContext::new(&parts, &params, &binders);

        let meta = ParamMeta::header("Hello", String::SHAPE);
        let err = ctx.bind_param::<String>(&meta).unwrap_err();
        assert!(matches!(err, BindError::Missing { .. }));
    }

    #[test]
    fn absent_header_binds_none_for_optional_target() {
        let parts = parts("/binding", &[]);
        let params = PathParams::empty();
        let binders = splitting_binders();
        let ctx = RequestContext::new(&parts, &params, &binders);

        let meta = ParamMeta::header("Hello", <Option<Vec<String>>>::SHAPE);
        let value: Option<Vec<String>> = ctx.bind_param(&meta).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn binds_repeated_query_keys_in_order() {
        let parts = parts("/search?tag=a&tag=b", &[]);
        let params = PathParams::empty();
        let binders = Binders::default();
        let ctx = RequestContext::new(&parts, &params, &binders);

        let meta = ParamMeta::query("tag", <Vec<String>>::SHAPE);
        let value: Vec<String> = ctx.bind_param(&meta).unwrap();
        assert_eq!(value, vec!["a", "b"]);
    }

    #[test]
    fn missing_query_string_is_absent() {
        let parts = parts("/search", &[]);
        let params = PathParams::empty();
        let binders = Binders::default();
        let ctx = RequestContext::new(&parts, &params, &binders);

        let meta = ParamMeta::query("tag", <Option<String>>::SHAPE);
        let value: Option<String> = ctx.bind_param(&meta).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn empty_chain_reports_wiring_error() {
        let parts = parts("/binding", &[("Hello", "x")]);
        let params = PathParams::empty();
        let binders = Binders::builder().build();
        let ctx = RequestContext::new(&parts, &params, &binders);

        let meta = ParamMeta::header("Hello", String::SHAPE);
        let err = ctx.bind_param::<String>(&meta).unwrap_err();
        assert!(err.is_wiring_error());
    }

    #[test]
    fn path_params_from_matched_route() {
        let mut router = matchit::Router::new();
        router.insert("/users/{id}", ()).unwrap();

        let matched = router.at("/users/42").unwrap();
        let params = PathParams::from(matched.params);

        assert!(!params.is_empty());
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn empty_path_params() {
        let params = PathParams::empty();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
        assert_eq!(params.get("id"), None);
    }

    #[test]
    fn context_exposes_request_data() {
        let parts = parts("/binding?x=1", &[("Hello", "world")]);
        let params = PathParams::empty();
        let binders = Binders::default();
        let ctx = RequestContext::new(&parts, &params, &binders);

        assert_eq!(ctx.method(), Method::GET);
        assert_eq!(ctx.uri().path(), "/binding");
        assert_eq!(ctx.uri().query(), Some("x=1"));
        assert_eq!(ctx.version(), Version::HTTP_11);
        assert_eq!(ctx.headers().get("hello").unwrap(), "world");
        assert!(ctx.path_params().is_empty());
        assert!(!ctx.binders().is_empty());
    }
}
