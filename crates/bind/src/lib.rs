//! A small model binding pipeline for HTTP request parameters
//!
//! This crate turns raw request data (header lines, query pairs) into typed
//! handler parameters through an explicit, ordered chain of binder providers.
//! It is transport-agnostic: a host framework feeds it parameter metadata and
//! a value provider, and gets back either a typed value or a precise error.
//!
//! # Features
//!
//! - Binder providers consulted in registration order, first match wins
//! - Verbatim header and query binders for the common cases
//! - A token-splitting header binder that turns `Hello: x y,z` into
//!   `["x", "y", "z"]` for sequence targets and leaves scalars untouched
//! - Standard conversions to scalars, `Vec<T>` and `Option<T>`
//! - Absent keys, unconvertible values and non-UTF-8 headers reported as
//!   distinct error cases
//!
//! # Example
//!
//! ```
//! use http::HeaderMap;
//! use modelbind::{
//!     Bindable, Binders, HeaderValues, ModelBinder, ParamMeta, SplitHeaderBinderProvider,
//! };
//!
//! // The stock chain, with token splitting in front of it.
//! let binders = Binders::builder()
//!     .defaults()
//!     .add_first(SplitHeaderBinderProvider::new())
//!     .build();
//!
//! let mut headers = HeaderMap::new();
//! headers.insert("Hello", "x y,z".parse().unwrap());
//!
//! let meta = ParamMeta::header("Hello", <Vec<String>>::SHAPE);
//! let binder = binders.resolve(&meta).expect("header parameters are covered");
//! let binding = binder.bind(&meta, &HeaderValues::new(&headers)).unwrap();
//! let greeting = <Vec<String>>::from_binding(&meta, binding).unwrap();
//!
//! assert_eq!(greeting, vec!["x", "y", "z"]);
//! ```
//!
//! # Architecture
//!
//! - [`meta`]: parameter metadata (name, source, target shape)
//! - [`value`]: value providers over headers, query strings and decoded tokens
//! - [`binder`]: binders that turn provider values into candidate bindings
//! - [`provider`]: binder providers and the ordered [`Binders`] registry
//! - [`bindable`]: standard conversions from candidates to typed targets
//! - [`decode`]: the header token decoder
//!
//! # Limitations
//!
//! - Headers and query strings only; body and path binding are the host's job
//! - Conversion targets parse from strings, nothing structured beyond `Vec`

pub mod bindable;
pub mod binder;
pub mod decode;
pub mod error;
pub mod meta;
pub mod provider;
pub mod value;

pub use bindable::Bindable;
pub use binder::Binding;
pub use binder::HeaderBinder;
pub use binder::ModelBinder;
pub use binder::QueryBinder;
pub use binder::SplitHeaderBinder;
pub use decode::decode;
pub use decode::DELIMITERS;
pub use error::BindError;
pub use meta::BindingSource;
pub use meta::ParamMeta;
pub use meta::TargetShape;
pub use provider::BinderProvider;
pub use provider::Binders;
pub use provider::BindersBuilder;
pub use provider::HeaderBinderProvider;
pub use provider::QueryBinderProvider;
pub use provider::SplitHeaderBinderProvider;
pub use value::DecodedValues;
pub use value::HeaderValues;
pub use value::QueryValues;
pub use value::ValueProvider;
