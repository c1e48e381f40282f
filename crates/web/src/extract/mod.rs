mod extract_header;
mod extract_param;
mod extract_tuple;
mod from_request;

pub use from_request::FromRequest;

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

/// A named key for a bound request parameter.
///
/// Keys are unit structs so a handler signature can state which header or
/// query parameter it binds. Use [`param_key!`](crate::param_key) to declare
/// one.
pub trait ParamKey {
    const NAME: &'static str;
}

/// Declares a [`ParamKey`] unit struct.
///
/// # Example
/// ```
/// use modelbind_web::extract::ParamKey;
/// use modelbind_web::param_key;
///
/// param_key!(pub Hello => "Hello");
///
/// assert_eq!(Hello::NAME, "Hello");
/// ```
#[macro_export]
macro_rules! param_key {
    ($(#[$attr:meta])* $vis:vis $name:ident => $key:literal) => {
        $(#[$attr])*
        $vis struct $name;

        impl $crate::extract::ParamKey for $name {
            const NAME: &'static str = $key;
        }
    };
}

/// A handler parameter bound from a request header.
///
/// The header named by `K` is run through the server's binder chain and
/// converted to `T`, so what lands here depends on the providers the server
/// was configured with: the stock chain binds header lines verbatim, while a
/// token-splitting provider put in front of it decodes sequence targets.
///
/// # Example
/// ```
/// # use modelbind_web::extract::HeaderParam;
/// # use modelbind_web::param_key;
/// param_key!(pub Hello => "Hello");
///
/// pub async fn handle(greeting: HeaderParam<Hello, Vec<String>>) -> String {
///     format!("received greetings: {:?}", *greeting)
/// }
/// ```
pub struct HeaderParam<K, T> {
    value: T,
    _key: PhantomData<fn() -> K>,
}

/// A handler parameter bound from the request query string.
///
/// The query key named by `K` is bound through the same binder chain as
/// headers; repeated keys become the candidates of a sequence target.
///
/// # Example
/// ```
/// # use modelbind_web::extract::QueryParam;
/// # use modelbind_web::param_key;
/// param_key!(pub Tags => "tag");
///
/// pub async fn handle(tags: QueryParam<Tags, Vec<String>>) -> String {
///     format!("received tags: {:?}", tags.into_inner())
/// }
/// ```
pub struct QueryParam<K, T> {
    value: T,
    _key: PhantomData<fn() -> K>,
}

macro_rules! impl_param_accessors {
    ($param:ident) => {
        impl<K, T> $param<K, T> {
            pub(crate) fn new(value: T) -> Self {
                Self { value, _key: PhantomData }
            }

            /// Consumes the extractor and returns the bound value.
            pub fn into_inner(self) -> T {
                self.value
            }
        }

        impl<K, T> Deref for $param<K, T> {
            type Target = T;

            fn deref(&self) -> &Self::Target {
                &self.value
            }
        }

        impl<K, T> DerefMut for $param<K, T> {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.value
            }
        }

        impl<K, T: fmt::Debug> fmt::Debug for $param<K, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($param)).field(&self.value).finish()
            }
        }
    };
}

impl_param_accessors!(HeaderParam);
impl_param_accessors!(QueryParam);
