//! Standard conversions from bound candidate values to typed targets.
//!
//! [`Bindable`] is what a host framework asks of a handler parameter type:
//! which [`TargetShape`] to record in the metadata, and how to turn the
//! [`Binding`] a [`ModelBinder`](crate::ModelBinder) produced into the final
//! value. Scalars consume the first candidate, `Vec<T>` consumes them all in
//! order, and `Option<T>` turns an absent key into `None` instead of an
//! error.

use crate::binder::Binding;
use crate::error::BindError;
use crate::meta::{ParamMeta, TargetShape};
use std::fmt::Display;
use std::str::FromStr;

/// A type that can be produced from the candidate values of one parameter.
///
/// # Example
/// ```
/// use modelbind::{Bindable, Binding, ParamMeta};
///
/// let meta = ParamMeta::header("Hello", <Vec<String>>::SHAPE);
/// let binding = Binding::Values(vec!["x".into(), "y".into()]);
/// let bound = <Vec<String>>::from_binding(&meta, binding)?;
/// assert_eq!(bound, vec!["x", "y"]);
/// # Ok::<(), modelbind::BindError>(())
/// ```
pub trait Bindable: Sized {
    /// The shape to declare in [`ParamMeta`] for this target.
    const SHAPE: TargetShape;

    /// Converts bound candidates into the target value.
    fn from_binding(meta: &ParamMeta, binding: Binding) -> Result<Self, BindError>;
}

fn first_candidate(meta: &ParamMeta, binding: Binding) -> Result<String, BindError> {
    match binding {
        Binding::Absent => Err(BindError::missing(meta.name())),
        Binding::Values(values) => {
            values.into_iter().next().ok_or_else(|| BindError::missing(meta.name()))
        }
    }
}

// Scalars take the first candidate so a repeated key stays a soft condition
// rather than a client error.
macro_rules! impl_bindable_scalar {
    ($($target:ty),+ $(,)?) => {
        $(
            impl Bindable for $target {
                const SHAPE: TargetShape = TargetShape::Scalar;

                fn from_binding(meta: &ParamMeta, binding: Binding) -> Result<Self, BindError> {
                    let value = first_candidate(meta, binding)?;
                    value.parse().map_err(|reason| BindError::convert(meta.name(), &value, reason))
                }
            }
        )+
    };
}

impl_bindable_scalar! {
    String, bool, char,
    f32, f64,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
}

impl<T> Bindable for Vec<T>
where
    T: FromStr,
    T::Err: Display,
{
    const SHAPE: TargetShape = TargetShape::Sequence;

    fn from_binding(meta: &ParamMeta, binding: Binding) -> Result<Self, BindError> {
        let Binding::Values(values) = binding else {
            return Err(BindError::missing(meta.name()));
        };
        values
            .into_iter()
            .map(|value| {
                value.parse().map_err(|reason| BindError::convert(meta.name(), &value, reason))
            })
            .collect()
    }
}

impl<T: Bindable> Bindable for Option<T> {
    const SHAPE: TargetShape = T::SHAPE;

    fn from_binding(meta: &ParamMeta, binding: Binding) -> Result<Self, BindError> {
        if binding.is_absent() {
            return Ok(None);
        }
        T::from_binding(meta, binding).map(Some)
    }
}
