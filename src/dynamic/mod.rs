//! Type-erased binding for callables whose signature is only known at runtime.
//!
//! A [`Callable`] carries a declared [`Signature`] next to its type-erased
//! body. Binding one through [`Outcome::bind_dyn`](crate::outcome::Outcome::bind_dyn)
//! validates the target, the declared return shape, the arity and the
//! argument types before anything is invoked, then reinterprets the outputs
//! into the outcome's value or error.

mod callable;
mod dynamic_bind;
mod signature;
mod value;

pub use callable::{Callable, IntoCallable, Returns};
pub use dynamic_bind::Dynamic;
pub use signature::{ReturnShape, Signature};
pub use value::{fault, Fault, TypeTag, Value};

/// Builds a `Vec<Value>` argument list.
#[macro_export]
macro_rules! values {
    ($($value:expr),* $(,)?) => {
        ::std::vec![$($crate::dynamic::Value::new($value)),*]
    };
}
