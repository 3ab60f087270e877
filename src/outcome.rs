use std::any::Any;

use crate::{
    bind::{Binder, Chain, Chainer, Map, Validate, Validator},
    dynamic::{Dynamic, Value},
    error::{DynError, ErrorInfo},
};

/// A value, or the first error that occurred while producing it.
///
/// Binds consume the outcome and return a new one. Once an outcome has
/// failed, every further bind returns it unchanged without running the
/// bound callable, and [`Outcome::value_or`] yields the fallback.
///
/// ```
/// use composable_outcome::{outcome::Outcome, error::Message};
///
/// let outcome = Outcome::of(5)
///     .map(|x| x + 1)
///     .chain(|x: i32| if x > 10 { Err(Message::new("too big")) } else { Ok(x * 2) });
///
/// assert_eq!(outcome.value_or(0), 12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure(ErrorInfo),
}

impl<T> Outcome<T> {
    pub const fn of(value: T) -> Self {
        Self::Success(value)
    }

    pub fn failed(err: impl Into<ErrorInfo>) -> Self {
        Self::Failure(err.into())
    }

    /// Runs `binder` on the held value, or skips it if this outcome already failed.
    #[tracing::instrument(skip_all)]
    pub fn bind<B>(self, binder: B) -> Self
    where
        B: Binder<T>,
    {
        match self {
            Self::Success(value) => {
                let outcome = binder.bind(value);

                if let Self::Failure(err) = &outcome {
                    tracing::debug!(kind = %err.kind(), %err, "Bind failed");
                }

                outcome
            }
            Self::Failure(err) => {
                tracing::trace!(kind = %err.kind(), "Outcome already failed, skipping bind");

                Self::Failure(err)
            }
        }
    }

    pub fn map<Fn>(self, map: Fn) -> Self
    where
        Fn: FnOnce(T) -> T,
    {
        self.bind(Map::new(map))
    }

    /// Closures must be `Fn`. A step that consumes what it captures goes
    /// through [`Outcome::bind`] instead, returning an [`Outcome`] converted
    /// from its `Result`.
    pub fn chain<C>(self, chainer: C) -> Self
    where
        C: Chainer<T>,
        C::Error: Into<DynError>,
    {
        self.bind(Chain::new(chainer))
    }

    /// Closures must be `Fn`, as with [`Outcome::chain`].
    pub fn validate<V>(self, validator: V) -> Self
    where
        V: Validator<T>,
        V::Error: Into<DynError>,
    {
        self.bind(Validate::new(validator))
    }

    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    pub fn value_or_else<Fn>(self, fallback: Fn) -> T
    where
        Fn: FnOnce(ErrorInfo) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(err) => fallback(err),
        }
    }

    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub const fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn into_result(self) -> Result<T, ErrorInfo> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(err) => Err(err),
        }
    }
}

impl<T> Outcome<T>
where
    T: Any + Clone,
{
    /// Binds a type-erased [`Callable`](crate::dynamic::Callable), passing the
    /// held value as its first argument followed by `args`.
    pub fn bind_dyn(self, target: Value, args: Vec<Value>) -> Self {
        self.bind(Dynamic::threaded(target, args))
    }

    /// Like [`Outcome::bind_dyn`], but passes only `args`.
    pub fn apply_dyn(self, target: Value, args: Vec<Value>) -> Self {
        self.bind(Dynamic::detached(target, args))
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<DynError>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::of(value),
            Err(err) => Self::failed(ErrorInfo::propagated(err)),
        }
    }
}
