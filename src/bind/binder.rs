use crate::outcome::Outcome;

/// One step of a bind chain.
///
/// Implemented by [`Map`](super::Map), [`Chain`](super::Chain),
/// [`Validate`](super::Validate), [`Dynamic`](crate::dynamic::Dynamic) and by
/// every closure `FnOnce(T) -> Outcome<T>`.
pub trait Binder<T> {
    fn bind(self, value: T) -> Outcome<T>;
}

impl<T, Fn> Binder<T> for Fn
where
    Fn: FnOnce(T) -> Outcome<T>,
{
    fn bind(self, value: T) -> Outcome<T> {
        self(value)
    }
}
