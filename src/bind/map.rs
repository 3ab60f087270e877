use crate::outcome::Outcome;

use super::binder::Binder;

#[derive(Debug, Clone)]
pub struct Map<Fn> {
    map: Fn,
}

impl<Fn> Map<Fn> {
    pub const fn new(map: Fn) -> Self {
        Self { map }
    }
}

impl<T, Fn> Binder<T> for Map<Fn>
where
    Fn: FnOnce(T) -> T,
{
    fn bind(self, value: T) -> Outcome<T> {
        Outcome::of((self.map)(value))
    }
}
