mod binder;
mod chain;
mod map;
mod validate;

pub use binder::Binder;
pub use chain::{Chain, Chainer};
pub use map::Map;
pub use validate::{Validate, Validator};
