use std::{
    any::{type_name, Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
};

use crate::error::DynError;

/// The error slot of a dynamic callable. `None` means no error occurred.
pub type Fault = Option<DynError>;

pub fn fault(err: impl Into<DynError>) -> Fault {
    Some(err.into())
}

/// Runtime identity of a type, with its name for messages.
#[derive(Debug, Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    pub fn of<V: Any>() -> Self {
        Self {
            id: TypeId::of::<V>(),
            name: type_name::<V>(),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<V: Any>(&self) -> bool {
        self.id == TypeId::of::<V>()
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A type-erased argument, output or bind target.
pub struct Value {
    inner: Box<dyn Any>,
    tag: TypeTag,
}

impl Value {
    pub fn new<V: Any>(value: V) -> Self {
        Self {
            inner: Box::new(value),
            tag: TypeTag::of::<V>(),
        }
    }

    pub const fn tag(&self) -> TypeTag {
        self.tag
    }

    pub fn is<V: Any>(&self) -> bool {
        self.inner.is::<V>()
    }

    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.inner.downcast_ref::<V>()
    }

    /// Takes the value out, or gives it back untouched if it is not a `V`.
    pub fn downcast<V: Any>(self) -> Result<V, Self> {
        match self.inner.downcast::<V>() {
            Ok(value) => Ok(*value),
            Err(inner) => Err(Self {
                inner,
                tag: self.tag,
            }),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("type", &self.tag.name)
            .finish_non_exhaustive()
    }
}
