use std::{
    any::{type_name, Any},
    fmt,
};

use crate::error::ErrorInfo;

use super::{
    signature::Signature,
    value::{TypeTag, Value},
};

type Body = Box<dyn Fn(Vec<Value>) -> Result<Vec<Value>, ErrorInfo>>;

/// A type-erased function together with its declared [`Signature`].
///
/// Typed closures become callables through [`Callable::from_fn`]. Their
/// parameters are read off the closure and their returns off the tuple it
/// produces, so `|x: i32| (x + 1, Fault::None)` declares `fn(i32) -> (i32, Fault)`.
///
/// ```
/// use composable_outcome::{dynamic::{Callable, Fault, Value}, outcome::Outcome, values};
///
/// let concat = Callable::from_fn(|x: String, y: String| (x + &y, Fault::None));
///
/// let outcome = Outcome::of(String::from("a"))
///     .bind_dyn(Value::new(concat), values![String::from("b")]);
///
/// assert_eq!(outcome.value_or(String::new()), "ab");
/// ```
pub struct Callable {
    signature: Signature,
    body: Body,
}

impl Callable {
    /// Pairs a raw body with the signature it claims.
    ///
    /// The body is trusted to honour the signature. If it does not, binding
    /// it fails with [`ErrorInfo::OutputConversion`].
    pub fn new<F>(signature: Signature, body: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Vec<Value>, ErrorInfo> + 'static,
    {
        Self {
            signature,
            body: Box::new(body),
        }
    }

    pub fn from_fn<F, Params, R>(f: F) -> Self
    where
        F: IntoCallable<Params, R>,
    {
        f.into_callable()
    }

    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Runs the body once `args` match the declared parameters in count and type.
    pub fn invoke(&self, args: Vec<Value>) -> Result<Vec<Value>, ErrorInfo> {
        self.signature.check_args(&args)?;

        (self.body)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Value::new(callable)
    }
}

/// Tuples a callable may return. `()` declares no returns.
pub trait Returns {
    fn tags() -> Vec<TypeTag>;

    fn into_values(self) -> Vec<Value>;
}

pub trait IntoCallable<Params, R> {
    fn into_callable(self) -> Callable;
}

struct Args {
    values: std::vec::IntoIter<Value>,
    position: usize,
    arity: usize,
}

impl Args {
    fn new(values: Vec<Value>, arity: usize) -> Self {
        Self {
            values: values.into_iter(),
            position: 0,
            arity,
        }
    }

    fn take<V: Any>(&mut self) -> Result<V, ErrorInfo> {
        let position = self.position;

        self.position += 1;

        let value = self
            .values
            .next()
            .ok_or_else(|| ErrorInfo::ArityMismatch {
                expected: self.arity,
                got: position,
            })?;

        value
            .downcast::<V>()
            .map_err(|value| ErrorInfo::ArgumentMismatch {
                position,
                expected: type_name::<V>(),
                got: value.tag().name(),
            })
    }
}

macro_rules! impl_returns {
    ($($ret:ident),*) => {
        impl<$($ret: Any),*> Returns for ($($ret,)*) {
            fn tags() -> Vec<TypeTag> {
                vec![$(TypeTag::of::<$ret>()),*]
            }

            #[allow(non_snake_case)]
            fn into_values(self) -> Vec<Value> {
                let ($($ret,)*) = self;

                vec![$(Value::new($ret)),*]
            }
        }
    };
}

impl_returns!();
impl_returns!(A);
impl_returns!(A, B);
impl_returns!(A, B, C);

macro_rules! impl_into_callable {
    ($($param:ident),*) => {
        impl<F, R, $($param,)*> IntoCallable<($($param,)*), R> for F
        where
            F: Fn($($param),*) -> R + 'static,
            R: Returns,
            $($param: Any,)*
        {
            #[allow(non_snake_case, unused_mut, unused_variables)]
            fn into_callable(self) -> Callable {
                let signature = Signature::new(vec![$(TypeTag::of::<$param>()),*], R::tags());
                let arity = signature.arity();

                Callable::new(signature, move |values| {
                    let mut args = Args::new(values, arity);

                    $(let $param = args.take::<$param>()?;)*

                    Ok(self($($param),*).into_values())
                })
            }
        }
    };
}

impl_into_callable!();
impl_into_callable!(A);
impl_into_callable!(A, B);
impl_into_callable!(A, B, C);
impl_into_callable!(A, B, C, D);
