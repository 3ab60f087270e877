use std::any::{type_name, Any};

use crate::{bind::Binder, error::ErrorInfo, outcome::Outcome};

use super::{
    callable::Callable,
    signature::ReturnShape,
    value::{Fault, Value},
};

#[derive(Debug, Clone, Copy)]
enum Threading {
    /// The held value is passed first, before the supplied arguments.
    Leading,
    /// Only the supplied arguments are passed.
    Detached,
}

impl Threading {
    fn arguments<T: Any>(self, value: T, args: Vec<Value>) -> Vec<Value> {
        match self {
            Self::Leading => std::iter::once(Value::new(value)).chain(args).collect(),
            Self::Detached => args,
        }
    }
}

/// Binds a type-erased target with a runtime argument list.
///
/// Before invoking anything the target must be a [`Callable`], its declared
/// returns must be `T`, `error` or `(T, error)`, and the arguments must
/// match its parameters in count and type.
#[derive(Debug)]
pub struct Dynamic {
    target: Value,
    args: Vec<Value>,
    threading: Threading,
}

impl Dynamic {
    pub const fn threaded(target: Value, args: Vec<Value>) -> Self {
        Self {
            target,
            args,
            threading: Threading::Leading,
        }
    }

    pub const fn detached(target: Value, args: Vec<Value>) -> Self {
        Self {
            target,
            args,
            threading: Threading::Detached,
        }
    }

    fn call<T>(self, value: T) -> Result<T, ErrorInfo>
    where
        T: Any + Clone,
    {
        let Self {
            target,
            args,
            threading,
        } = self;

        let callable = target
            .downcast::<Callable>()
            .map_err(|target| ErrorInfo::InvalidCallable {
                found: target.tag().name(),
            })?;

        let signature = callable.signature();
        let shape = signature.return_shape::<T>()?;

        let invoke = |value: T| {
            tracing::trace!(%signature, %shape, "Invoking callable");

            callable.invoke(threading.arguments(value, args))
        };

        match shape {
            // The only shape that hands the held value back.
            ReturnShape::Error => {
                let outputs = invoke(value.clone())?;

                match fault_output(expect_outputs(shape, outputs)?.next())? {
                    Some(err) => Err(ErrorInfo::propagated(err)),
                    None => Ok(value),
                }
            }
            ReturnShape::Value | ReturnShape::Pair => next_value(shape, invoke(value)?),
        }
    }
}

impl<T> Binder<T> for Dynamic
where
    T: Any + Clone,
{
    fn bind(self, value: T) -> Outcome<T> {
        match self.call(value) {
            Ok(value) => Outcome::of(value),
            Err(err) => Outcome::failed(err),
        }
    }
}

fn expect_outputs(
    shape: ReturnShape,
    outputs: Vec<Value>,
) -> Result<std::vec::IntoIter<Value>, ErrorInfo> {
    if outputs.len() != shape.output_count() {
        return Err(ErrorInfo::output_conversion(format!(
            "Expected {} output(s) for {shape}, got {}",
            shape.output_count(),
            outputs.len()
        )));
    }

    Ok(outputs.into_iter())
}

/// Reads the new value out of a `T` or `(T, error)` result. The error slot wins.
fn next_value<T: Any>(shape: ReturnShape, outputs: Vec<Value>) -> Result<T, ErrorInfo> {
    let mut outputs = expect_outputs(shape, outputs)?;
    let value = outputs.next();

    if let ReturnShape::Pair = shape {
        if let Some(err) = fault_output(outputs.next())? {
            return Err(ErrorInfo::propagated(err));
        }
    }

    value_output(value)
}

fn value_output<T: Any>(output: Option<Value>) -> Result<T, ErrorInfo> {
    let output = output.ok_or_else(|| ErrorInfo::output_conversion("Missing value output"))?;

    output.downcast::<T>().map_err(|output| {
        ErrorInfo::output_conversion(format!(
            "Failed to convert {} to {}",
            output.tag(),
            type_name::<T>()
        ))
    })
}

fn fault_output(output: Option<Value>) -> Result<Fault, ErrorInfo> {
    let output = output.ok_or_else(|| ErrorInfo::output_conversion("Missing error output"))?;

    output.downcast::<Fault>().map_err(|output| {
        ErrorInfo::output_conversion(format!("{} is not an error", output.tag()))
    })
}
