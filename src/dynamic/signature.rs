use std::{any::Any, fmt};

use crate::error::ErrorInfo;

use super::value::{Fault, TypeTag, Value};

/// The declared parameter and return types of a [`Callable`](super::Callable).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    params: Vec<TypeTag>,
    returns: Vec<TypeTag>,
}

impl Signature {
    pub const fn new(params: Vec<TypeTag>, returns: Vec<TypeTag>) -> Self {
        Self { params, returns }
    }

    pub fn params(&self) -> &[TypeTag] {
        &self.params
    }

    pub fn returns(&self) -> &[TypeTag] {
        &self.returns
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Classifies the declared returns against an outcome holding `T`.
    pub fn return_shape<T: Any>(&self) -> Result<ReturnShape, ErrorInfo> {
        let value = TypeTag::of::<T>();
        let fault = TypeTag::of::<Fault>();

        match self.returns.as_slice() {
            [only] if *only == value => Ok(ReturnShape::Value),
            [only] if *only == fault => Ok(ReturnShape::Error),
            [first, second] if *first == value && *second == fault => Ok(ReturnShape::Pair),
            _ => Err(ErrorInfo::InvalidReturnShape {
                expected: value.name(),
                declared: Tags(&self.returns).to_string(),
            }),
        }
    }

    /// Checks count and types of `args` without touching them.
    pub fn check_args(&self, args: &[Value]) -> Result<(), ErrorInfo> {
        if args.len() != self.params.len() {
            return Err(ErrorInfo::ArityMismatch {
                expected: self.params.len(),
                got: args.len(),
            });
        }

        for (position, (param, arg)) in self.params.iter().zip(args).enumerate() {
            if *param != arg.tag() {
                return Err(ErrorInfo::ArgumentMismatch {
                    position,
                    expected: param.name(),
                    got: arg.tag().name(),
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn{} -> {}", Tags(&self.params), Tags(&self.returns))
    }
}

struct Tags<'a>(&'a [TypeTag]);

impl fmt::Display for Tags<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;

        for (index, tag) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }

            f.write_str(tag.name())?;
        }

        f.write_str(")")
    }
}

/// The three return shapes a bound callable may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnShape {
    /// `T`
    Value,
    /// `error`
    Error,
    /// `(T, error)`
    Pair,
}

impl ReturnShape {
    pub const fn output_count(&self) -> usize {
        match self {
            Self::Value | Self::Error => 1,
            Self::Pair => 2,
        }
    }
}

impl fmt::Display for ReturnShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value => f.write_str("T"),
            Self::Error => f.write_str("error"),
            Self::Pair => f.write_str("(T, error)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    use super::*;

    fn returning(returns: Vec<TypeTag>) -> Signature {
        Signature::new(vec![TypeTag::of::<i32>()], returns)
    }

    #[test]
    fn permitted_shapes_are_classified() {
        let int = TypeTag::of::<i32>();
        let fault = TypeTag::of::<Fault>();

        assert_eq!(returning(vec![int]).return_shape::<i32>(), Ok(ReturnShape::Value));
        assert_eq!(returning(vec![fault]).return_shape::<i32>(), Ok(ReturnShape::Error));
        assert_eq!(
            returning(vec![int, fault]).return_shape::<i32>(),
            Ok(ReturnShape::Pair)
        );
    }

    #[test]
    fn other_shapes_are_rejected() {
        let int = TypeTag::of::<i32>();
        let fault = TypeTag::of::<Fault>();
        let string = TypeTag::of::<String>();

        for returns in [
            vec![],
            vec![string],
            vec![fault, int],
            vec![int, string],
            vec![int, int, fault],
        ] {
            let shape = returning(returns).return_shape::<i32>();

            assert_eq!(
                shape.map_err(|err| err.kind()),
                Err(ErrorKind::InvalidReturnShape)
            );
        }
    }

    #[test]
    fn rejection_names_declared_returns() {
        let signature = returning(vec![TypeTag::of::<i32>(), TypeTag::of::<String>()]);

        let err = signature
            .return_shape::<i32>()
            .expect_err("Should reject (i32, String)");

        let message = err.to_string();

        assert!(message
            .starts_with("Callable must return i32, error, or (i32, error), declared (i32, "));
        assert!(message.ends_with("String)"));
    }

    #[test]
    fn arity_is_checked_before_types() {
        let signature = returning(vec![TypeTag::of::<i32>()]);

        assert_eq!(
            signature.check_args(&[]),
            Err(ErrorInfo::ArityMismatch {
                expected: 1,
                got: 0
            })
        );
        assert_eq!(
            signature.check_args(&crate::values!["1"]),
            Err(ErrorInfo::ArgumentMismatch {
                position: 0,
                expected: "i32",
                got: "&str",
            })
        );
        assert_eq!(signature.check_args(&crate::values![1_i32]), Ok(()));
    }

    #[test]
    fn displays_as_fn() {
        let signature = returning(vec![TypeTag::of::<i32>(), TypeTag::of::<Fault>()]);

        assert!(signature.to_string().starts_with("fn(i32) -> (i32, core::option::Option<"));
    }
}
