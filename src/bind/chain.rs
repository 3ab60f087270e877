use crate::{
    error::{DynError, ErrorInfo},
    outcome::Outcome,
};

use super::binder::Binder;

/// A fallible step returning the next value or an error, the `(T, error)` shape.
pub trait Chainer<T> {
    type Error;

    fn chain(&self, value: T) -> Result<T, Self::Error>;
}

impl<T, E, F> Chainer<T> for F
where
    F: Fn(T) -> Result<T, E>,
{
    type Error = E;

    fn chain(&self, value: T) -> Result<T, Self::Error> {
        self(value)
    }
}

#[derive(Debug, Clone)]
pub struct Chain<C> {
    chainer: C,
}

impl<C> Chain<C> {
    pub const fn new(chainer: C) -> Self {
        Self { chainer }
    }
}

impl<T, C> Binder<T> for Chain<C>
where
    C: Chainer<T>,
    C::Error: Into<DynError>,
{
    fn bind(self, value: T) -> Outcome<T> {
        match self.chainer.chain(value) {
            Ok(chained) => Outcome::of(chained),
            Err(err) => Outcome::failed(ErrorInfo::propagated(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::{mock, predicate::eq};

    use crate::{error::ErrorKind, test::init_tracing};

    use super::*;

    mock! {
        Parser {}

        impl Chainer<i32> for Parser {
            type Error = anyhow::Error;

            fn chain(&self, value: i32) -> Result<i32, anyhow::Error>;
        }
    }

    #[test]
    fn chained_value_is_kept() {
        init_tracing();

        let mut parser = MockParser::new();

        parser
            .expect_chain()
            .with(eq(20))
            .times(1)
            .returning(|value| Ok(value + 1));

        let outcome = Outcome::of(20).chain(parser);

        assert_eq!(outcome.value_or(0), 21);
    }

    #[test]
    fn chained_error_is_propagated() {
        init_tracing();

        let mut parser = MockParser::new();

        parser
            .expect_chain()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("Not a number")));

        let outcome = Outcome::of(20).chain(parser);

        assert_eq!(outcome.error().map(ErrorInfo::kind), Some(ErrorKind::Propagated));
        assert_eq!(
            outcome.error().map(ToString::to_string).as_deref(),
            Some("Not a number")
        );
    }

    #[test]
    fn failed_outcome_never_calls_chainer() {
        init_tracing();

        let mut parser = MockParser::new();

        parser.expect_chain().never();

        let failed = Outcome::<i32>::failed(ErrorInfo::msg("earlier"));
        let outcome = failed.clone().chain(parser);

        assert_eq!(outcome, failed);
    }
}
