use crate::{
    error::{DynError, ErrorInfo},
    outcome::Outcome,
};

use super::binder::Binder;

/// A check on the held value that returns only an error, the `error` shape.
pub trait Validator<T> {
    type Error;

    fn validate(&self, value: &T) -> Result<(), Self::Error>;
}

impl<T, E, F> Validator<T> for F
where
    F: Fn(&T) -> Result<(), E>,
{
    type Error = E;

    fn validate(&self, value: &T) -> Result<(), Self::Error> {
        self(value)
    }
}

#[derive(Debug, Clone)]
pub struct Validate<V> {
    validator: V,
}

impl<V> Validate<V> {
    pub const fn new(validator: V) -> Self {
        Self { validator }
    }
}

impl<T, V> Binder<T> for Validate<V>
where
    V: Validator<T>,
    V::Error: Into<DynError>,
{
    fn bind(self, value: T) -> Outcome<T> {
        match self.validator.validate(&value) {
            Ok(()) => Outcome::of(value),
            Err(err) => Outcome::failed(ErrorInfo::propagated(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use crate::test::init_tracing;

    use super::*;

    mock! {
        Limit {}

        impl Validator<u32> for Limit {
            type Error = anyhow::Error;

            fn validate(&self, value: &u32) -> Result<(), anyhow::Error>;
        }
    }

    fn limit(max: u32) -> MockLimit {
        let mut limit = MockLimit::new();

        limit.expect_validate().times(1).returning(move |value| {
            if *value > max {
                anyhow::bail!("{value} exceeds {max}");
            }

            Ok(())
        });

        limit
    }

    #[test]
    fn passing_validation_keeps_value() {
        init_tracing();

        let outcome = Outcome::of(3_u32).validate(limit(5));

        assert_eq!(outcome, Outcome::of(3));
    }

    #[test]
    fn failing_validation_stops_the_chain() {
        init_tracing();

        let mut unreachable = MockLimit::new();

        unreachable.expect_validate().never();

        let outcome = Outcome::of(7_u32)
            .validate(limit(5))
            .validate(unreachable);

        assert_eq!(outcome.error(), Some(&ErrorInfo::msg("7 exceeds 5")));
    }
}
