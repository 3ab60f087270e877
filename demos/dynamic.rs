//! Run with
//!
//! ```not_rust
//! cargo run --example dynamic
//! ```
//!

use composable_outcome::{
    dynamic::{fault, Callable, Fault, Value},
    error::ErrorKind,
    outcome::Outcome,
    values,
};

#[path = "../util/util.rs"]
mod util;

fn main() -> anyhow::Result<()> {
    util::init("dynamic")?;

    let concat = Callable::from_fn(|x: String, y: String| (x + &y, Fault::None));
    let shout = Callable::from_fn(|x: String| (x.to_uppercase(),));
    let failer = Callable::from_fn(|_: String| (fault("boom"),));

    let outcome = Outcome::of(String::from("a"))
        .bind_dyn(concat.into(), values![String::from("b")])
        .bind_dyn(shout.into(), values![]);

    tracing::info!(value = ?outcome.value(), "After concat and shout");

    let outcome = outcome.bind_dyn(failer.into(), values![]);

    tracing::info!(error = ?outcome.error(), "After failer");
    tracing::info!(value = %outcome.value_or(String::from("fallback")), "Extracted");

    let kinds = [
        Outcome::of(1).bind_dyn(Value::new("not callable"), values![]),
        Outcome::of(1).bind_dyn(Callable::from_fn(|x: i32| (x, x, x)).into(), values![]),
        Outcome::of(1).bind_dyn(
            Callable::from_fn(|x: i32, y: i32| (x + y,)).into(),
            values![],
        ),
        Outcome::of(1).bind_dyn(
            Callable::from_fn(|x: i32, y: u8| (x + i32::from(y),)).into(),
            values![2],
        ),
    ]
    .map(|outcome| outcome.error().map(|err| err.kind()));

    debug_assert_eq!(
        kinds,
        [
            Some(ErrorKind::InvalidCallable),
            Some(ErrorKind::InvalidReturnShape),
            Some(ErrorKind::ArityMismatch),
            Some(ErrorKind::ArgumentMismatch),
        ]
    );

    tracing::info!(?kinds, "Rejected binds");

    Ok(())
}
