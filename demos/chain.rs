//! Run with
//!
//! ```not_rust
//! cargo run --example chain
//! ```
//!

use composable_outcome::{error::Message, outcome::Outcome};

#[path = "../util/util.rs"]
mod util;

#[derive(Debug, thiserror::Error)]
enum OrderError {
    #[error("Quantity must be positive")]
    NotPositive,
    #[error("Quantity {0} exceeds stock")]
    OutOfStock(u32),
}

fn parse(input: &str) -> Outcome<u32> {
    Outcome::from(input.trim().parse::<u32>())
}

fn reserve(stock: u32) -> impl Fn(u32) -> Result<u32, OrderError> {
    move |quantity| {
        if quantity > stock {
            return Err(OrderError::OutOfStock(quantity));
        }

        Ok(stock - quantity)
    }
}

fn main() -> anyhow::Result<()> {
    util::init("chain")?;

    for input in ["3", "0", "12", "three"] {
        let remaining = parse(input)
            .validate(|quantity: &u32| {
                if *quantity == 0 {
                    return Err(OrderError::NotPositive);
                }

                Ok(())
            })
            .chain(reserve(10))
            .map(|remaining| remaining.saturating_sub(1));

        match remaining.into_result() {
            Ok(remaining) => tracing::info!(%input, remaining, "Order reserved"),
            Err(err) => tracing::warn!(%input, %err, "Order rejected"),
        }
    }

    let fallback = Outcome::<u32>::failed(Message::new("No stock table")).value_or(0);

    tracing::info!(fallback, "Fallback used");

    Ok(())
}
