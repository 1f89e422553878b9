//! Checkout command.

use clap::Args;
use tuckshop_app::{context::AppContext, domain::orders::checkout};

use super::money;

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Free-text suggestion to record with the order
    #[arg(long)]
    suggestion: Option<String>,
}

pub(crate) async fn run(args: CheckoutArgs, context: &AppContext) -> Result<(), String> {
    // heal a dead cached session before touching the back office
    let session = context
        .sessions
        .ensure_session()
        .await
        .map_err(|error| error.to_string())?;

    let order = checkout(
        context.carts.as_ref(),
        context.orders.as_ref(),
        args.suggestion,
    )
    .await
    .map_err(|error| error.to_string())?;

    println!(
        "order {} placed for {} (signed in as {})",
        order.uuid,
        money(order.subtotal_cents),
        session.user_id
    );

    Ok(())
}
