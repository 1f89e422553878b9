//! Suggestion autosave command.
//!
//! Reads replacement suggestion text line by line from stdin, feeding each
//! line to the autosave controller the way the order page feeds keystrokes.
//! On end of input, waits for the draft to settle and reports where it
//! landed.

use std::{sync::Arc, time::Duration};

use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tuckshop::suggestions::DraftStatus;
use tuckshop_app::{
    context::AppContext,
    domain::{orders::OrderUuid, suggestions::AutosaveController},
};

#[derive(Debug, Args)]
pub(crate) struct SuggestArgs {
    /// Order to attach the suggestion to
    order: OrderUuid,
}

pub(crate) async fn run(
    args: SuggestArgs,
    context: &AppContext,
    window: Duration,
) -> Result<(), String> {
    let controller =
        AutosaveController::spawn(Arc::clone(&context.suggestions), args.order, window);
    let mut status = controller.subscribe();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        controller.input_changed(line);
    }

    // let the worker drain pending input before sampling the status
    tokio::time::sleep(Duration::from_millis(50)).await;

    let settled = tokio::time::timeout(
        window * 4,
        status.wait_for(|status| {
            matches!(
                status,
                DraftStatus::Idle | DraftStatus::Saved | DraftStatus::Failed(_)
            )
        }),
    )
    .await;

    match settled {
        Ok(Ok(status)) => match &*status {
            DraftStatus::Saved => {
                println!("suggestion saved");
                Ok(())
            }
            DraftStatus::Idle => {
                println!("nothing to save");
                Ok(())
            }
            DraftStatus::Failed(message) => Err(message.clone()),
            DraftStatus::Typing | DraftStatus::Saving => unreachable!("filtered by wait_for"),
        },
        Ok(Err(_)) => Err("autosave controller stopped unexpectedly".to_owned()),
        Err(_) => Err("timed out waiting for the save to settle".to_owned()),
    }
}
