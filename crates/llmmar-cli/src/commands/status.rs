//! Status command - probe the configured server once.

use llmmar_chat::ChatSession;

use super::describe_status;

pub(crate) async fn run(session: &ChatSession) -> miette::Result<()> {
    let status = session.refresh_status().await;
    println!("{}", describe_status(session.endpoint().as_ref(), status));
    Ok(())
}
