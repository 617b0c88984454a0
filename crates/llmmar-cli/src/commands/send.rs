//! Send command - one prompt, one answer.

use llmmar_chat::ChatSession;

use super::print_entries;

pub(crate) async fn run(session: &ChatSession, prompt: &str) -> miette::Result<()> {
    let before = session.log().len();

    if !session.submit(prompt).await {
        return Err(miette::miette!("Nothing to send: the prompt is empty"));
    }

    print_entries(&session.log().entries_since(before));
    Ok(())
}
