//! Settings commands - show and update persisted preferences.

use llmmar_chat::{ChatSession, Settings};
use llmmar_ollama::OLLAMA_PORT;

use super::{describe_status, print_entries, StorageOptions};

/// Requested updates; `None` keeps the current value.
#[derive(Debug, Default)]
pub(crate) struct Changes {
    pub ip: Option<String>,
    pub model: Option<String>,
    pub stream: Option<bool>,
    pub dark_mode: Option<bool>,
}

impl Changes {
    fn is_empty(&self) -> bool {
        self.ip.is_none() && self.model.is_none() && self.stream.is_none() && self.dark_mode.is_none()
    }

    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(ip) = self.ip {
            settings.ip_address = ip.trim().to_string();
        }
        if let Some(model) = self.model {
            settings.model_name = model.trim().to_string();
        }
        if let Some(stream) = self.stream {
            settings.verbose = stream;
        }
        if let Some(dark_mode) = self.dark_mode {
            settings.dark_mode = dark_mode;
        }
        settings
    }
}

/// Print the current settings.
pub(crate) fn show(
    session: &ChatSession,
    storage: &StorageOptions,
    json: bool,
) -> miette::Result<()> {
    let settings = session.settings();

    if json {
        let text = serde_json::to_string_pretty(&settings)
            .map_err(|e| miette::miette!("Failed to serialize settings: {}", e))?;
        println!("{}", text);
        return Ok(());
    }

    print!("{}", render(&settings));
    match storage.storage_dir()? {
        Some(dir) => println!("Storage:     {}", dir.display()),
        None => println!("Storage:     in memory"),
    }
    Ok(())
}

/// Apply changes, persist them, and report the server state if the host moved.
pub(crate) async fn set(session: &ChatSession, changes: Changes) -> miette::Result<()> {
    if changes.is_empty() {
        return Err(miette::miette!(
            "Nothing to change. Pass at least one of --ip, --model, --stream, --dark-mode"
        ));
    }

    let current = session.settings();
    let updated = changes.apply(current.clone());
    let host_changed = current.ip_address != updated.ip_address;

    let before = session.log().len();
    session
        .save_settings(updated)
        .await
        .map_err(|e| miette::miette!("Failed to save settings: {}", e))?;

    print_entries(&session.log().entries_since(before));
    if host_changed {
        let status = session.monitor().status();
        println!("{}", describe_status(session.endpoint().as_ref(), status));
    }
    Ok(())
}

/// Human-readable settings listing.
pub(crate) fn render(settings: &Settings) -> String {
    let host = if settings.ip_address.is_empty() {
        "(not set)".to_string()
    } else {
        format!("{} (port {})", settings.ip_address, OLLAMA_PORT)
    };
    let model = if settings.model_name.is_empty() {
        "(not set)"
    } else {
        settings.model_name.as_str()
    };

    format!(
        "Server host: {}\nModel:       {}\nVerbose:     {}\nDark mode:   {}\n",
        host, model, settings.verbose, settings.dark_mode
    )
}
