use api::{ApiClient, SyncResult};
use dioxus::prelude::*;

use crate::dialog::{use_dialogs, DialogRequest};
use crate::page_task::use_page_task;

/// What the result panel shows for one sync run.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncSummary {
    pub headline: String,
    pub total: u32,
    pub success: u32,
    pub failed: u32,
    /// Per-film failures, verbatim from the server.
    pub warnings: Vec<String>,
}

impl From<&SyncResult> for SyncSummary {
    fn from(result: &SyncResult) -> Self {
        let headline = if result.message.trim().is_empty() {
            "Sync completed".to_string()
        } else {
            result.message.clone()
        };
        Self {
            headline,
            total: result.total,
            success: result.success,
            failed: result.failed,
            warnings: result.errors.clone(),
        }
    }
}

#[component]
pub fn SyncView() -> Element {
    let client = use_context::<ApiClient>();
    let dialogs = use_dialogs();
    let mut syncing = use_signal(|| false);
    let mut summary = use_signal(|| Option::<SyncSummary>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let sync = use_page_task(move |()| {
        let client = client.clone();
        async move {
            syncing.set(true);
            error.set(None);
            summary.set(None);
            match client.sync_films().await {
                Ok(result) => {
                    tracing::info!(
                        total = result.total,
                        success = result.success,
                        failed = result.failed,
                        "films synced"
                    );
                    summary.set(Some(SyncSummary::from(&result)));
                }
                Err(e) => {
                    tracing::warn!("sync failed: {e}");
                    error.set(Some(e.user_message("Sync failed.")));
                }
            }
            syncing.set(false);
        }
    });

    let start_sync = move |_| {
        let sync = sync.clone();
        dialogs.show(
            DialogRequest::confirm(
                "Sync all films from the external Star Wars API? Locally modified films are skipped.",
                move || async move {
                    if !sync.send(()) {
                        tracing::debug!("sync page closed before the sync started");
                    }
                    Ok(())
                },
            )
            .title("Sync films")
            .confirm_label("Sync"),
        );
    };

    rsx! {
        div {
            class: "container",
            div {
                class: "sync-container",
                h1 { "Sync Films" }

                div {
                    class: "sync-info",
                    p { "Pulls every film from the external Star Wars API (SWAPI) into the local catalog." }
                    ul {
                        li { "New films are added." }
                        li { "Existing films without local changes are updated." }
                        li { "Films modified locally are skipped." }
                        li { "Films created locally are left alone." }
                    }
                }

                if let Some(message) = error() {
                    div { class: "alert alert-error", "{message}" }
                }

                if let Some(result) = summary() {
                    div {
                        class: "sync-result",
                        div {
                            class: "alert alert-success",
                            h3 { "{result.headline}" }
                            div {
                                class: "result-stats",
                                div { class: "stat", strong { "Total: " } "{result.total}" }
                                div { class: "stat success", strong { "Succeeded: " } "{result.success}" }
                                div { class: "stat failed", strong { "Failed: " } "{result.failed}" }
                            }
                        }
                        if !result.warnings.is_empty() {
                            div {
                                class: "errors-list",
                                h4 { "Warnings" }
                                ul {
                                    for (i, warning) in result.warnings.iter().enumerate() {
                                        li { key: "{i}", "{warning}" }
                                    }
                                }
                            }
                        }
                    }
                }

                button {
                    class: "btn btn-primary btn-large",
                    disabled: syncing(),
                    onclick: start_sync,
                    if syncing() { "Syncing..." } else { "Sync now" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_failure_keeps_warnings_verbatim() {
        let result = SyncResult {
            message: "Sincronización completada".into(),
            total: 6,
            success: 4,
            failed: 2,
            errors: vec![
                "Film 'Attack of the Clones' skipped: modified locally".into(),
                "Film 'Revenge of the Sith' failed: timeout".into(),
            ],
        };

        let summary = SyncSummary::from(&result);
        assert_eq!(summary.headline, "Sincronización completada");
        assert_eq!((summary.total, summary.success, summary.failed), (6, 4, 2));
        assert_eq!(summary.warnings, result.errors);
    }

    #[test]
    fn test_blank_message_gets_headline() {
        let summary = SyncSummary::from(&SyncResult {
            total: 6,
            success: 6,
            ..SyncResult::default()
        });
        assert_eq!(summary.headline, "Sync completed");
        assert!(summary.warnings.is_empty());
    }
}
