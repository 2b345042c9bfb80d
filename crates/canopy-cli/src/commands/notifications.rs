//! Notification feed CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use canopy_core::result::AppResult;
use canopy_entity::actor::Actor;
use canopy_entity::notification::{Notification, NotificationCategory};
use canopy_service::NotificationStore;

use crate::output::{self, OutputFormat};

/// Arguments for notification commands
#[derive(Debug, Args)]
pub struct NotificationsArgs {
    /// Notification subcommand
    #[command(subcommand)]
    pub command: NotificationsCommand,
}

/// Notification subcommands
#[derive(Debug, Subcommand)]
pub enum NotificationsCommand {
    /// List the seeded feed
    List {
        /// Only this category (signup, login, tree, profile, comment)
        #[arg(short, long)]
        category: Option<NotificationCategory>,
        /// Only unread notifications
        #[arg(short, long)]
        unread: bool,
    },
    /// Walk through add, mark-all-read and clear on an empty feed
    Demo,
}

/// Notification display row
#[derive(Debug, Serialize, Tabled)]
struct NotificationRow {
    /// Short id
    id: String,
    /// Category
    category: String,
    /// Message
    message: String,
    /// Actor
    actor: String,
    /// Local time
    time: String,
    /// Read marker
    read: String,
}

impl From<&Notification> for NotificationRow {
    fn from(n: &Notification) -> Self {
        Self {
            id: output::short_id(n.id()),
            category: n.category().to_string(),
            message: n.message().to_string(),
            actor: n.actor().map(|a| a.name.clone()).unwrap_or_default(),
            time: output::local_time(n.timestamp()),
            read: if n.is_read() { "✓" } else { "" }.to_string(),
        }
    }
}

/// One step of the demo walk-through
#[derive(Debug, Serialize, Tabled)]
struct DemoStep {
    /// What was done
    step: String,
    /// Unread count after the step
    unread: usize,
    /// Feed length after the step
    total: usize,
}

impl DemoStep {
    fn after(step: &str, store: &NotificationStore) -> Self {
        Self {
            step: step.to_string(),
            unread: store.unread_count(),
            total: store.len(),
        }
    }
}

/// Execute notification commands
pub async fn execute(
    args: &NotificationsArgs,
    config_path: &str,
    format: OutputFormat,
) -> AppResult<()> {
    let config = super::load_config(config_path)?;

    match &args.command {
        NotificationsCommand::List { category, unread } => {
            let store = NotificationStore::new(&config.notifications);

            let mut entries = match category {
                Some(c) => store.by_category(*c),
                None => store.notifications(),
            };
            if *unread {
                entries.retain(Notification::is_unread);
            }

            let rows: Vec<NotificationRow> = entries.iter().map(NotificationRow::from).collect();
            output::print_list(&rows, format);

            if format == OutputFormat::Table {
                output::print_kv("Unread", &store.unread_count().to_string());
            }
        }
        NotificationsCommand::Demo => {
            let store = NotificationStore::empty(config.notifications.toast_buffer_size);
            let mut toasts = store.subscribe_toasts();
            let mut steps = vec![DemoStep::after("start", &store)];

            store.add_notification(
                NotificationCategory::Tree,
                "Emma Wilson planted 3 Oak trees in Riverside Park",
                Some(Actor::named("Emma Wilson")),
            );
            steps.push(DemoStep::after("add tree notification", &store));

            match toasts.try_recv() {
                Ok(toast) if format == OutputFormat::Table => {
                    output::print_success(&format!(
                        "{}: {} ({})",
                        toast.title,
                        toast.message,
                        output::local_time(toast.created_at)
                    ));
                }
                _ => {}
            }

            store.mark_all_as_read();
            steps.push(DemoStep::after("mark all as read", &store));

            store.clear_notifications();
            steps.push(DemoStep::after("clear", &store));

            output::print_list(&steps, format);
        }
    }

    Ok(())
}
