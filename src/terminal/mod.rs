//! Interactive front-end: render, read a command, apply it to the panel.

pub mod command;
pub mod console;

use tracing::{debug, info};

pub use command::Command;
pub use console::Console;

use crate::panel::{CrudPanel, DeleteOutcome, Entity, PanelError};
use crate::view;

const PROMPT: &str = "> ";

/// Run until `quit` or end of input.
///
/// Panel failures are already shown through the notifier, so they only end up
/// in the log here.
pub async fn run<E: Entity>(panel: &mut CrudPanel<E>, console: &Console) -> std::io::Result<()> {
    log_failure(panel.mount().await);
    console.print(&command::help::<E>())?;

    loop {
        console.print(&view::render(panel))?;
        let Some(line) = console.read_line(PROMPT).await? else {
            info!("input closed");
            break;
        };
        match Command::<E>::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => console.print(&command::help::<E>())?,
            Ok(Some(command)) => apply(panel, command).await,
            Ok(None) => {}
            Err(e) => console.print(&e.to_string())?,
        }
    }
    Ok(())
}

async fn apply<E: Entity>(panel: &mut CrudPanel<E>, command: Command<E>) {
    debug!(?command, "applying command");
    match command {
        Command::New => panel.open_new(),
        Command::Edit(id) => {
            if let Ok(record) = panel.select(id).await {
                panel.open_edit(record);
            }
        }
        Command::Delete(id) => match panel.select(id).await {
            Ok(record) => match panel.delete(&record).await {
                Ok(DeleteOutcome::Deleted) => info!(id = %id, "record deleted"),
                Ok(DeleteOutcome::Cancelled) => info!(id = %id, "delete cancelled"),
                Err(e) => log_failure::<()>(Err(e)),
            },
            Err(e) => log_failure::<()>(Err(e)),
        },
        Command::Set(field, value) => log_failure(panel.set_field(field, value).await),
        Command::Save => log_failure(panel.submit().await),
        Command::Cancel => panel.close_modal(),
        Command::Filter(field) => panel.select_filter(field),
        Command::Search(query) => log_failure(panel.search(query).await),
        Command::Clear => log_failure(panel.clear_filters().await),
        Command::Refresh => log_failure(panel.load().await),
        Command::Help | Command::Quit => {}
    }
}

fn log_failure<T>(result: Result<T, PanelError>) {
    if let Err(e) = result {
        debug!(error = %e, "command failed");
    }
}
