// Entrypoint for the scp menu.
// - Keeps `main` small: set up logging, open the config store, run the menu.
// - Diagnostics go to stderr and are off below `warn` unless RUST_LOG says
//   otherwise, so they do not mix with the menu.

use scpmenu::{console::TerminalConsole, store::ConfigStore, transfer::Executor, ui::Menu};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let store = ConfigStore::beside_executable();
    let mut menu = Menu::load(store, Executor::scp(), TerminalConsole)?;

    // Blocks until the user picks "Exit".
    menu.run()?;
    Ok(())
}
