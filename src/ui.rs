// UI layer: the numbered main menu and the screens behind it. Everything is
// synchronous: each step blocks on a console read or on the scp process.

use crate::console::Console;
use crate::error::{Error, Result};
use crate::settings::Settings;
use crate::store::ConfigStore;
use crate::transfer::{CommandRunner, Direction, Executor, TransferRequest};
use tracing::debug;

/// Menu states. `MainMenu` is where every other screen returns to;
/// `Exited` is only reached through menu choice 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Configuring,
    Sending,
    Receiving,
    ShowingSettings,
    Exited,
}

impl Screen {
    /// Map a main-menu answer to the screen it opens.
    pub fn from_choice(choice: &str) -> Option<Screen> {
        match choice.trim() {
            "1" => Some(Screen::Configuring),
            "2" => Some(Screen::Sending),
            "3" => Some(Screen::Receiving),
            "4" => Some(Screen::ShowingSettings),
            "5" => Some(Screen::Exited),
            _ => None,
        }
    }
}

/// `back` in any casing aborts the current screen.
pub fn is_back(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("back")
}

/// Anything starting with `y`/`Y` means "directory"; everything else,
/// including an empty answer, does not.
pub fn parse_directory_flag(answer: &str) -> bool {
    answer.trim().to_lowercase().starts_with('y')
}

fn keep_or_replace(answer: &str, current: &str) -> String {
    let answer = answer.trim();
    if answer.is_empty() {
        current.to_string()
    } else {
        answer.to_string()
    }
}

/// Owns the in-memory settings for the lifetime of the process, plus the
/// store, the scp executor and the console it talks through.
pub struct Menu<C, R> {
    settings: Settings,
    store: ConfigStore,
    executor: Executor<R>,
    console: C,
}

impl<C: Console, R: CommandRunner> Menu<C, R> {
    pub fn new(settings: Settings, store: ConfigStore, executor: Executor<R>, console: C) -> Self {
        Menu {
            settings,
            store,
            executor,
            console,
        }
    }

    /// Build the menu from whatever is on disk. Load failures are shown to
    /// the user and replaced by default settings.
    pub fn load(store: ConfigStore, executor: Executor<R>, mut console: C) -> Result<Self> {
        let settings = match store.load() {
            Ok(settings) => settings,
            Err(e) => {
                console.error(&format!("Error loading config: {}", e));
                console.pause()?;
                Settings::default()
            }
        };
        Ok(Menu::new(settings, store, executor, console))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Main loop. Returns when the user picks "Exit"; only a console
    /// failure ends it early.
    pub fn run(&mut self) -> Result<()> {
        let mut screen = Screen::MainMenu;
        loop {
            debug!(?screen, "entering screen");
            screen = match screen {
                Screen::MainMenu => self.main_menu()?,
                Screen::Configuring => {
                    self.configure()?;
                    Screen::MainMenu
                }
                Screen::Sending => {
                    self.transfer(Direction::Send)?;
                    Screen::MainMenu
                }
                Screen::Receiving => {
                    self.transfer(Direction::Receive)?;
                    Screen::MainMenu
                }
                Screen::ShowingSettings => {
                    self.show_settings()?;
                    Screen::MainMenu
                }
                Screen::Exited => {
                    self.console.clear()?;
                    self.console.say("Goodbye!");
                    return Ok(());
                }
            };
        }
    }

    fn main_menu(&mut self) -> Result<Screen> {
        self.console.clear()?;
        self.console.say("\n=== SCP File Transfer Tool ===");
        self.console.say("1. Configure Settings");
        self.console.say("2. Send File/Directory");
        self.console.say("3. Receive File/Directory");
        self.console.say("4. Show Current Settings");
        self.console.say("5. Exit");

        let choice = self.console.ask("\nEnter your choice (1-5)")?;
        match Screen::from_choice(&choice) {
            Some(screen) => Ok(screen),
            None => {
                self.console.error("Invalid choice. Please try again.");
                self.console.pause()?;
                Ok(Screen::MainMenu)
            }
        }
    }

    fn configure(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.say("\n=== Configure Settings ===");

        let answer = self
            .console
            .ask(&format!("Enter remote IP [{}]", self.settings.remote_ip))?;
        self.settings.remote_ip = keep_or_replace(&answer, &self.settings.remote_ip);

        let answer = self
            .console
            .ask(&format!("Enter remote username [{}]", self.settings.remote_user))?;
        self.settings.remote_user = keep_or_replace(&answer, &self.settings.remote_user);

        let answer = self
            .console
            .ask(&format!("Enter SSH port [{}]", self.settings.ssh_port))?;
        self.settings.ssh_port = keep_or_replace(&answer, &self.settings.ssh_port);

        match self.store.save(&self.settings) {
            Ok(()) => self.console.say("Configuration saved successfully!"),
            Err(e) => self.console.error(&format!("Error saving config: {}", e)),
        }
        self.console.pause()?;
        Ok(())
    }

    fn show_settings(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.say("\n=== Current Settings ===");
        self.console.say(&format!("Remote IP: {}", self.settings.remote_ip));
        self.console.say(&format!("Remote User: {}", self.settings.remote_user));
        self.console.say(&format!("SSH Port: {}", self.settings.ssh_port));
        self.console.pause()?;
        Ok(())
    }

    fn transfer(&mut self, direction: Direction) -> Result<()> {
        if let Err(e) = self.settings.validate() {
            self.console.error(&format!("Error: {}", e));
            self.console.pause()?;
            return Ok(());
        }

        self.console.clear()?;
        match direction {
            Direction::Send => self.console.say("\n=== Send File/Directory ==="),
            Direction::Receive => self.console.say("\n=== Receive File/Directory ==="),
        }
        self.console.say("(Type 'back' to return to main menu)");

        match self.collect_request(direction) {
            Ok(Some(request)) => {
                self.run_transfer(&request)?;
            }
            Ok(None) => debug!(?direction, "transfer aborted by user"),
            Err(e @ Error::EmptyInput { .. }) => {
                self.console.error(&format!("Error: {}", e));
                self.console.pause()?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Ask for both paths and the directory flag. `None` means the user
    /// typed `back`.
    fn collect_request(&mut self, direction: Direction) -> Result<Option<TransferRequest>> {
        let (first, second) = match direction {
            Direction::Send => (
                ("Enter local file/directory path", "Local path"),
                ("Enter remote destination path", "Remote path"),
            ),
            Direction::Receive => (
                ("Enter remote file/directory path", "Remote path"),
                ("Enter local destination path", "Local path"),
            ),
        };

        let Some(first) = self.ask_path(first.0, first.1)? else {
            return Ok(None);
        };
        let Some(second) = self.ask_path(second.0, second.1)? else {
            return Ok(None);
        };
        let answer = self.console.ask("Is this a directory? (y/N)")?;
        if is_back(&answer) {
            return Ok(None);
        }
        let recursive = parse_directory_flag(&answer);

        let (local, remote) = match direction {
            Direction::Send => (first, second),
            Direction::Receive => (second, first),
        };
        Ok(Some(TransferRequest::new(
            &self.settings,
            direction,
            &local,
            &remote,
            recursive,
        )))
    }

    fn ask_path(&mut self, prompt: &str, field: &'static str) -> Result<Option<String>> {
        let answer = self.console.ask(prompt)?;
        let answer = answer.trim();
        if is_back(answer) {
            return Ok(None);
        }
        if answer.is_empty() {
            return Err(Error::EmptyInput { field });
        }
        Ok(Some(answer.to_string()))
    }

    /// Echo the command, run it and report the outcome. Returns whether
    /// the tool exited with status zero.
    pub fn run_transfer(&mut self, request: &TransferRequest) -> Result<bool> {
        let args = request.args(&self.settings);
        self.console.say(&format!(
            "\nExecuting command: {}",
            self.executor.command_line(&args)
        ));

        let ok = match self.executor.execute(&args) {
            Ok(()) => {
                self.console.say("Transfer completed successfully!");
                true
            }
            Err(e @ Error::TransferFailed { .. }) => {
                self.console.error(&format!("Error during transfer: {}", e));
                false
            }
            Err(e) => {
                self.console.error(&format!("Error executing SCP: {}", e));
                false
            }
        };
        self.console.pause()?;
        Ok(ok)
    }
}
