// Library root
// -----------
// This crate exposes the pieces of the interactive scp menu. The binary
// (`main.rs`) wires them together and hands control to the menu loop.
//
// Module responsibilities:
// - `settings`: the remote IP / user / port record and its validation.
// - `store`: loading and saving that record as JSON next to the executable.
// - `transfer`: building scp arguments and running the external process.
// - `console`: terminal prompts, output and screen clearing.
// - `ui`: the numbered main menu and the screens behind it.
pub mod console;
pub mod error;
pub mod settings;
pub mod store;
pub mod transfer;
pub mod ui;
