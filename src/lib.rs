//! Ghostwrite - types into a foreign application's input field
//!
//! The target application offers no scripting API, so this crate impersonates
//! a human user: it borrows the OS clipboard, transfers focus with a
//! synthetic click, replays key chords with the timing the application's
//! input loop needs, and puts the user's clipboard back.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: validated field text, readiness snapshots, key-chord gestures
//! - **Application**: the text entry use case and port interfaces (traits)
//! - **Infrastructure**: adapter implementations (arboard, enigo, dry-run fakes)
//! - **CLI**: command-line interface, argument parsing, and presentation

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
