//! # Hexdeck
//!
//! A serial command deck: load a command file describing named hexadecimal
//! byte commands and fire them at a connected serial device from an
//! interactive console.
//!
//! ## Architecture
//!
//! Hexdeck is organized as a workspace with multiple crates:
//!
//! 1. **hexdeck-core** - Byte commands, hex codec, errors, session events
//! 2. **hexdeck-commands** - Command-file parser, shortcut grouping, model
//! 3. **hexdeck-communication** - Serial transport and the device session
//! 4. **hexdeck-settings** - Persisted application settings
//! 5. **hexdeck** - Console binary that integrates all crates
//!
//! ## Command files
//!
//! A command file is plain text: `[NAME]` lines open sections, and each
//! following line names one byte command (`LABEL = HEXBYTES`, or the
//! pipe-delimited form inside `[BATCHSEND]`). The `[SHORTCUT]` section is
//! clustered into labelled groups; everything else renders as a flat run of
//! numbered buttons.

pub mod cli;
pub mod console;
pub mod render;

pub use hexdeck_commands::{
    load_from_path, parse, CommandEntry, CommandGroup, CommandModel, CommandSet, FlatSection,
    GroupedSection, Section, SectionGrammar, SectionView, ShortcutGroup, BATCHSEND_SECTION,
    SHORTCUT_SECTION,
};

pub use hexdeck_communication::{
    list_ports, Communicator, ConnectionParams, DeviceSession, NoOpCommunicator,
    SerialCommunicator, SerialParity, SerialPortInfo,
};

pub use hexdeck_core::{ByteCommand, Error, EventDispatcher, Result, SessionEvent};

pub use hexdeck_settings::{ConnectionSettings, ConsoleSettings, Settings, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output to stderr, leaving stdout to the interactive console
/// - RUST_LOG environment variable support
/// - Debug level when `verbose` is set
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(default_level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
