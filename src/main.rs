//! hexdeck binary entry point.

use anyhow::Context;
use clap::Parser;
use tracing::info;

use hexdeck::cli::Args;
use hexdeck::console::Console;
use hexdeck::render::{render_model, render_ports};
use hexdeck::{
    init_logging, list_ports, ConnectionParams, DeviceSession, NoOpCommunicator,
    SerialCommunicator, SettingsManager, BUILD_DATE, VERSION,
};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;
    info!(version = VERSION, build_date = BUILD_DATE, "starting hexdeck");

    let mut settings = match &args.settings {
        Some(path) => SettingsManager::load_from(path.clone())
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => SettingsManager::load_or_default().context("failed to load settings")?,
    };
    if let Some(port) = &args.port {
        settings.settings_mut().connection.port = Some(port.clone());
    }
    if let Some(baud) = args.baud {
        settings.settings_mut().connection.baud_rate = baud;
    }

    if args.list_ports {
        let ports = list_ports().context("serial port enumeration is unavailable")?;
        print!("{}", render_ports(&ports));
        return Ok(());
    }

    let mut session = if args.dry_run {
        DeviceSession::new(Box::new(NoOpCommunicator::new()))
    } else {
        // Discovering no ports is fine; a broken enumeration backend is not.
        list_ports().context("serial port enumeration is unavailable")?;
        DeviceSession::new(Box::new(SerialCommunicator::new()))
    };

    if let Some(port) = settings.settings().connection.port.clone() {
        let connection = &settings.settings().connection;
        let mut params = ConnectionParams::new(port)
            .with_baud_rate(connection.baud_rate)
            .with_timeout_ms(connection.timeout_ms);
        params.data_bits = connection.data_bits;
        params.stop_bits = connection.stop_bits;
        match session.connect(&params) {
            Ok(()) => println!("Connected to {params}"),
            Err(err) => eprintln!("Connection failed: {err}. Use 'connect <port>' to retry."),
        }
    }

    let mut console = Console::new(session, settings);
    match &args.command_file {
        Some(path) => print!("{}", console.load_file(path)),
        None => {
            print!("{}", render_model(console.model()));
            println!("Type 'load <path>' to load a command file, 'help' for commands.");
        }
    }

    console.run()
}
