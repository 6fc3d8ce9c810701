//! Command-line arguments for the Hexdeck console.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the Hexdeck console
#[derive(Debug, Parser)]
#[command(name = "hexdeck")]
#[command(about = "Load a command file and fire hex byte commands at a serial device")]
#[command(version)]
pub struct Args {
    /// Command file to load at startup
    #[arg(help = "Command file describing named hex byte commands")]
    pub command_file: Option<PathBuf>,

    /// Serial port to connect to at startup
    #[arg(long, help = "Serial port to open (e.g., /dev/ttyUSB0, COM3)")]
    pub port: Option<String>,

    /// Baud rate override for the serial connection
    #[arg(long, help = "Baud rate for the serial connection")]
    pub baud: Option<u32>,

    /// Settings file override
    #[arg(long, help = "Settings file to use instead of the platform default")]
    pub settings: Option<PathBuf>,

    /// List candidate serial ports and exit
    #[arg(long, help = "List candidate serial ports and exit")]
    pub list_ports: bool,

    /// Run without touching hardware
    #[arg(long, help = "Discard writes instead of opening a serial port")]
    pub dry_run: bool,

    /// Verbose logging
    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_minimal() {
        let args = Args::parse_from(["hexdeck"]);
        assert!(args.command_file.is_none());
        assert!(!args.dry_run);
        assert!(!args.list_ports);
    }

    #[test]
    fn test_args_parse_full() {
        let args = Args::parse_from([
            "hexdeck",
            "deck.cfg",
            "--port",
            "/dev/ttyUSB0",
            "--baud",
            "9600",
            "--dry-run",
            "--verbose",
        ]);
        assert_eq!(args.command_file, Some(PathBuf::from("deck.cfg")));
        assert_eq!(args.port.as_deref(), Some("/dev/ttyUSB0"));
        assert_eq!(args.baud, Some(9600));
        assert!(args.dry_run);
        assert!(args.verbose);
    }
}
