use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::AtomicBool;

use clap::Parser;

mod console;
mod parser;
mod sender;

use parser::LineParser;
use sender::UdpTransport;

/// Stop flag checked by the replay loop. Nothing in the CLI sets it;
/// a `--repeat` run still ends by external process termination.
static STOP: AtomicBool = AtomicBool::new(false);

/// Replay ADDRESS(...)/FLOAT(...) log lines as OSC messages over UDP.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Path to the input log file
    pub file: PathBuf,

    /// Destination IP address or hostname
    #[arg(long, default_value = "127.0.0.1")]
    pub send_ip: String,

    /// Destination UDP port
    #[arg(long, default_value_t = 52071)]
    pub send_port: u16,

    /// Replay the file indefinitely
    #[arg(long)]
    pub repeat: bool,

    /// Intended messages per second (currently not enforced)
    #[arg(long, default_value_t = 60.0)]
    pub fps: f64,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        console::print_error(err.as_ref());
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let parser = LineParser::new();
    let mut transport = UdpTransport::new(&args.send_ip, args.send_port)?;
    console::print_banner(args);
    sender::replay(args, &parser, &mut transport, &STOP)
}
