use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::net::UdpSocket;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use rosc::{encoder, OscMessage, OscPacket, OscType};

use crate::console;
use crate::parser::{LineParser, ParsedMessage};
use crate::Args;

/// Outgoing datagram seam. The replay loop only needs "put these bytes
/// on the wire"; tests substitute a recording implementation.
pub trait Transport {
    fn send(&mut self, buf: &[u8]) -> io::Result<usize>;
}

/// UDP client bound to an ephemeral local port and connected to the
/// destination. Connecting a UDP socket only resolves the target and
/// fixes the peer; no traffic is exchanged and nothing blocks.
pub struct UdpTransport {
    socket: UdpSocket,
}

impl UdpTransport {
    pub fn new(ip: &str, port: u16) -> io::Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.connect((ip, port))?;
        Ok(UdpTransport { socket })
    }
}

impl Transport for UdpTransport {
    fn send(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.socket.send(buf)
    }
}

/// Encode one address/value pair as a single-message OSC packet with
/// one float32 argument.
fn encode_message(msg: &ParsedMessage) -> Result<Vec<u8>, rosc::OscError> {
    let packet = OscPacket::Message(OscMessage {
        addr: msg.address.clone(),
        args: vec![OscType::Float(msg.value as f32)],
    });
    encoder::encode(&packet)
}

/// Send pacing for a given frame rate, zero when the rate is not
/// positive. Computed per run but not applied between sends; the file
/// currently replays as fast as the loop can go.
pub fn frame_delay(fps: f64) -> Duration {
    if fps > 0.0 {
        Duration::from_secs_f64(1.0 / fps)
    } else {
        Duration::ZERO
    }
}

/// Replay the log file once, or indefinitely when `cfg.repeat` is set.
///
/// Each pass opens the file fresh and walks it line by line. Lines that
/// fail to parse are reported and skipped; every valid line becomes one
/// OSC datagram on `transport`. File and transport errors abort the
/// replay. The stop flag is checked at the top of each pass and before
/// each send so a repeating run can be ended without killing the
/// process.
pub fn replay<T: Transport>(
    cfg: &Args,
    parser: &LineParser,
    transport: &mut T,
    stop: &AtomicBool,
) -> Result<(), Box<dyn Error>> {
    // Reserved pacing rate, see frame_delay
    let _delay = frame_delay(cfg.fps);

    loop {
        if stop.load(Ordering::SeqCst) {
            return Ok(());
        }

        // Scoped per pass; dropped (and closed) at the end of each loop body
        let file = File::open(&cfg.file)?;
        for line in BufReader::new(file).lines() {
            let line = line?;
            match parser.parse(&line) {
                Ok(msg) => {
                    if stop.load(Ordering::SeqCst) {
                        return Ok(());
                    }
                    let buf = encode_message(&msg)?;
                    transport.send(&buf)?;
                }
                Err(err) => console::warn_skip(&err),
            }
        }

        if !cfg.repeat {
            return Ok(());
        }
    }
}
