use std::net::UdpSocket;

use rosc::{decoder, OscPacket};

/// Prints every OSC message arriving on the given port (default 52071,
/// the replayer's default destination). Run it next to the replayer to
/// watch what goes out on the wire.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let port: u16 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 52071,
    };

    let socket = UdpSocket::bind(("0.0.0.0", port))?;
    println!("OSC monitor - listening on port {}", port);

    let mut buf = [0u8; rosc::decoder::MTU];

    loop {
        let (size, peer) = socket.recv_from(&mut buf)?;
        match decoder::decode_udp(&buf[..size]) {
            Ok((_, OscPacket::Message(msg))) => {
                println!("{} {:?} (from {})", msg.addr, msg.args, peer);
            }
            Ok((_, OscPacket::Bundle(bundle))) => {
                println!("bundle with {} elements (from {})", bundle.content.len(), peer);
            }
            Err(err) => {
                eprintln!("Failed to decode OSC: {}", err);
            }
        }
    }
}
