//! End-to-end tests for the line protocol.
//!
//! Drives a [`Server`] the way a client would and checks the exact response
//! lines it writes.

use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

use rookery_proto::{Flow, Server};
use rookery_session::RegistryConfig;

/// Response sink that stays readable while the server owns a handle to it.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn take_lines(&self) -> Vec<String> {
        let mut buf = self.0.lock().unwrap();
        let text = String::from_utf8(std::mem::take(&mut *buf)).unwrap();
        text.lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn server(config: RegistryConfig) -> (Server<SharedBuf>, SharedBuf) {
    let buf = SharedBuf::default();
    (Server::with_output(config, buf.clone()), buf)
}

fn open_session(server: &mut Server<SharedBuf>, buf: &SharedBuf) -> String {
    server.handle_line("new").unwrap();
    let lines = buf.take_lines();
    assert_eq!(lines.len(), 1);
    lines[0]
        .strip_prefix("session ")
        .expect("session line")
        .to_string()
}

// ── Session flow ─────────────────────────────────────────────────────────────

#[test]
fn full_session_flow() {
    let (mut server, buf) = server(RegistryConfig::default());
    let id = open_session(&mut server, &buf);

    server.handle_line(&format!("moves {id} g1")).unwrap();
    assert_eq!(buf.take_lines(), vec!["moves g1h3 g1f3"]);

    server.handle_line(&format!("play {id} e2e4")).unwrap();
    assert_eq!(
        buf.take_lines(),
        vec![r#"reply {"from":{"x":1,"y":0},"to":{"x":2,"y":2}}"#]
    );

    server.handle_line(&format!("show {id}")).unwrap();
    let lines = buf.take_lines();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "8  r n b q k b n r");
    assert_eq!(lines[4], "4  . . . . P . . .");
    assert_eq!(lines[8], "   a b c d e f g h");
    assert_eq!(lines[9], "placement rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");

    server.handle_line(&format!("close {id}")).unwrap();
    assert_eq!(buf.take_lines(), vec![format!("closed {id}")]);

    server.handle_line(&format!("show {id}")).unwrap();
    assert_eq!(buf.take_lines(), vec![format!("error session not found: {id}")]);
}

#[test]
fn json_move_descriptor_is_accepted() {
    let (mut server, buf) = server(RegistryConfig::default());
    let id = open_session(&mut server, &buf);

    let line = format!(r#"play {id} {{"from":{{"x":6,"y":7}},"to":{{"x":5,"y":5}}}}"#);
    server.handle_line(&line).unwrap();
    let lines = buf.take_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], r#"reply {"from":{"x":1,"y":0},"to":{"x":2,"y":2}}"#);

    server.handle_line(&format!("show {id}")).unwrap();
    let lines = buf.take_lines();
    assert_eq!(lines[9], "placement rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R");
}

#[test]
fn illegal_and_off_board_moves_are_errors() {
    let (mut server, buf) = server(RegistryConfig::default());
    let id = open_session(&mut server, &buf);

    server.handle_line(&format!("play {id} e2e5")).unwrap();
    assert_eq!(buf.take_lines(), vec!["error invalid move: e2e5"]);

    let line = format!(r#"play {id} {{"from":{{"x":4,"y":6}},"to":{{"x":4,"y":-1}}}}"#);
    assert_eq!(server.handle_line(&line).unwrap(), Flow::Continue);
    let lines = buf.take_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("error "), "got {lines:?}");

    let line = format!(r#"play {id} {{"from":{{"x":4,"y":6}},"to":{{"x":4,"y":200}}}}"#);
    server.handle_line(&line).unwrap();
    assert_eq!(buf.take_lines(), vec!["error coordinate (4,200) is off the board"]);

    // None of the attempts touched the board.
    server.handle_line(&format!("show {id}")).unwrap();
    let lines = buf.take_lines();
    assert_eq!(lines[9], "placement rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
}

#[test]
fn custom_placement_session() {
    let (mut server, buf) = server(RegistryConfig::default());
    server.handle_line("new 8/3P4/8/8/8/8/8/8").unwrap();
    let id = buf.take_lines()[0]["session ".len()..].to_string();

    server.handle_line(&format!("play {id} d7d8")).unwrap();
    assert_eq!(buf.take_lines(), vec!["error no legal moves available"]);
}

// ── Event loop ───────────────────────────────────────────────────────────────

#[test]
fn run_stops_at_quit() {
    let (mut server, buf) = server(RegistryConfig::default());
    let input = Cursor::new("isready\n\nbogus\nquit\nisready\n");
    server.run_with(input).unwrap();
    assert_eq!(buf.take_lines(), vec!["readyok"]);
}

#[test]
fn run_stops_when_input_closes() {
    let (mut server, buf) = server(RegistryConfig::default());
    server.run_with(Cursor::new("new\nnew\n")).unwrap();
    let lines = buf.take_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.starts_with("session ")));
    assert_eq!(server.registry().len(), 2);
}
