//! Keyboard adapter for interactive batch runs.
//!
//! `p` toggles pause, `q` cancels after the current day, Ctrl-C exits
//! immediately without cleanup. Skipped entirely when stdin is not a
//! terminal (e.g. when spawned by the control server).

use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal;

use crate::control::CaptureControl;

const INPUT_POLL: Duration = Duration::from_millis(200);

/// Restores the terminal and stops the listener thread when dropped.
pub struct KeyboardListener {
    stop: Arc<AtomicBool>,
    raw_mode: bool,
}

impl Drop for KeyboardListener {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
    }
}

/// Start listening for control keys, feeding `control`.
///
/// Returns a guard that must be kept alive for the duration of the run.
pub fn listen(control: CaptureControl) -> KeyboardListener {
    let stop = Arc::new(AtomicBool::new(false));

    if !std::io::stdin().is_terminal() {
        tracing::debug!("stdin is not a terminal; keyboard controls disabled");
        return KeyboardListener {
            stop,
            raw_mode: false,
        };
    }

    let raw_mode = match terminal::enable_raw_mode() {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("could not enable raw mode, keyboard controls disabled: {e}");
            false
        }
    };

    if raw_mode {
        let stop = Arc::clone(&stop);
        std::thread::spawn(move || listen_loop(&control, &stop));
    }

    KeyboardListener { stop, raw_mode }
}

fn listen_loop(control: &CaptureControl, stop: &AtomicBool) {
    while !stop.load(Ordering::Relaxed) {
        match crossterm::event::poll(INPUT_POLL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                tracing::warn!("keyboard poll failed, controls disabled: {e}");
                return;
            }
        }
        let Ok(event) = crossterm::event::read() else {
            continue;
        };
        if let Event::Key(key) = event {
            handle_key(control, key);
        }
    }
}

fn handle_key(control: &CaptureControl, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            // Immediate exit, no cleanup, mirroring a raw ^C.
            let _ = terminal::disable_raw_mode();
            eprintln!();
            std::process::exit(130);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            control.cancel();
            eprintln!("\r\n[command] quitting after current day...");
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            if control.toggle_pause() {
                eprintln!("\r\n[command] paused. press P to resume.");
            } else {
                eprintln!("\r\n[command] resumed.");
            }
        }
        _ => {}
    }
}
