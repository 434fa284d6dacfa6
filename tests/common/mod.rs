// Shared helpers for the integration tests

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use xtmines::xtm_config::Config;
use xtmines::xtm_term::Screen;

/// In-memory terminal that keeps everything written to it
#[derive(Clone, Default)]
pub struct Sink(Arc<Mutex<Vec<u8>>>);

impl Sink {
    pub fn screen(&self) -> Screen {
        Screen::from_writer(self.clone())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Settings with every animation switched off
pub fn quiet_config() -> Config {
    Config {
        animations: false,
        ..Config::default()
    }
}
