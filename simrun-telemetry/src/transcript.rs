//! Live console echo of report lines.
//!
//! The status file is always produced from the structured report; the
//! transcript only mirrors lines to a console while the run is in progress.

use std::io::{self, Write};

pub struct Transcript {
    sink: Option<Box<dyn Write + Send>>,
}

impl Transcript {
    /// Echo to stdout when `enabled`, otherwise stay silent.
    pub fn stdout(enabled: bool) -> Self {
        if enabled {
            Self::to_writer(io::stdout())
        } else {
            Self::disabled()
        }
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn to_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Some(Box::new(writer)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Echo one line. Console write failures are logged and otherwise ignored.
    pub fn line(&mut self, text: &str) {
        if let Some(sink) = self.sink.as_mut() {
            if let Err(err) = writeln!(sink, "{}", text).and_then(|_| sink.flush()) {
                tracing::warn!(%err, "transcript write failed");
            }
        }
    }
}

impl std::fmt::Debug for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transcript")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn echoes_lines_in_order() {
        let buf = SharedBuf::default();
        let mut transcript = Transcript::to_writer(buf.clone());
        transcript.line("Modelsim : PASS");
        transcript.line("Riviera Pro : PASS");

        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text, "Modelsim : PASS\nRiviera Pro : PASS\n");
    }

    #[test]
    fn disabled_transcript_is_silent() {
        let mut transcript = Transcript::stdout(false);
        assert!(!transcript.is_enabled());
        transcript.line("ignored");
    }
}
