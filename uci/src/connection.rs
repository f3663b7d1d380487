use super::commands::{UciInput, UciOutput};
use super::decoder::Decoder;
use super::encoder::Encoder;
use log::debug;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

/// Line-based UCI session: reads commands from a reader and prints responses
/// from a dedicated output thread, so a worker can answer while input is read.
pub struct UciConnection {
    output_tx: Sender<UciOutput>,
    printer: JoinHandle<()>,
}

impl Default for UciConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl UciConnection {
    /// A connection that writes its responses to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        let (output_tx, output_rx) = channel();
        let printer = Self::spawn_output_handler(output_rx, writer);

        Self { output_tx, printer }
    }

    /// A sender for responses produced outside the listen callback.
    pub fn sender(&self) -> Sender<UciOutput> {
        self.output_tx.clone()
    }

    /// Reads commands from stdin until `quit` or end of input.
    pub fn listen<F>(&mut self, callback: F) -> io::Result<()>
    where
        F: FnMut(&UciInput, Sender<UciOutput>) -> Result<(), Box<dyn Error>>,
    {
        let stdin = io::stdin();
        self.listen_on(stdin.lock(), callback)
    }

    // The callback gets each decoded command and a sender for its responses.
    pub fn listen_on<R, F>(&mut self, mut reader: R, mut callback: F) -> io::Result<()>
    where
        R: BufRead,
        F: FnMut(&UciInput, Sender<UciOutput>) -> Result<(), Box<dyn Error>>,
    {
        let decoder = Decoder::new();

        loop {
            let mut in_line = String::new();
            if reader.read_line(&mut in_line)? == 0 {
                debug!("Input closed");
                break;
            }

            let in_line = in_line.trim();
            if in_line.is_empty() {
                continue;
            }
            debug!("Input: {:?}", in_line);

            let input = decoder.decode(in_line);

            if let Err(e) = callback(&input, self.output_tx.clone()) {
                debug!("Callback error: {:?}", e);
            }

            if matches!(input, UciInput::Quit) {
                break;
            }
        }

        Ok(())
    }

    /// Waits until every response sent so far has been written.
    ///
    /// Responses still owned by other senders (a worker thread, say) are
    /// flushed once those senders are dropped.
    pub fn close(self) {
        drop(self.output_tx);
        if self.printer.join().is_err() {
            debug!("Output thread panicked");
        }
    }

    fn spawn_output_handler<W: Write + Send + 'static>(
        output_rx: Receiver<UciOutput>,
        mut writer: W,
    ) -> JoinHandle<()> {
        thread::spawn(move || {
            let encoder = Encoder;

            while let Ok(output) = output_rx.recv() {
                let out_line = encoder.encode(&output);
                debug!("Output: {:?}", out_line);
                if writeln!(writer, "{}", out_line)
                    .and_then(|_| writer.flush())
                    .is_err()
                {
                    break;
                }
            }
        })
    }
}
