use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

type Input = Box<dyn AsyncBufRead + Send + Unpin>;
type Output = Box<dyn Write + Send>;

/// Line-oriented input and output shared by the command loop and the notifier.
///
/// Input is read asynchronously so waiting for the user never blocks the runtime.
#[derive(Clone)]
pub struct Console {
    input: Arc<tokio::sync::Mutex<Input>>,
    output: Arc<Mutex<Output>>,
}

impl Console {
    pub fn new(input: Input, output: Output) -> Self {
        Self {
            input: Arc::new(tokio::sync::Mutex::new(input)),
            output: Arc::new(Mutex::new(output)),
        }
    }

    pub fn stdio() -> Self {
        Self::new(
            Box::new(BufReader::new(tokio::io::stdin())),
            Box::new(io::stdout()),
        )
    }

    pub fn print(&self, text: &str) -> io::Result<()> {
        self.write(&format!("{text}\n"))
    }

    /// Show `prompt` and wait for one line. `None` at end of input.
    pub async fn read_line(&self, prompt: &str) -> io::Result<Option<String>> {
        self.write(prompt)?;
        let mut line = String::new();
        let read = self.input.lock().await.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    fn write(&self, text: &str) -> io::Result<()> {
        let mut output = self
            .output
            .lock()
            .map_err(|_| io::Error::other("console output lock poisoned"))?;
        output.write_all(text.as_bytes())?;
        output.flush()
    }
}
