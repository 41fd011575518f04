use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use secrecy::{ExposeSecret, SecretString};

use crate::config::APP_NAME;
use crate::file::{read_input, write_output};
use crate::pipeline;
use crate::ui::display::{show_input, show_success};
use crate::ui::progress::ProgressDisplay;
use crate::ui::prompt;

#[derive(Parser)]
#[command(name = APP_NAME, version, about = "Decrypt files produced by openssl enc -aes-256-cbc -salt -pbkdf2.")]
pub struct Cli {
    /// Encrypted input file.
    #[arg(short, long)]
    input: PathBuf,

    /// Output file path. Defaults to the input name with `.enc` stripped,
    /// or `.decrypted` appended.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Password. Prompts when not provided.
    #[arg(short, long)]
    password: Option<String>,
}

impl Cli {
    pub fn init() -> Result<Self> {
        let subscriber = tracing_subscriber::fmt().with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(Self::parse())
    }

    pub fn execute(self) -> Result<()> {
        let password: SecretString = match self.password {
            Some(password) => SecretString::from(password),
            None => SecretString::from(prompt::decryption_password()?),
        };

        let bytes = read_input(&self.input)?;
        tracing::debug!(input = %self.input.display(), size = bytes.len(), "input loaded");
        show_input(&self.input, bytes.len() as u64);

        let input_name = self
            .input
            .file_name()
            .map_or_else(|| self.input.to_string_lossy().into_owned(), |n| n.to_string_lossy().into_owned());

        let mut display = ProgressDisplay::new();
        let decrypted = pipeline::decrypt_with_progress(&bytes, password.expose_secret(), &input_name, &mut display)
            .with_context(|| format!("failed to decrypt {}", self.input.display()))?;
        drop(display);

        let output = self.output.unwrap_or_else(|| self.input.with_file_name(&decrypted.output_name));
        write_output(&output, &decrypted.plaintext)?;
        tracing::debug!(output = %output.display(), size = decrypted.plaintext.len(), "plaintext written");

        show_success(&output, decrypted.plaintext.len() as u64);

        Ok(())
    }
}
