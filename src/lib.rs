pub mod audio;
pub mod cli;
pub mod concat;
pub mod config;
pub mod error;
pub mod transcode;
pub mod wav;
pub mod writer;

pub use audio::{encode_pcm16le, linear_to_ulaw};
pub use cli::{Cli, Command};
pub use concat::{concat_buffers, concat_files, Concatenated};
pub use config::AppConfig;
pub use error::{Result as WaveResult, WaveError};
pub use transcode::{transcode_buffer, transcode_file, Transcoded};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::LogFormat;

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = AppConfig::load_from_env().context("Konfigürasyon yüklenemedi")?;
    init_tracing(&config)?;

    execute(cli.command).await.inspect_err(|e| error!(error = %e, "İşlem başarısız oldu."))
}

pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.rust_log))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = if config.is_development() {
        subscriber_builder.with_target(true).with_line_number(true).try_init()
    } else if config.log_format == LogFormat::Json {
        subscriber_builder.json().with_current_span(true).with_span_list(true).try_init()
    } else {
        subscriber_builder.with_target(false).try_init()
    };
    Ok(())
}

pub async fn execute(command: Command) -> Result<()> {
    match command {
        Command::Encode { input, output } => {
            let transcoded = transcode_file(&input, &output)
                .await
                .with_context(|| format!("{} dönüştürülemedi", input.display()))?;
            info!(samples = transcoded.samples, output = %output.display(), "Tamamlandı.");
        }
        Command::Concat { first, second, output } => {
            let joined = concat_files(&first, &second, &output)
                .await
                .context("Dosyalar birleştirilemedi")?;
            info!(payload_len = joined.payload_len(), output = %output.display(), "Tamamlandı.");
        }
    }
    Ok(())
}
