//! Entry point for the `lang-lookup` command.
//!
//! Usage: `lang-lookup <options.json> <key> [value]`

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use lang_store::{
    Args,
    FileFetcher,
    LangOptions,
    LangStore,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(options_path), Some(key)) = (args.next(), args.next()) else {
        tracing::error!("Usage: lang-lookup <options.json> <key> [value]");
        return ExitCode::FAILURE;
    };
    let value = args.next().map(Args::from);

    let options = match LangOptions::from_file(&PathBuf::from(options_path)) {
        Ok(options) => options,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut store = LangStore::new(FileFetcher);
    store.init(&options).await;

    let Some(text) = store.get(&key, value.as_ref()) else {
        tracing::error!(key, locale = store.locale(), "Translation not found");
        return ExitCode::FAILURE;
    };

    if let Err(err) = writeln!(std::io::stdout().lock(), "{text}") {
        tracing::error!("Failed to write output: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
