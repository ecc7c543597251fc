mod paths;

use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use checkboxes::prelude::*;
use log::{LevelFilter, info, warn};
use simplelog::{Config, WriteLogger};
use thiserror::Error;

#[derive(Debug, Error)]
enum AppError {
    #[error("usage: checkboxes-tui <field-file> [initial-value]")]
    Usage,
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Checkboxes(#[from] checkboxes::Error),
}

/// Log to a file in the cache dir; the terminal belongs to the form.
fn init_logging() {
    let level = env::var("CHECKBOXES_LOG")
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Debug);

    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = path.parent()
        && fs::create_dir_all(dir).is_err()
    {
        return;
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(level, Config::default(), file);
    }
}

fn load_field(path: &Path) -> Result<(FieldType, Options), AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let options = Options::parse(&text).map_err(checkboxes::Error::from)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "field".into());
    let field = FieldType::from_options(name, &options).map_err(checkboxes::Error::from)?;
    Ok((field, options))
}

async fn run() -> Result<Selection, AppError> {
    let mut args = env::args().skip(1);
    let path = PathBuf::from(args.next().ok_or(AppError::Usage)?);
    let initial = args
        .next()
        .map(|raw| deserialize(&raw))
        .unwrap_or_default();

    let (field, options) = load_field(&path)?;
    let language = env::var("CHECKBOXES_LANG").unwrap_or_else(|_| "en".into());
    let catalog = Catalog::from_choice_labels(language, &options);
    info!("loaded field {} from {}", field.name, path.display());

    let form = Form::new(field, State::new(initial));
    Ok(Runtime::new(catalog).run(form).await?)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(value) => {
            println!("{}", serialize(&value));
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
