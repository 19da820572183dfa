use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::Result;

/// Sends `log` output to `path` (appending), filtered by `RUST_LOG` with
/// `warn` as the default. Without a path, output is discarded: stderr belongs
/// to the terminal UI.
pub fn init(path: Option<&Path>) -> Result<()> {
    let target = match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Target::Pipe(Box::new(file))
        }
        None => Target::Pipe(Box::new(io::sink())),
    };

    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(target)
        .try_init()?;

    log::info!("circlet v{} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}
