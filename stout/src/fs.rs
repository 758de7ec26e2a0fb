use anyhow::Context as _;

use crate::cli::FsCommand;
use crate::cli_error::CliError;
use crate::output::OutputFormatter;

#[cfg(unix)]
pub(crate) fn fs(cmd: FsCommand, out: &dyn OutputFormatter) -> Result<(), CliError> {
    match cmd {
        FsCommand::Available { path } => {
            let bytes = stout_fs::available(&path)
                .context("query available space")
                .map_err(CliError::RuntimeError)?;
            out.available(&path, bytes);
        }
        FsCommand::Usage { path } => {
            let ratio = stout_fs::usage(&path)
                .context("query disk usage")
                .map_err(CliError::RuntimeError)?;
            out.usage(&path, ratio);
        }
        FsCommand::Symlink { original, link } => {
            stout_fs::symlink(&original, &link)
                .context("create symlink")
                .map_err(CliError::RuntimeError)?;
            out.symlinked(&original, &link);
        }
    }
    Ok(())
}

#[cfg(not(unix))]
pub(crate) fn fs(_cmd: FsCommand, _out: &dyn OutputFormatter) -> Result<(), CliError> {
    Err(CliError::RuntimeError(anyhow::anyhow!(
        "filesystem queries are only supported on unix"
    )))
}
