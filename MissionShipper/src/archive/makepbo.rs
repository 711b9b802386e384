//! `makepbo` invocation

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::layout::{DEFAULT_MAKEPBO, MAKEPBO_ENV};

/// Which archiver executable to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiverConfig {
    /// Path to the executable, or a bare name looked up on `PATH`
    pub program: PathBuf,
}

impl Default for ArchiverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAKEPBO)
    }
}

impl ArchiverConfig {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Read the archiver from `MAKEPBO_PATH`, defaulting to `makepbo`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(MAKEPBO_ENV))
    }

    fn from_env_value(value: Option<OsString>) -> Self {
        match value {
            Some(program) if !program.is_empty() => Self::new(program),
            _ => Self::default(),
        }
    }

    /// Pack `source_dir` into the PBO at `output_file`.
    ///
    /// Blocks until the archiver exits. Output is captured; a non-zero exit
    /// becomes [`Error::ArchiverFailed`] carrying the command and its stderr.
    pub fn pack(&self, source_dir: &Path, output_file: &Path) -> Result<()> {
        let mut command = Command::new(&self.program);
        command.arg("-A").arg(source_dir).arg(output_file);

        let command_line = format!(
            "{} -A {} {}",
            self.program.display(),
            source_dir.display(),
            output_file.display()
        );
        tracing::debug!("Running `{}`", command_line);

        let output = command.output().map_err(|source| Error::ArchiverSpawn {
            program: self.program.clone(),
            source,
        })?;

        for line in String::from_utf8_lossy(&output.stdout).lines() {
            tracing::debug!("makepbo: {}", line);
        }

        if !output.status.success() {
            return Err(Error::ArchiverFailed {
                command: command_line,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
