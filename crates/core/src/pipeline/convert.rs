use std::{
    io::Write,
    path::{Path, PathBuf},
    process::Command,
};

use crate::error::{Error, Result};

/// Narrow interface over the conversion tool: render `ttf` at `size` into
/// `out`.
///
/// Implementations write the generated representation verbatim, with no
/// framing or separators. The pipeline never inspects the bytes, so the
/// external tool can be swapped for an in-process converter without touching
/// the orchestration.
pub trait Converter {
    fn convert(&self, ttf: &Path, size: u32, out: &mut dyn Write) -> Result<()>;
}

/// External conversion tool invoked as `<program> <ttf-path> <size>`.
///
/// The tool's exit status is the only success signal; its standard output is
/// appended to `out` unmodified.
pub struct FontconvertTool {
    program: PathBuf,
}

impl FontconvertTool {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Converter for FontconvertTool {
    fn convert(&self, ttf: &Path, size: u32, out: &mut dyn Write) -> Result<()> {
        let output = Command::new(&self.program)
            .arg(ttf)
            .arg(size.to_string())
            .output()
            .map_err(|e| Error::Conversion {
                path: ttf.to_path_buf(),
                size,
                message: format!("failed to run {}: {e}", self.program.display()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                format!("{} exited with {}", self.program.display(), output.status)
            } else {
                format!(
                    "{} exited with {}: {stderr}",
                    self.program.display(),
                    output.status
                )
            };
            return Err(Error::Conversion {
                path: ttf.to_path_buf(),
                size,
                message,
            });
        }

        out.write_all(&output.stdout)?;
        Ok(())
    }
}
