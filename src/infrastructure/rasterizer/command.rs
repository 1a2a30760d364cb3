//! Command Rasterizer
//!
//! Renders by invoking an external vector tool (Inkscape by default) with
//! the fixed argument grammar
//! `<tool> <input> --export-png=<output> -C -w<N> -h<N>`.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{RenderError, Rasterizer};
use crate::infrastructure::process::describe_status;

/// Default rasterizer executable
pub const DEFAULT_RASTERIZER: &str = "inkscape";

/// Rasterizer backed by an external process
#[derive(Debug, Clone)]
pub struct CommandRasterizer {
    program: String,
    leading_args: Vec<String>,
    quiet: bool,
}

impl Default for CommandRasterizer {
    fn default() -> Self {
        Self::new(DEFAULT_RASTERIZER)
    }
}

impl CommandRasterizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
            quiet: false,
        }
    }

    /// Arguments placed before the input file (e.g. for wrapper launchers)
    pub fn with_leading_args(mut self, args: Vec<String>) -> Self {
        self.leading_args = args;
        self
    }

    /// Discard the tool's own stdout/stderr (JSON mode)
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument list for one render, excluding the program itself
    pub fn arguments(&self, source: &Path, output: &Path, width: u32, height: u32) -> Vec<OsString> {
        let mut export = OsString::from("--export-png=");
        export.push(output);

        let mut args: Vec<OsString> = self.leading_args.iter().map(OsString::from).collect();
        args.push(source.as_os_str().to_os_string());
        args.push(export);
        args.push(OsString::from("-C"));
        args.push(OsString::from(format!("-w{width}")));
        args.push(OsString::from(format!("-h{height}")));
        args
    }

    /// Check if the tool can be launched at all
    pub fn check_available(&self) -> bool {
        Command::new(&self.program)
            .args(&self.leading_args)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl Rasterizer for CommandRasterizer {
    fn name(&self) -> &str {
        &self.program
    }

    fn render(
        &self,
        source: &Path,
        output: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.arguments(source, output, width, height))
            .stdin(Stdio::null());

        if self.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let status = cmd.status().map_err(|e| RenderError::Launch {
            tool: self.program.clone(),
            message: e.to_string(),
        })?;

        if !status.success() {
            return Err(RenderError::ExitStatus {
                tool: self.program.clone(),
                status: describe_status(&status),
            });
        }

        if !output.exists() {
            return Err(RenderError::MissingOutput {
                tool: self.program.clone(),
                output: output.to_path_buf(),
            });
        }

        Ok(())
    }
}
