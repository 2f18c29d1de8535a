use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::constants::{DIRECTORIES_FILE, PARAMETERS_FILE};
use crate::output::formatter::{RenderStyle, render_sections};
use crate::types::{Cli, Findings, Modes};

/// Where the report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    /// All sections in one file.
    File(PathBuf),
    /// `parameters.txt` and `directories.txt` inside a directory.
    Split(PathBuf),
}

impl OutputTarget {
    /// `--output` takes precedence over `--Output`.
    pub fn from_cli(cli: &Cli) -> Self {
        if let Some(path) = &cli.output {
            OutputTarget::File(PathBuf::from(path))
        } else if cli.output_split {
            OutputTarget::Split(PathBuf::from("."))
        } else {
            OutputTarget::Stdout
        }
    }
}

/// Write the findings for the requested modes to the target
pub async fn write_report(
    findings: &Findings,
    modes: Modes,
    target: &OutputTarget,
    style: &RenderStyle,
) -> Result<()> {
    // Escape codes only make sense on a terminal
    let file_style = RenderStyle {
        colored: false,
        ..*style
    };

    match target {
        OutputTarget::Stdout => {
            print!("{}", render_sections(&findings.sections(modes), style));
        }
        OutputTarget::File(path) => {
            let rendered = render_sections(&findings.sections(modes), &file_style);
            write_file(path, &rendered).await?;
        }
        OutputTarget::Split(dir) => {
            if modes.parameters {
                let rendered = render_sections(&findings.parameter_sections(), &file_style);
                write_file(&dir.join(PARAMETERS_FILE), &rendered).await?;
            }
            if modes.directories {
                let rendered = render_sections(&findings.directory_sections(), &file_style);
                write_file(&dir.join(DIRECTORIES_FILE), &rendered).await?;
            }
        }
    }
    Ok(())
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    let file = File::create(path)
        .await
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .await
        .with_context(|| format!("failed to write output file {}", path.display()))?;
    writer.flush().await?;
    tracing::debug!(path = %path.display(), "wrote results");
    Ok(())
}
