use crate::artifacts::graph::commit_graph::CommitGraph;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Graphviz layout program used for image formats
pub const GRAPHVIZ_BINARY: &str = "dot";

/// Format used when the output path has no extension
pub const DEFAULT_IMAGE_FORMAT: &str = "png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// DOT source written as-is
    Dot,
    /// Any format Graphviz understands, e.g. `png` or `svg`
    Image(String),
}

impl OutputFormat {
    /// Pick the format from the output file's extension
    ///
    /// Returns the format and the final output path, which gets a `.png`
    /// extension when none was given.
    pub fn from_path(path: &Path) -> (OutputFormat, PathBuf) {
        let extension = path
            .extension()
            .map(|extension| extension.to_string_lossy().to_ascii_lowercase());

        match extension.as_deref() {
            Some("dot") | Some("gv") => (OutputFormat::Dot, path.to_path_buf()),
            Some(extension) => (
                OutputFormat::Image(extension.to_string()),
                path.to_path_buf(),
            ),
            None => (
                OutputFormat::Image(DEFAULT_IMAGE_FORMAT.to_string()),
                path.with_extension(DEFAULT_IMAGE_FORMAT),
            ),
        }
    }
}

/// Write `graph` to `output`, returning the path actually written
pub fn render(graph: &CommitGraph, output: &Path) -> anyhow::Result<PathBuf> {
    let (format, output) = OutputFormat::from_path(output);
    let dot = graph.to_dot();

    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Unable to create output directory {}", parent.display())
        })?;
    }

    match format {
        OutputFormat::Dot => std::fs::write(&output, dot)
            .with_context(|| format!("Unable to write graph to {}", output.display()))?,
        OutputFormat::Image(image_format) => run_graphviz(&dot, &image_format, &output)?,
    }

    tracing::info!(
        path = %output.display(),
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        "graph rendered"
    );

    Ok(output)
}

fn run_graphviz(dot: &str, image_format: &str, output: &Path) -> anyhow::Result<()> {
    let mut child = Command::new(GRAPHVIZ_BINARY)
        .arg(format!("-T{image_format}"))
        .arg("-o")
        .arg(output)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| {
            format!("Unable to run Graphviz `{GRAPHVIZ_BINARY}`; is Graphviz installed?")
        })?;

    // stdin is closed at the end of this statement, so Graphviz sees the end of input
    let sent = child
        .stdin
        .take()
        .context("Graphviz stdin is not available")?
        .write_all(dot.as_bytes());

    // reap the child even when it stopped reading early; its stderr says why
    let result = child
        .wait_with_output()
        .context("Unable to wait for Graphviz")?;

    if !result.status.success() {
        anyhow::bail!(
            "Graphviz failed to render {} ({}): {}",
            output.display(),
            result.status,
            String::from_utf8_lossy(&result.stderr).trim()
        );
    }

    sent.context("Unable to send the graph to Graphviz")?;

    Ok(())
}
