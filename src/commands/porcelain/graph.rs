use crate::areas::repository::Repository;
use crate::artifacts::graph::commit_graph::CommitGraph;
use crate::artifacts::graph::render;
use crate::commands::porcelain::log::HistoryOptions;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub history: HistoryOptions,
    /// Output file; its extension selects the format
    pub output: PathBuf,
}

impl Repository {
    /// Walk the history and render it as a graph image
    ///
    /// The walk completes before anything is written, so a broken history
    /// never leaves a partial graph behind.
    pub fn graph(&self, opts: &GraphOptions) -> anyhow::Result<()> {
        let chain = self.history(&opts.history)?;
        let graph = CommitGraph::from_chain(&chain);

        let output = render::render(&graph, &opts.output)?;

        writeln!(
            self.writer(),
            "Graph generated and saved to: {}",
            output.display()
        )?;

        Ok(())
    }
}
