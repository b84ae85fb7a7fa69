//! One run: discover, select, parse, prepare, materialize

use crate::prompt::{self, TokenReader};
use crate::ui;
use anyhow::{Context, Result};
use reify_asset::{
    EntryOutcome, IndexManifest, ManifestCatalog, MaterializeReport, Materializer, OutputTree,
};
use reify_core::Workspace;
use std::io::{BufRead, Write};

/// How a run ended, short of a fatal error
#[derive(Debug)]
pub enum RunStatus {
    /// The indexes directory holds no manifests
    NoManifests,
    Finished(MaterializeReport),
}

/// Everything a run needs: where to work and where to talk
pub struct Session<R, W> {
    workspace: Workspace,
    input: TokenReader<R>,
    prompt_out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(workspace: Workspace, input: R, prompt_out: W) -> Self {
        Self {
            workspace,
            input: TokenReader::new(input),
            prompt_out,
        }
    }

    pub fn run(mut self) -> Result<RunStatus> {
        let catalog = ManifestCatalog::discover(&self.workspace)?;
        if catalog.is_empty() {
            return Ok(RunStatus::NoManifests);
        }

        let selected = prompt::select_manifest(&catalog, &mut self.input, &mut self.prompt_out)?;
        ui::info(&format!("Grabbing assets for version: {}", selected.name));

        let manifest = IndexManifest::load(&selected.path, &selected.name)
            .with_context(|| format!("Failed to load manifest {}", selected.path.display()))?;
        tracing::info!(
            version = %manifest.version,
            entries = manifest.len(),
            "manifest loaded"
        );

        let output = OutputTree::prepare(&self.workspace.generated_dir, &manifest.version)
            .with_context(|| {
                format!(
                    "Failed to prepare output directory {}",
                    self.workspace.generated_dir.join(&manifest.version).display()
                )
            })?;
        let mut materializer = Materializer::new(&self.workspace.objects_dir, output);
        let report = materializer.run(&manifest, print_outcome)?;

        Ok(RunStatus::Finished(report))
    }
}

fn print_outcome(outcome: &EntryOutcome<'_>) {
    match outcome {
        EntryOutcome::Copied { entry, .. } => {
            println!("Successfully created file at {}", entry.logical_path);
        }
        EntryOutcome::MissingBlob { blob, .. } => {
            ui::warning(&format!("Could not find file at {}", blob.display()));
        }
        EntryOutcome::Failed { entry, error } => {
            ui::error(&format!(
                "Failed to copy file {}: {}",
                entry.logical_path, error
            ));
        }
        EntryOutcome::Rejected { entry, reason } => {
            ui::warning(&format!("Skipping {}: {}", entry.logical_path, reason));
        }
    }
}
