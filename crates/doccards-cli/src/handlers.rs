use crate::cli::Cli;
use crate::output::{output_error, output_list, output_success};
use clap::CommandFactory;
use doccards_domain::seed::seeded_board;
use doccards_domain::FileMeta;
use doccards_tui::host::read_file_meta;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct SizeEntry {
    path: String,
    #[serde(flatten)]
    file: FileMeta,
    size_label: String,
}

pub fn handle_seed() -> anyhow::Result<()> {
    output_success(seeded_board())?;
    Ok(())
}

pub async fn handle_size(files: Vec<PathBuf>) -> anyhow::Result<()> {
    let mut entries = Vec::with_capacity(files.len());
    for path in files {
        let file = match read_file_meta(&path).await {
            Ok(file) => file,
            Err(e) => output_error(&format!("{}: {}", path.display(), e)),
        };
        entries.push(SizeEntry {
            path: path.display().to_string(),
            size_label: file.size_label(),
            file,
        });
    }
    output_list(entries)?;
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "doccards", &mut std::io::stdout());
}
