//! Non-interactive output: one refresh printed to stdout

use anyhow::Result;
use board_core::{BoardController, SortCriterion};
use clap::ValueEnum;

use crate::render;

const SNAPSHOT_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SnapshotFormat {
    Text,
    Json,
}

/// Refresh once, apply `criterion` and render the whole board
pub fn snapshot(board: &mut BoardController, criterion: SortCriterion, format: SnapshotFormat) -> Result<String> {
    let summary = board.refresh();
    board.sort_by(criterion);
    tracing::info!(
        target: "board::snapshot",
        users = summary.users,
        comments = summary.comments,
        sort = %criterion,
        "Rendering snapshot"
    );

    match format {
        SnapshotFormat::Json => Ok(board.to_json()?),
        SnapshotFormat::Text => {
            let mut lines = vec![format!(
                "Sort by: {}   {} comments from {} users",
                criterion, summary.comments, summary.users
            )];
            for row in board.rows() {
                lines.extend(render::render_row(row, board.icons(), SNAPSHOT_WIDTH, false));
            }
            Ok(lines.join("\n"))
        }
    }
}
