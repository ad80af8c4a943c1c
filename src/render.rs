//! Box-drawing text rendering of a maze, with optional content in each cell.

use std::{borrow::Cow, collections::HashMap, fmt};

use unicode_truncate::{Alignment, UnicodeTruncateStr};
use unicode_width::UnicodeWidthStr;

use crate::maze::{Cell, Maze};

/// Renders the maze with blank cells.
pub fn render(maze: &Maze) -> String {
    render_with_overlay(maze, &HashMap::new())
}

/// Renders the maze with `overlay[cell]` written in the middle of each listed
/// cell; other cells are blank. All cells are as wide as the widest overlay
/// entry (at least one column).
pub fn render_with_overlay(maze: &Maze, overlay: &HashMap<Cell, String>) -> String {
    let (height, width) = (maze.height(), maze.width());
    let slot = overlay
        .values()
        .map(|content| content.width())
        .max()
        .unwrap_or(1)
        .max(1);
    let closed = "━".repeat(slot + 2);
    let open = " ".repeat(slot + 2);
    let blank = " ".repeat(slot);

    let border = |left: &str, joint: &str, right: &str| {
        let mut line = String::from(left);
        for col in 0..width {
            line.push_str(&closed);
            line.push_str(if col + 1 < width { joint } else { right });
        }
        line.push('\n');
        line
    };

    let mut txt = border("┏", "┳", "┓");
    for row in 0..height {
        if row > 0 {
            // Horizontal walls between `row - 1` and `row`
            txt.push('┣');
            for col in 0..width {
                let segment = if maze.is_open((row - 1, col), (row, col)) {
                    &open
                } else {
                    &closed
                };
                txt.push_str(segment);
                txt.push(if col + 1 < width { '╋' } else { '┫' });
            }
            txt.push('\n');
        }

        txt.push('┃');
        for col in 0..width {
            let content: Cow<'_, str> = match overlay.get(&(row, col)) {
                Some(text) => text.unicode_pad(slot, Alignment::Center, true),
                None => Cow::Borrowed(&blank),
            };
            txt.push(' ');
            txt.push_str(&content);
            if maze.is_open((row, col), (row, col + 1)) {
                txt.push_str("  ");
            } else {
                txt.push_str(" ┃");
            }
        }
        txt.push('\n');
    }
    txt.push_str(&border("┗", "┻", "┛"));
    txt
}

/// Overlay marking every cell of `path` with `marker`.
pub fn path_overlay(path: &[Cell], marker: &str) -> HashMap<Cell, String> {
    path.iter()
        .map(|&cell| (cell, marker.to_string()))
        .collect()
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
