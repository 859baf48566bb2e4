//! CLI presentation: text, color, and table rendering of comparison results.

use crate::tree::{Branch, ChangeState, DiffSummary, Node};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// How to render a tree as text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub include_state: bool,
    pub color: bool,
}

/// Render a result tree as text.
///
/// Without color this is exactly [`Branch::print`]. With color each name is
/// tinted by its state: added green, deleted red, mixed blue, unchanged plain.
pub fn render_tree_text(tree: &Branch, style: TextStyle) -> String {
    if !style.color {
        return tree.print("", style.include_state);
    }

    let step = if style.include_state { "\t" } else { "  " };
    let mut lines = vec![colored_line(tree.name(), tree.state(), 0, step, style)];
    let mut stack: Vec<(&Node, usize)> = tree.children().iter().rev().map(|c| (c, 1)).collect();
    while let Some((node, depth)) = stack.pop() {
        lines.push(colored_line(node.name(), node.state(), depth, step, style));
        if let Node::Branch(branch) = node {
            stack.extend(branch.children().iter().rev().map(|c| (c, depth + 1)));
        }
    }
    lines.join("\n")
}

fn colored_line(name: &str, state: ChangeState, depth: usize, step: &str, style: TextStyle) -> String {
    let painted = paint(name, state);
    let indent = step.repeat(depth);
    if style.include_state {
        format!("{}{} ({})", indent, painted, paint(state.as_str(), state))
    } else {
        format!("{}{}", indent, painted)
    }
}

fn paint(text: &str, state: ChangeState) -> String {
    match state {
        ChangeState::Same => text.to_string(),
        ChangeState::Added => text.green().to_string(),
        ChangeState::Deleted => text.red().to_string(),
        ChangeState::Mixed => text.blue().to_string(),
    }
}

/// Per-state counts as a table
pub fn format_summary_table(summary: &DiffSummary) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["State", "Directories", "Files"]);
    for state in ChangeState::ALL {
        let counts = summary.get(state);
        table.add_row(vec![
            state.as_str().to_string(),
            counts.directories.to_string(),
            counts.files.to_string(),
        ]);
    }
    table.to_string()
}
