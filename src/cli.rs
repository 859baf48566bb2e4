//! CLI domain: parse, route, output, and presentation only.
//! No tree logic lives here; the route table dispatches to the tree module.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, ColorChoice, Commands, OutputFormat};
pub use presentation::{format_summary_table, render_tree_text, TextStyle};
pub use route::RunContext;
