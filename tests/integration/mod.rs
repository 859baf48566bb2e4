//! Integration tests for directory tree comparison

mod builder_filesystem;
mod cli_commands;
