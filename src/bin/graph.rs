//! Export the joke bot state graph as Mermaid source and an HTML viewer
//!
//! Usage: `joke-bot-graph [OUT_DIR]` (defaults to the current directory)

use joke_bot::state_machine::graph::{to_html, to_mermaid};
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    std::fs::create_dir_all(&out_dir)?;

    let mermaid = to_mermaid();
    let mmd_path = out_dir.join("joke_bot_graph.mmd");
    std::fs::write(&mmd_path, &mermaid)?;

    let html_path = out_dir.join("graph.html");
    std::fs::write(&html_path, to_html(&mermaid))?;

    println!("Wrote {}", mmd_path.display());
    println!("Wrote {}", html_path.display());
    Ok(())
}
