//! `rfi inspect <path>` – parse a local plan file and print its tree.

use anyhow::{Context, Result};
use rfi_core::include::contains_fragment;
use rfi_core::plan::load_plan_tree;
use std::path::Path;

use super::render::render_tree;

pub fn run_inspect(path: &Path) -> Result<()> {
    let tree =
        load_plan_tree(path).with_context(|| format!("inspect {}", path.display()))?;
    if tree.is_empty() {
        println!("plan file {} is empty", path.display());
        return Ok(());
    }
    print!("{}", render_tree(&tree));
    if contains_fragment(&tree) {
        println!("test fragment: present");
    } else {
        println!("test fragment: none");
    }
    Ok(())
}
