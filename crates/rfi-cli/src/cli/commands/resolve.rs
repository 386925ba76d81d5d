//! `rfi resolve <container> <key>` – run a full include pass and print the result.

use anyhow::Result;
use rfi_core::config::RfiConfig;
use rfi_core::diag::LogSink;
use rfi_core::include::{FragmentResolver, IncludeController, ReplaceableController};
use rfi_core::store::{FsObjectStore, HttpObjectStore, ObjectStore};
use std::path::Path;
use std::sync::Arc;

use super::render::render_tree;

pub fn run_resolve(
    cfg: &RfiConfig,
    container: &str,
    key: &str,
    root: Option<&Path>,
    endpoint: Option<&str>,
    staging_prefix: Option<String>,
) -> Result<()> {
    let transfer = cfg.transfer.clone().unwrap_or_default();
    let store: Arc<dyn ObjectStore> = match root {
        Some(dir) => Arc::new(FsObjectStore::new(dir)),
        None => match endpoint {
            Some(url) => Arc::new(HttpObjectStore::new(url, &transfer)?),
            None => Arc::new(HttpObjectStore::from_config(&transfer)?),
        },
    };
    let prefix = staging_prefix.unwrap_or_else(|| cfg.staging_prefix.clone());
    let resolver = FragmentResolver::new(store, Arc::new(LogSink), prefix);

    let mut controller = IncludeController::new(resolver);
    controller.set_name("rfi resolve");
    controller.set_container(container);
    controller.set_object_key(key);

    // Drive the protocol the way the host framework would.
    let mut run_instance = controller.clone_for_run();
    run_instance.resolve_replacement_subtree(None);

    match run_instance.replacement_subtree() {
        Some(tree) if !tree.is_empty() => {
            print!("{}", render_tree(tree));
            if let Some(element) = run_instance.replacement_element() {
                println!("single root element: {}", element.name());
            }
        }
        _ => println!("resolved fragment is empty"),
    }
    Ok(())
}
