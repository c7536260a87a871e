//! Console walkthrough of the scene-stack navigator.
//!
//! Stands in for a real rendering host: a [`ConsoleHost`] observer prints
//! the mount list after every committed operation, the way a renderer
//! would re-render. Run with `RUST_LOG=debug` to see the navigator's own
//! diagnostics as well.

use anyhow::Result;
use log::info;
use proscenium_nav::logging::{LoggingConfig, init_logging};
use proscenium_nav::{Navigator, SceneDescriptor, StackObserver, StackSnapshot};
use serde_json::json;

/// Prints the stack the way a render host would consume it.
struct ConsoleHost;

impl StackObserver for ConsoleHost {
    fn stack_committed(&mut self, snapshot: &StackSnapshot) {
        let mounts: Vec<String> = snapshot
            .resident
            .iter()
            .enumerate()
            .map(|(i, key)| {
                if i == snapshot.current_index {
                    format!("[{key}]")
                } else {
                    key.to_string()
                }
            })
            .collect();
        println!(
            "  mounted: {:<30} depth {}  active '{}'",
            mounts.join(" "),
            snapshot.depth,
            snapshot.current_key,
        );
    }
}

fn scene(view: &'static str, title: &str) -> SceneDescriptor<&'static str> {
    SceneDescriptor::new(view).with_prop("title", json!(title))
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  proscenium-studio — scene stack walkthrough");
    println!();

    let mut nav = Navigator::new(Some("lobby"), scene("LobbyView", "Lobby"));
    nav.set_observer(Box::new(ConsoleHost));
    info!("root scene is '{}'", nav.current_key());

    println!("  push 'gallery', push 'detail':");
    nav.push(Some("gallery"), Some(scene("GalleryView", "Gallery")))?;
    nav.push(Some("detail"), Some(scene("DetailView", "Exhibit #4")))?;

    println!("  jump back to 'lobby' (reuses its slot, count stays capped):");
    nav.jump(Some("lobby"), None)?;

    println!("  replace it with 'settings' (lobby is evicted):");
    nav.replace(Some("settings"), Some(scene("SettingsView", "Settings")))?;

    println!("  pop twice:");
    nav.pop()?;
    nav.pop()?;

    println!();
    println!("  refusals leave the stack untouched:");
    if let Err(err) = nav.pop() {
        println!("    pop        -> {err}");
    }
    if let Err(err) = nav.push(None, None) {
        println!("    empty push -> {err}");
    }
    if let Err(err) = nav.jump(Some("lobby"), None) {
        println!("    stale jump -> {err}");
    }

    println!();
    println!(
        "  final state: '{}' at index {}, depth {}",
        nav.current_key(),
        nav.current_index(),
        nav.depth(),
    );
    Ok(())
}
