//! Proscenium navigation — reference-counted scene-stack management.
//!
//! This crate decides which named scene is currently active, which scenes
//! stay resident in memory, and how the back-history of visited scenes is
//! maintained across four navigation verbs: push, replace, jump, and pop.
//!
//! Rendering is somebody else's problem. The navigator hands the embedder
//! an opaque [`SceneDescriptor`] back through the [`StackObserver`] seam
//! after each committed operation; mounting views, camera sessions, and
//! capture all live on the far side of that seam.
//!
//! # Quick start
//!
//! ```
//! use proscenium_nav::{Navigator, SceneDescriptor};
//!
//! // `R` is whatever your renderer mounts; a &str stands in here.
//! let mut nav = Navigator::new(Some("home"), SceneDescriptor::new("HomeView"));
//!
//! nav.push(Some("detail"), Some(SceneDescriptor::new("DetailView"))).unwrap();
//! assert_eq!(nav.current_key().as_str(), "detail");
//!
//! nav.pop().unwrap();
//! assert_eq!(nav.current_key().as_str(), "home");
//! ```
//!
//! Every verb either commits fully or refuses with a [`NavError`] and
//! leaves the stack untouched — there is no partially applied navigation.

pub mod descriptor;
pub mod error;
pub mod history;
pub mod key;
pub mod logging;
pub mod navigator;
pub mod observer;
pub mod registry;

pub use descriptor::SceneDescriptor;
pub use error::NavError;
pub use history::HistoryStack;
pub use key::{KeyMint, SceneKey};
pub use navigator::Navigator;
pub use observer::{StackObserver, StackSnapshot};
pub use registry::{SceneRecord, SceneRegistry};
