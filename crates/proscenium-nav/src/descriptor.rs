//! Renderable scene descriptors.

use serde_json::{Map, Value};

/// What the rendering collaborator mounts for one scene.
///
/// `R` is the embedder's renderable handle — a component, a view id,
/// whatever the renderer understands. The navigator stores it untouched
/// and never inspects it; `props` ride along the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescriptor<R> {
    pub renderable: R,
    pub props: Map<String, Value>,
}

impl<R> SceneDescriptor<R> {
    pub fn new(renderable: R) -> Self {
        Self { renderable, props: Map::new() }
    }

    /// Builder-style prop insertion.
    #[must_use]
    pub fn with_prop(mut self, name: impl Into<String>, value: Value) -> Self {
        self.props.insert(name.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn props_accumulate() {
        let d = SceneDescriptor::new("View")
            .with_prop("title", json!("Lobby"))
            .with_prop("depth", json!(3));
        assert_eq!(d.props.len(), 2);
        assert_eq!(d.props["depth"], json!(3));
    }
}
