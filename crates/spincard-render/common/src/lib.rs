//! Common rendering contracts shared between renderer backends.

mod pipeline;
pub mod scene;

use std::convert::Infallible;

use spincard_core::NodeId;
use spincard_ui::{LayoutTree, PointerEvent};
use spincard_ui_graphics::Size;

pub use pipeline::render_layout_tree;
pub use scene::{DrawShape, HitRegion, LayerStack, LayerTransform, PaintItem, Scene, TextDraw};

/// Trait implemented by hit-test targets stored inside a [`RenderScene`].
pub trait HitTestTarget {
    /// Dispatches a pointer event to this target's handlers.
    fn dispatch(&self, event: PointerEvent);

    /// Returns the NodeId associated with this hit target.
    /// Used by the hit path tracker to cache stable identity instead of geometry.
    fn node_id(&self) -> NodeId;
}

/// Trait describing the minimal surface area required by the application
/// shell to process pointer events and refresh the frame graph.
pub trait RenderScene {
    type HitTarget: HitTestTarget + Clone;

    fn clear(&mut self);

    /// Performs hit testing at the given coordinates.
    /// Returns hit targets ordered by z-index (top-to-bottom).
    fn hit_test(&self, x: f32, y: f32) -> Vec<Self::HitTarget>;

    fn hit_test_nodes(&self, x: f32, y: f32) -> Vec<NodeId> {
        self.hit_test(x, y)
            .into_iter()
            .map(|hit| hit.node_id())
            .collect()
    }

    /// Finds a hit target by NodeId with fresh geometry from the current scene.
    ///
    /// Returns None if the node no longer exists in the scene.
    fn find_target(&self, node_id: NodeId) -> Option<Self::HitTarget>;
}

/// Abstraction implemented by concrete renderer backends.
pub trait Renderer {
    type Scene: RenderScene;
    type Error;

    fn scene(&self) -> &Self::Scene;
    fn scene_mut(&mut self) -> &mut Self::Scene;

    fn rebuild_scene(&mut self, layout_tree: &LayoutTree, viewport: Size)
        -> Result<(), Self::Error>;
}

/// Builds the shared [`Scene`] and never draws it. Used by headless tests.
#[derive(Default)]
pub struct HeadlessRenderer {
    scene: Scene,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    type Scene = Scene;
    type Error = Infallible;

    fn scene(&self) -> &Self::Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Self::Scene {
        &mut self.scene
    }

    fn rebuild_scene(
        &mut self,
        layout_tree: &LayoutTree,
        _viewport: Size,
    ) -> Result<(), Self::Error> {
        self.scene.clear();
        render_layout_tree(layout_tree.root(), &mut self.scene);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/scene_tests.rs"]
mod tests;
