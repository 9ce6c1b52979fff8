//! Graphics layer: per-node 2D/3D transform applied at draw and hit-test time.

use crate::geometry::{Point, Size};

/// Camera distance used by Compose (`8` in units of 72 px per density).
pub const DEFAULT_CAMERA_DISTANCE: f32 = 8.0 * 72.0;

/// Transform applied to a node's content.
///
/// Content is first moved by the translation, then rotated about the node
/// center (Z in-plane, then X and Y in 3D with a perspective projection),
/// then scaled about the node center. Rotations are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub alpha: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub rotation_z: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub translation_x: f32,
    pub translation_y: f32,
    pub camera_distance: f32,
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            rotation_z: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            translation_x: 0.0,
            translation_y: 0.0,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
        }
    }
}

impl GraphicsLayer {
    pub fn is_identity(&self) -> bool {
        self.rotation_x == 0.0
            && self.rotation_y == 0.0
            && self.rotation_z == 0.0
            && self.scale_x == 1.0
            && self.scale_y == 1.0
            && self.translation_x == 0.0
            && self.translation_y == 0.0
    }

    /// Maps a point in node-local coordinates (origin at the node's top-left
    /// corner, node of `size`) to where it is drawn, in the same space.
    pub fn transform_point(&self, local: Point, size: Size) -> Point {
        let pivot_x = size.width / 2.0;
        let pivot_y = size.height / 2.0;
        let x = local.x + self.translation_x - pivot_x;
        let y = local.y + self.translation_y - pivot_y;

        let (sin_z, cos_z) = self.rotation_z.to_radians().sin_cos();
        let (x, y) = (x * cos_z - y * sin_z, x * sin_z + y * cos_z);

        // Positive X rotation tilts the top edge away from the viewer.
        let (sin_x, cos_x) = self.rotation_x.to_radians().sin_cos();
        let (y, z) = (y * cos_x, y * sin_x);

        let (sin_y, cos_y) = self.rotation_y.to_radians().sin_cos();
        let (x, z) = (x * cos_y - z * sin_y, x * sin_y + z * cos_y);

        let (x, y) = self.project(x, y, z);

        Point::new(pivot_x + x * self.scale_x, pivot_y + y * self.scale_y)
    }

    fn project(&self, x: f32, y: f32, z: f32) -> (f32, f32) {
        if self.camera_distance <= 0.0 {
            return (x, y);
        }
        // Points behind the camera plane are pinned just in front of it.
        let depth = (self.camera_distance - z).max(1.0);
        let factor = self.camera_distance / depth;
        (x * factor, y * factor)
    }
}
