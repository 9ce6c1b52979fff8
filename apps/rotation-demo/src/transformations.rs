use spincard_ui_graphics::GraphicsLayer;

/// Which slider range a field uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Rotation,
    Scale,
    Offset,
}

/// One of the seven transform components a slider edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformField {
    XAxisRotation,
    YAxisRotation,
    ZAxisRotation,
    XScale,
    YScale,
    XOffset,
    YOffset,
}

impl TransformField {
    /// Slider order, top to bottom.
    pub const ALL: [TransformField; 7] = [
        TransformField::XAxisRotation,
        TransformField::YAxisRotation,
        TransformField::ZAxisRotation,
        TransformField::XScale,
        TransformField::YScale,
        TransformField::XOffset,
        TransformField::YOffset,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TransformField::XAxisRotation => "X axis rotate",
            TransformField::YAxisRotation => "Y axis rotate",
            TransformField::ZAxisRotation => "Z axis rotate",
            TransformField::XScale => "X scale",
            TransformField::YScale => "Y scale",
            TransformField::XOffset => "X offset",
            TransformField::YOffset => "Y offset",
        }
    }

    /// Stable identifier used for test tags.
    pub fn key(self) -> &'static str {
        match self {
            TransformField::XAxisRotation => "x-rotation",
            TransformField::YAxisRotation => "y-rotation",
            TransformField::ZAxisRotation => "z-rotation",
            TransformField::XScale => "x-scale",
            TransformField::YScale => "y-scale",
            TransformField::XOffset => "x-offset",
            TransformField::YOffset => "y-offset",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            TransformField::XAxisRotation
            | TransformField::YAxisRotation
            | TransformField::ZAxisRotation => FieldKind::Rotation,
            TransformField::XScale | TransformField::YScale => FieldKind::Scale,
            TransformField::XOffset | TransformField::YOffset => FieldKind::Offset,
        }
    }

    /// Value that leaves the card untouched.
    pub fn identity(self) -> f32 {
        match self.kind() {
            FieldKind::Scale => 1.0,
            FieldKind::Rotation | FieldKind::Offset => 0.0,
        }
    }
}

/// A card's transform. Replaced wholesale on every edit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transformations {
    pub x_axis_rotation: f32,
    pub y_axis_rotation: f32,
    pub z_axis_rotation: f32,
    pub x_scale: f32,
    pub y_scale: f32,
    pub x_offset: f32,
    pub y_offset: f32,
}

impl Default for Transformations {
    fn default() -> Self {
        Self {
            x_axis_rotation: 0.0,
            y_axis_rotation: 0.0,
            z_axis_rotation: 0.0,
            x_scale: 1.0,
            y_scale: 1.0,
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }
}

impl Transformations {
    pub fn get(&self, field: TransformField) -> f32 {
        match field {
            TransformField::XAxisRotation => self.x_axis_rotation,
            TransformField::YAxisRotation => self.y_axis_rotation,
            TransformField::ZAxisRotation => self.z_axis_rotation,
            TransformField::XScale => self.x_scale,
            TransformField::YScale => self.y_scale,
            TransformField::XOffset => self.x_offset,
            TransformField::YOffset => self.y_offset,
        }
    }

    /// Copy of `self` with `field` set to `value`.
    pub fn with_field(self, field: TransformField, value: f32) -> Self {
        let mut next = self;
        let slot = match field {
            TransformField::XAxisRotation => &mut next.x_axis_rotation,
            TransformField::YAxisRotation => &mut next.y_axis_rotation,
            TransformField::ZAxisRotation => &mut next.z_axis_rotation,
            TransformField::XScale => &mut next.x_scale,
            TransformField::YScale => &mut next.y_scale,
            TransformField::XOffset => &mut next.x_offset,
            TransformField::YOffset => &mut next.y_offset,
        };
        *slot = value;
        next
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Rotation in degrees, offsets in logical pixels.
    pub fn to_graphics_layer(&self) -> GraphicsLayer {
        GraphicsLayer {
            rotation_x: self.x_axis_rotation,
            rotation_y: self.y_axis_rotation,
            rotation_z: self.z_axis_rotation,
            scale_x: self.x_scale,
            scale_y: self.y_scale,
            translation_x: self.x_offset,
            translation_y: self.y_offset,
            ..GraphicsLayer::default()
        }
    }
}
