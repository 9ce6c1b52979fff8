/// Horizontal placement of a child inside its parent's content box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Start,
    CenterHorizontally,
    End,
}

impl HorizontalAlignment {
    pub fn align(&self, size: f32, space: f32) -> f32 {
        match self {
            HorizontalAlignment::Start => 0.0,
            HorizontalAlignment::CenterHorizontally => ((space - size) / 2.0).max(0.0),
            HorizontalAlignment::End => (space - size).max(0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    CenterVertically,
    Bottom,
}

impl VerticalAlignment {
    pub fn align(&self, size: f32, space: f32) -> f32 {
        match self {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::CenterVertically => ((space - size) / 2.0).max(0.0),
            VerticalAlignment::Bottom => (space - size).max(0.0),
        }
    }
}

/// Two-dimensional alignment used by `Box`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl Alignment {
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const TOP_START: Self = Self::new(HorizontalAlignment::Start, VerticalAlignment::Top);
    pub const TOP_CENTER: Self = Self::new(
        HorizontalAlignment::CenterHorizontally,
        VerticalAlignment::Top,
    );
    pub const CENTER_START: Self = Self::new(
        HorizontalAlignment::Start,
        VerticalAlignment::CenterVertically,
    );
    pub const CENTER: Self = Self::new(
        HorizontalAlignment::CenterHorizontally,
        VerticalAlignment::CenterVertically,
    );
    pub const CENTER_END: Self = Self::new(
        HorizontalAlignment::End,
        VerticalAlignment::CenterVertically,
    );
}

/// Main-axis arrangement for `Column`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinearArrangement {
    Start,
    SpacedBy(f32),
}

impl LinearArrangement {
    pub fn spacing(&self) -> f32 {
        match self {
            LinearArrangement::Start => 0.0,
            LinearArrangement::SpacedBy(spacing) => spacing.max(0.0),
        }
    }
}
