/// Axis-aligned box in playfield pixels, anchored at its bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        overlap(self, other)
    }
}

/// Half-open intersection test: boxes that only share an edge do not overlap.
pub fn overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width
        && a.x + a.width > b.x
        && a.y < b.y + b.height
        && a.y + a.height > b.y
}

/// Moves `x` by `step`, keeping a sprite of `span` pixels inside `[0, max)`.
pub fn clamp_step(x: i32, step: i32, span: i32, max: i32) -> i32 {
    if x + span + step >= max {
        max - span
    } else if x + step <= 0 {
        0
    } else {
        x + step
    }
}
