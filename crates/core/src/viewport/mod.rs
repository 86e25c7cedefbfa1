/// Classifies the viewport against the compact-mode breakpoint.
///
/// Re-evaluated on every resize; no debouncing, since the result only picks
/// rendering and gesture-wiring branches rather than driving animation.
#[derive(Debug, Clone, Copy)]
pub struct ViewportClassifier {
    width: f32,
    breakpoint: f32,
}

impl ViewportClassifier {
    pub fn new(breakpoint: f32, width: f32) -> Self {
        Self { width, breakpoint }
    }

    /// Records a new viewport width. Returns true when the compact
    /// classification flipped.
    pub fn resize(&mut self, width: f32) -> bool {
        let was_compact = self.is_compact();
        self.width = width;
        self.is_compact() != was_compact
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// True below the breakpoint: touch gestures active, desktop indicator
    /// bar hidden.
    pub fn is_compact(&self) -> bool {
        self.width < self.breakpoint
    }
}
