/// Hint shown next to the rate in the window title
pub const RATE_HINT: &str = "q = slow down, w = speed up";

/// Pointer location in drawable-local pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Drawable-local position of a screen-space pointer given the
    /// drawable area's on-screen origin
    pub fn from_screen(screen: (i32, i32), origin: (i32, i32)) -> Self {
        Self {
            x: f64::from(screen.0 - origin.0),
            y: f64::from(screen.1 - origin.1),
        }
    }

    /// Whole-pixel coordinates handed to the draw callback
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

/// Toolkit-independent input delivered to the display surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Drawable area changed size
    Resized { width: u32, height: u32 },
    /// Pointer moved with the primary button held
    PointerDragged(PointerPosition),
    /// Primary button pressed
    PointerClicked(PointerPosition),
    /// A character was typed
    CharTyped(char),
    CloseRequested,
}

/// Semantic rate change bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateChange {
    Slower,
    Faster,
}

impl RateChange {
    /// `'q'` slows down, `'w'` speeds up, nothing else is bound
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'q' => Some(Self::Slower),
            'w' => Some(Self::Faster),
            _ => None,
        }
    }

    /// Pure `rate -> new rate` function handed to the owner
    pub fn transform(self) -> fn(f64) -> f64 {
        match self {
            Self::Slower => |rate: f64| rate / 2.0,
            Self::Faster => |rate: f64| rate * 2.0,
        }
    }
}

/// Title text for a rate, e.g. `"20.0: q = slow down, w = speed up"`
pub fn rate_title(rate: f64) -> String {
    format!("{:?}: {}", rate, RATE_HINT)
}
