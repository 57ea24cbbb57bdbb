//! Rendering configuration
//!
//! A small builder in the same consuming style as the rest of the API:
//!
//! ```
//! use codabar::RenderConfig;
//!
//! let config = RenderConfig::new()
//!     .size(400, 120)
//!     .human_readable(false);
//! assert_eq!(config.width(), 400);
//! assert!(!config.shows_text());
//! ```

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 300;

/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 80;

/// Blank margin kept at each horizontal edge
pub const PADDING: u32 = 10;

/// Canvas size and text settings for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    width: u32,
    height: u32,
    show_text: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderConfig {
    /// Create a configuration with sensible defaults
    ///
    /// By default:
    /// - the canvas is 300x80 pixels
    /// - human-readable text is drawn under the bars
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            show_text: true,
        }
    }

    /// Set canvas width and height
    pub fn size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0, "width must be > 0");
        assert!(height > 0, "height must be > 0");
        self.width = width;
        self.height = height;
        self
    }

    /// Set canvas width
    pub fn width_px(mut self, width: u32) -> Self {
        assert!(width > 0, "width must be > 0");
        self.width = width;
        self
    }

    /// Set canvas height
    pub fn height_px(mut self, height: u32) -> Self {
        assert!(height > 0, "height must be > 0");
        self.height = height;
        self
    }

    /// Enable or disable the human-readable text band
    pub fn human_readable(mut self, enabled: bool) -> Self {
        self.show_text = enabled;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn shows_text(&self) -> bool {
        self.show_text
    }

    /// Horizontal space available for bars
    pub fn bar_width(&self) -> u32 {
        self.width.saturating_sub(2 * PADDING)
    }
}
