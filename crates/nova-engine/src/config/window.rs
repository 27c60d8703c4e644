use super::WindowConfig;

/// Concrete window settings after defaults are applied.
///
/// Bounds and sizes are passed to the platform as-is; the host does not
/// reconcile a minimum that exceeds the initial size or the maximum.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    pub min_width: u32,
    pub min_height: u32,
    /// `None` means unbounded.
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub maximized: bool,
    pub fullscreen: bool,
    pub hidden: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            min_width: 640,
            min_height: 480,
            max_width: None,
            max_height: None,
            width: 640,
            height: 480,
            resizable: false,
            maximized: true,
            fullscreen: false,
            hidden: false,
        }
    }
}

impl WindowSettings {
    /// Resolves an optional window block. A missing block resolves to the defaults.
    pub fn resolve(config: Option<&WindowConfig>) -> Self {
        let d = Self::default();
        let Some(c) = config else {
            return d;
        };

        Self {
            min_width: c.min_width.unwrap_or(d.min_width),
            min_height: c.min_height.unwrap_or(d.min_height),
            max_width: c.max_width.or(d.max_width),
            max_height: c.max_height.or(d.max_height),
            width: c.width.unwrap_or(d.width),
            height: c.height.unwrap_or(d.height),
            resizable: c.resizable.unwrap_or(d.resizable),
            maximized: c.maximized.unwrap_or(d.maximized),
            fullscreen: c.fullscreen.unwrap_or(d.fullscreen),
            hidden: c.hidden.unwrap_or(d.hidden),
        }
    }

    /// Returns true when a maximum bound is below the matching minimum.
    pub fn has_inverted_bounds(&self) -> bool {
        self.max_width.is_some_and(|max| max < self.min_width)
            || self.max_height.is_some_and(|max| max < self.min_height)
    }
}
