/// Configuration record passed once to the host at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Display and identification string for the run. Used as the window title.
    pub name: String,
    pub window: Option<WindowConfig>,
}

/// Window block of an [`EngineConfig`]. Every field is optional; the host
/// fills the gaps (see [`WindowSettings`](super::WindowSettings)).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowConfig {
    pub min_width: Option<u32>,
    pub min_height: Option<u32>,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub resizable: Option<bool>,
    pub maximized: Option<bool>,
    pub fullscreen: Option<bool>,
    pub hidden: Option<bool>,
}

impl EngineConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            window: None,
        }
    }

    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = Some(window);
        self
    }
}
