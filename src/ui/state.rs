use crate::config::ViewerConfig;
use crate::math::ShadingMode;

pub const MIN_RESOLUTION: u32 = 2;
pub const MAX_RESOLUTION: u32 = 400;

pub struct UiState {
    pub show_panel: bool,
    pub show_help: bool,

    pub rows: u32,
    pub cols: u32,
    pub shading: ShadingMode,
    pub vsync_enabled: bool,
}

impl UiState {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            show_panel: true,
            show_help: true,
            rows: config.rows as u32,
            cols: config.cols as u32,
            shading: config.shading,
            vsync_enabled: config.vsync,
        }
    }

    /// The panel's current settings applied on top of `base`.
    pub fn apply_to(&self, base: &ViewerConfig) -> ViewerConfig {
        ViewerConfig {
            rows: self.rows.clamp(MIN_RESOLUTION, MAX_RESOLUTION) as usize,
            cols: self.cols.clamp(MIN_RESOLUTION, MAX_RESOLUTION) as usize,
            shading: self.shading,
            vsync: self.vsync_enabled,
            ..*base
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_the_default_config() {
        let config = ViewerConfig::default();
        assert_eq!(UiState::from_config(&config).apply_to(&config), config);
    }

    #[test]
    fn resolution_is_clamped_when_applied() {
        let mut state = UiState::default();
        state.rows = 0;
        state.cols = 10_000;

        let config = state.apply_to(&ViewerConfig::default());
        assert_eq!(config.rows, MIN_RESOLUTION as usize);
        assert_eq!(config.cols, MAX_RESOLUTION as usize);
    }
}
