pub mod panels;
pub mod state;
pub mod theme;

pub use panels::{SceneInfo, UiActions, draw_help_overlay, draw_side_panel};
pub use state::UiState;
pub use theme::apply_theme;
