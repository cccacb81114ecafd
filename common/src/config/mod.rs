//! Application configuration.
//!
//! - `layout`: Display dimensions and text positions
//! - `variant`: [`ClockConfig`] presets selecting debounce, loading screen, greeting and label behaviour

pub mod layout;
pub mod variant;

// Re-export layout constants at config level for convenience
pub use layout::{
    DATE_POS,
    GREETING_POS,
    LABEL_POS,
    LABEL_VALUE_POS,
    LOADING_POS,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    TIME_BASELINE_Y,
};
pub use variant::{ClockConfig, SEED_TIME};
