use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - light or dark rendering
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
pub enum DisplayMode {
    #[default]
    #[display(fmt = "Light")]
    #[strum(serialize = "light")]
    Light,
    #[display(fmt = "Dark")]
    #[strum(serialize = "dark")]
    Dark,
}

impl DisplayMode {
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Value Object - pixel size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartDimensions {
    pub width: u32,
    pub height: u32,
}

impl ChartDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Value Object - colours for every chart element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTheme {
    pub background: &'static str,
    pub text: &'static str,
    pub grid: &'static str,
    pub border: &'static str,
    pub up: &'static str,
    pub down: &'static str,
    pub volume_up: &'static str,
    pub volume_down: &'static str,
    pub last_price: &'static str,
}

impl ChartTheme {
    pub const LIGHT: ChartTheme = ChartTheme {
        background: "#ffffff",
        text: "#333333",
        grid: "#f0f0f0",
        border: "#e1e1e1",
        up: "#22c55e",
        down: "#ef4444",
        volume_up: "rgba(34, 197, 94, 0.45)",
        volume_down: "rgba(239, 68, 68, 0.45)",
        last_price: "#2563eb",
    };

    pub const DARK: ChartTheme = ChartTheme {
        background: "#1f2937",
        text: "#d1d5db",
        grid: "#374151",
        border: "#4b5563",
        up: "#22c55e",
        down: "#ef4444",
        volume_up: "rgba(34, 197, 94, 0.35)",
        volume_down: "rgba(239, 68, 68, 0.35)",
        last_price: "#60a5fa",
    };

    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Self::LIGHT,
            DisplayMode::Dark => Self::DARK,
        }
    }
}
