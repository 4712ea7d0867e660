use plotters::style::{RGBAColor, RGBColor};

use crate::types::{HeatTier, Outcome};

pub const TIER_MILD: RGBColor = RGBColor(0x8F, 0xD6, 0x94);
pub const TIER_MEDIUM: RGBColor = RGBColor(0xFF, 0xD1, 0x66);
pub const TIER_HOT: RGBColor = RGBColor(0xF6, 0xAE, 0x2D);
pub const TIER_EXTREME: RGBColor = RGBColor(0xEF, 0x47, 0x6F);

pub const OUTCOME_COMPLETED: RGBColor = RGBColor(0x6C, 0xC2, 0x4A);
pub const OUTCOME_FAILED: RGBColor = RGBColor(0xEF, 0x44, 0x44);

pub const HEAT_LINE: RGBColor = RGBColor(0xF2, 0x64, 0x19);
pub const COMPLETION_LINE: RGBColor = RGBColor(0x33, 0x66, 0xCC);
pub const PRIMARY_BAR: RGBColor = RGBColor(0x63, 0x6E, 0xFA);

pub fn tier_color(tier: HeatTier) -> RGBColor {
    match tier {
        HeatTier::Mild => TIER_MILD,
        HeatTier::Medium => TIER_MEDIUM,
        HeatTier::Hot => TIER_HOT,
        HeatTier::Extreme => TIER_EXTREME,
    }
}

pub fn outcome_color(outcome: Outcome) -> RGBColor {
    match outcome {
        Outcome::Completed => OUTCOME_COMPLETED,
        Outcome::Failed => OUTCOME_FAILED,
    }
}

/// Chart theme configuration
pub struct ChartTheme {
    pub background_color: RGBAColor,
    pub text_color: RGBAColor,
    pub grid_color: RGBAColor,
    pub axis_color: RGBAColor,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: RGBAColor(255, 255, 255, 1.0),
            text_color: RGBAColor(42, 63, 95, 1.0),
            grid_color: RGBAColor(42, 63, 95, 0.12),
            axis_color: RGBAColor(42, 63, 95, 0.6),
        }
    }
}

/// Chart style configuration
pub struct ChartStyle {
    pub width: u32,
    pub line_width: u32,
    pub font_size: u32,
    pub title_font_size: u32,
    pub margin: u32,
    pub label_area_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            line_width: 3,
            font_size: 15,
            title_font_size: 22,
            margin: 20,
            label_area_size: 60,
        }
    }
}
