// ============================================================
// CHART TYPE ENUM
// ============================================================
// The chart kinds the rendering service can produce

use crate::domain::error::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Chart kind selected by the user and sent to the rendering service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Hist,
    Area,
    Box,
}

impl ChartType {
    /// All selectable chart types, in picker order
    pub const ALL: [ChartType; 5] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Hist,
        ChartType::Area,
        ChartType::Box,
    ];

    /// Wire name understood by the rendering service
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Hist => "hist",
            ChartType::Area => "area",
            ChartType::Box => "box",
        }
    }

    /// Human-readable picker label
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar Chart",
            ChartType::Line => "Line Chart",
            ChartType::Hist => "Histogram Chart",
            ChartType::Area => "Area Chart",
            ChartType::Box => "Box Chart",
        }
    }
}

impl Default for ChartType {
    fn default() -> Self {
        ChartType::Bar
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = AppError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(ChartType::Bar),
            "line" => Ok(ChartType::Line),
            "hist" => Ok(ChartType::Hist),
            "area" => Ok(ChartType::Area),
            "box" => Ok(ChartType::Box),
            other => Err(AppError::ValidationError(format!(
                "Unsupported chart type: {}. Supported types are: bar, line, hist, area, box.",
                other
            ))),
        }
    }
}
