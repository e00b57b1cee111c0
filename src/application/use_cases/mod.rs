pub mod chart_render;
pub mod summarize;
