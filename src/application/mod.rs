pub mod use_cases;

pub use use_cases::chart_render::ChartRenderUseCase;
pub use use_cases::summarize::{CsvSummarizer, ParsedCsv};
