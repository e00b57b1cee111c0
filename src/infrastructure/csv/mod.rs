// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV parsing and delimiter detection

mod parser;

pub use parser::CsvParser;
