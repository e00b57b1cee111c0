// ============================================================
// SCREEN FLOW
// ============================================================
// Headless state machines for the selection and result screens

mod result;
mod selection;

pub use result::{ResultScreen, ResultView, ScreenState, UNSUPPORTED_FORMAT_WARNING};
pub use selection::{ChartPayload, SelectionScreen};
