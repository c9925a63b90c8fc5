mod draw;
pub mod render;
pub mod style;

pub use hit_test::{hit_test, pointer_feedback, CursorIcon, HitTestResult, PointerFeedback};
pub use render::{bearing_endpoint, render};
pub use style::OverlayStyle;
