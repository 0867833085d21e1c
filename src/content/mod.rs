pub mod block;
pub mod fonts;
pub mod section;
pub mod select;

pub use block::{CalloutKind, DisplayBlock};
pub use fonts::{ShxFont, TrueTypeFont};
pub use section::Section;
pub use select::{ConversionMapping, SimulationState, query_response, select};
