pub mod text;
pub mod canvas;

pub use text::{count_rows, evolution_diagram, generation_row, rule_summary, separator};
pub use canvas::{draw_diagram, draw_panel, CELL_SIZE, PANEL_WIDTH};
