//! Dashboard widget components, one module per panel.

pub mod chart;
pub mod detail;
pub mod events;
pub mod footer;
pub mod sports;

pub use chart::render_history_chart;
pub use detail::render_detail;
pub use events::render_events;
pub use footer::render_footer;
pub use sports::render_sports;

/// Truncate-and-pad a cell to a fixed width
pub(crate) fn pad(text: &str, width: usize) -> String {
    let mut cell: String = text.chars().take(width).collect();
    while cell.chars().count() < width {
        cell.push(' ');
    }
    cell
}
