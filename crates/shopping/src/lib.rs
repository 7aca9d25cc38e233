pub mod aggregation;
pub mod checklist;
pub mod normalize;
pub mod quantity;
pub mod render;

// Re-export commonly used types
pub use aggregation::{AggregatedItem, AggregatedShoppingList, aggregate};
pub use checklist::ShoppingChecks;
pub use normalize::{ItemKey, ItemKeyError};
pub use quantity::{format_qty, pretty_number};
pub use render::{ExportRow, export_rows, render_export, render_list};
