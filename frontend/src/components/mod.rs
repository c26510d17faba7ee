// Reusable components live here.

pub mod cancellation_table;
pub mod error_banner;
pub mod header;
pub mod icons;
pub mod loading_spinner;
pub mod metric_card;
pub mod pagination;
pub mod sortable_header;
