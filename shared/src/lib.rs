//! Data model and pure view logic for the SubDesk admin console.
//!
//! The frontend crate renders; everything it needs to *compute* — sort
//! order, page slices, currency grouping — lives here so it stays
//! host-testable and free of WASM dependencies.

pub mod cancellation;
pub mod dashboard;
pub mod format;
pub mod pagination;
pub mod sort;

pub use cancellation::{Cancellation, CancellationUser, RefundStatus};
pub use dashboard::DashboardMetrics;
