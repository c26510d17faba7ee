pub mod coming_soon;
pub mod dashboard;
pub mod not_found;
pub mod subscription_cancel;
