pub mod app;
pub mod metrics;
pub mod theme;
pub mod view;
