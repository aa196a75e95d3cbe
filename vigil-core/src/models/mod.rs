mod health_summary;

pub use health_summary::HealthSummary;
