mod health_sink;
mod signal_storage;

pub use health_sink::IHealthSink;
pub use signal_storage::ISignalStorage;
