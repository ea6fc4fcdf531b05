// Adapters layer: concrete implementations of the domain ports.

pub mod logging_submitter;
