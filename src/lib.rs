// Infrastructure layer (shared components)
pub mod infrastructure;

// Re-export infrastructure modules for convenience
pub use infrastructure::postgres;

// Supporting modules
pub mod config;
pub mod probe;

// Application layer
pub mod server;
