pub(crate) mod loading;
pub(crate) mod route_guard;

// Re-export components for convenience
pub use route_guard::RouteGuard;
