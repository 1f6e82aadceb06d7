// Application layer - Chart use cases and ports
pub mod bars;
pub mod binder;
pub mod hover;
pub mod post_repository;
pub mod scatter;
pub mod surface;
