/// Application layer - Use cases and application services
///
/// This layer orchestrates the domain services and outbound ports to
/// implement the license scan workflow.
pub mod dto;
pub mod factories;
pub mod use_cases;
