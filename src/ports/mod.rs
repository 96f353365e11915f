/// Ports module defining interfaces for hexagonal architecture
///
/// The application core drives external systems (processes, the file system,
/// the console) only through the outbound traits declared here.
pub mod outbound;
