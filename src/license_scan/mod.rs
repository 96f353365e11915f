//! Domain layer for Conan license scanning
//!
//! Pure business logic with no I/O: the `conan info` report parser, the
//! package resolver policy, and the domain value objects they produce.
pub mod domain;
pub mod services;
