//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` exposes one function per backend endpoint, `http` owns the
//! credentialed request plumbing and the 401 refresh-retry decorator, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod http;
pub mod types;
