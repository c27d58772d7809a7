//! Ports Layer
//!
//! Defines the interface external callers use to drive a shared name
//! filter. The filter has no driven ports: it depends on nothing outside
//! this crate.

pub mod inbound;

pub use inbound::NameFilterApi;
