//! pulse-ui - View components for the Network Pulse web app
//!
//! Components here render from props and report user intent through
//! callbacks. They never touch the network, storage or the router.

pub mod components;

pub use components::*;
