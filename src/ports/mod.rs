//! Port traits implemented by adapters and the domain store.

pub mod config_port;
