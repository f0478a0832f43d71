//! CIDR prefix to policy-label decomposition.
//!
//! A prefix decomposes into an ordered chain: the reserved whole-address-space
//! marker, the `cidr:` labels of its ancestor networks at fixed aggregation
//! boundaries, and the exact prefix last. [`LabelCache`] memoizes chains
//! behind a bounded LRU for concurrent callers.

mod addr;
mod cache;
mod cidr;
mod config;
mod error;
mod label;

pub use addr::{format_network, mask, IpVersion};
pub use cache::{LabelCache, DFLT_CACHE_CAPACITY};
pub use cidr::{cidr_labels, ip_to_label};
pub use config::AddressingConfig;
pub use error::{ParseError, Result};
pub use label::{Label, LabelSet, LabelSource, WORLD, WORLD_IPV4, WORLD_IPV6};
