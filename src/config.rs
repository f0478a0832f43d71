use ipnet::{IpNet, Ipv4Net, Ipv6Net};

use crate::addr::IpVersion;
use crate::label;

/// Addressing mode the decomposer runs under: which families are enabled
/// (marker naming depends on it) and the optional per-family aggregate
/// ranges used intra-cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressingConfig {
    pub enable_ipv4: bool,
    pub enable_ipv6: bool,
    pub cluster_v4: Option<Ipv4Net>,
    pub cluster_v6: Option<Ipv6Net>,
}

impl AddressingConfig {
    pub fn dual_stack() -> AddressingConfig {
        AddressingConfig {
            enable_ipv4: true,
            enable_ipv6: true,
            cluster_v4: None,
            cluster_v6: None,
        }
    }

    pub fn ipv4_only() -> AddressingConfig {
        AddressingConfig {
            enable_ipv6: false,
            ..Self::dual_stack()
        }
    }

    pub fn ipv6_only() -> AddressingConfig {
        AddressingConfig {
            enable_ipv4: false,
            ..Self::dual_stack()
        }
    }

    pub fn with_cluster_v4(mut self, range: Ipv4Net) -> AddressingConfig {
        self.cluster_v4 = Some(range);
        self
    }

    pub fn with_cluster_v6(mut self, range: Ipv6Net) -> AddressingConfig {
        self.cluster_v6 = Some(range);
        self
    }

    pub fn dual_enabled(&self) -> bool {
        self.enable_ipv4 && self.enable_ipv6
    }

    // Dual-stack configurations qualify the marker per family; any
    // single-stack configuration uses the plain one for both.
    pub fn world_key(&self, version: IpVersion) -> &'static str {
        if !self.dual_enabled() {
            return label::WORLD;
        }
        match version {
            IpVersion::V4 => label::WORLD_IPV4,
            IpVersion::V6 => label::WORLD_IPV6,
        }
    }

    pub fn cluster_range(&self, version: IpVersion) -> Option<IpNet> {
        match version {
            IpVersion::V4 => self.cluster_v4.map(IpNet::V4),
            IpVersion::V6 => self.cluster_v6.map(IpNet::V6),
        }
    }
}

impl Default for AddressingConfig {
    fn default() -> AddressingConfig {
        AddressingConfig::dual_stack()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_naming_follows_stack_mode() {
        let dual = AddressingConfig::dual_stack();
        assert_eq!(dual.world_key(IpVersion::V4), label::WORLD_IPV4);
        assert_eq!(dual.world_key(IpVersion::V6), label::WORLD_IPV6);

        assert_eq!(
            AddressingConfig::ipv4_only().world_key(IpVersion::V4),
            label::WORLD
        );
        assert_eq!(
            AddressingConfig::ipv6_only().world_key(IpVersion::V6),
            label::WORLD
        );
        // Disabled families still decompose; they get the plain marker too.
        assert_eq!(
            AddressingConfig::ipv4_only().world_key(IpVersion::V6),
            label::WORLD
        );
    }

    #[test]
    fn cluster_ranges_are_per_family() {
        let conf = AddressingConfig::dual_stack()
            .with_cluster_v4("10.16.0.0/12".parse().unwrap());
        assert!(conf.cluster_range(IpVersion::V4).is_some());
        assert!(conf.cluster_range(IpVersion::V6).is_none());
    }
}
