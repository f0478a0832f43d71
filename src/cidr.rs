use ipnet::IpNet;
use std::net::IpAddr;

use crate::addr::{format_network, mask, IpVersion};
use crate::config::AddressingConfig;
use crate::error::{ParseError, Result};
use crate::label::Label;

// Aggregation boundaries an ancestor may sit on. IPv4 splits the space in
// two, then follows octet boundaries. IPv6 adds the 2000::/3 global-unicast
// cut, the 16/24/32 allocation ladder, the network/host split at 64 and the
// embedded-IPv4 boundary at 96.
const V4_BREAKPOINTS: [u8; 6] = [0, 1, 8, 16, 24, 32];
const V6_BREAKPOINTS: [u8; 9] = [0, 1, 3, 16, 24, 32, 64, 96, 128];

/*
    192.0.2.3/32 ->
        reserved:world
        cidr:128.0.0.0/1
        cidr:192.0.0.0/8
        cidr:192.0.2.0/24
        cidr:192.0.2.3/32

    The whole-address-space marker stands in for the /0 entry; every other
    label names the input masked at one kept breakpoint.
*/
pub fn cidr_labels(prefix: IpNet, conf: &AddressingConfig) -> Vec<Label> {
    let version = IpVersion::of(prefix.addr());
    let exact_len = prefix.prefix_len();

    let mut labels = vec![Label::reserved(conf.world_key(version))];
    if exact_len == 0 {
        return labels;
    }

    let schedule: &[u8] = match version {
        IpVersion::V4 => &V4_BREAKPOINTS,
        IpVersion::V6 => &V6_BREAKPOINTS,
    };
    let mut candidates: Vec<u8> = schedule
        .iter()
        .copied()
        .filter(|&len| 0 < len && len < exact_len)
        .collect();
    if let Some(range) = conf.cluster_range(version) {
        let len = range.prefix_len();
        if 0 < len && len < exact_len && range.contains(&prefix) {
            if let Err(pos) = candidates.binary_search(&len) {
                candidates.insert(pos, len);
            }
        }
    }
    candidates.push(exact_len);

    // Walk most-general first, keeping the first length of any run of
    // candidates that mask to the same network. The exact input length
    // always survives the dedup.
    let mut prev = mask(prefix.addr(), 0);
    for len in candidates {
        let network = mask(prefix.addr(), len);
        if network == prev && len != exact_len {
            continue;
        }
        labels.push(Label::cidr(format_network(network, len)));
        prev = network;
    }
    labels
}

/// Converts one address or CIDR string into a single `cidr:` label, masking
/// host bits. Bare addresses get the family's full width. Unlike the
/// decomposer this renders the /0 network itself, not a reserved marker.
pub fn ip_to_label(text: &str) -> Result<Label> {
    if text.contains('/') {
        let net = match text.parse::<IpNet>() {
            Ok(net) => net.trunc(),
            Err(_) => return ParseError::err_cidr(text),
        };
        return Ok(Label::cidr(format_network(net.addr(), net.prefix_len())));
    }
    let addr = match text.parse::<IpAddr>() {
        Ok(addr) => addr,
        Err(_) => return ParseError::err_address(text),
    };
    Ok(Label::cidr(format_network(
        addr,
        IpVersion::of(addr).bit_len(),
    )))
}
