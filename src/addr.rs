use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    pub fn of(addr: IpAddr) -> IpVersion {
        match addr {
            IpAddr::V4(_) => IpVersion::V4,
            IpAddr::V6(_) => IpVersion::V6,
        }
    }

    pub fn bit_len(&self) -> u8 {
        match self {
            IpVersion::V4 => 32,
            IpVersion::V6 => 128,
        }
    }
}

/// Zeroes every bit of `addr` beyond the first `len`. A `len` beyond the
/// family's bit width is a caller bug and panics.
pub fn mask(addr: IpAddr, len: u8) -> IpAddr {
    match addr {
        IpAddr::V4(v4) => {
            assert!(len <= 32);
            let bits = if len == 0 {
                0
            } else {
                u32::from(v4) & (u32::MAX << (32 - len))
            };
            IpAddr::V4(Ipv4Addr::from(bits))
        }
        IpAddr::V6(v6) => {
            assert!(len <= 128);
            let bits = if len == 0 {
                0
            } else {
                u128::from(v6) & (u128::MAX << (128 - len))
            };
            IpAddr::V6(Ipv6Addr::from(bits))
        }
    }
}

/// Renders `addr/len` as label text. `addr` is expected to be already
/// masked to `len`.
pub fn format_network(addr: IpAddr, len: u8) -> String {
    match addr {
        IpAddr::V4(v4) => format!("{}/{}", v4, len),
        IpAddr::V6(v6) => format!("{}/{}", dashed_v6(v6), len),
    }
}

// IPv6 text uses ':', which collides with the label source/key separator.
// Swap it for '-'; a ':' in first or last position gains a '0' so keys never
// start or end with '-'. "::" -> "0--0", "fdff::ff" -> "fdff--ff".
fn dashed_v6(addr: Ipv6Addr) -> String {
    let text = addr.to_string();
    let mut out = String::with_capacity(text.len() + 2);
    let last = text.len() - 1;
    for (i, c) in text.char_indices() {
        match c {
            ':' if i == 0 => out.push_str("0-"),
            ':' if i == last => out.push_str("-0"),
            ':' => out.push('-'),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v4(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    fn v6(s: &str) -> Ipv6Addr {
        s.parse().unwrap()
    }

    #[test]
    fn mask_ipv4() {
        assert_eq!(mask(v4("192.0.2.3"), 0), v4("0.0.0.0"));
        assert_eq!(mask(v4("192.0.2.3"), 1), v4("128.0.0.0"));
        assert_eq!(mask(v4("192.0.2.3"), 24), v4("192.0.2.0"));
        assert_eq!(mask(v4("192.0.2.3"), 32), v4("192.0.2.3"));
        assert_eq!(mask(v4("10.17.2.3"), 12), v4("10.16.0.0"));
    }

    #[test]
    fn mask_ipv6() {
        let addr = IpAddr::V6(v6("2001:db8::1"));
        assert_eq!(mask(addr, 0), IpAddr::V6(v6("::")));
        assert_eq!(mask(addr, 3), IpAddr::V6(v6("2000::")));
        assert_eq!(mask(addr, 24), IpAddr::V6(v6("2001:d00::")));
        assert_eq!(mask(addr, 128), addr);
    }

    #[test]
    #[should_panic]
    fn mask_rejects_oversized_len() {
        mask(v4("192.0.2.3"), 33);
    }

    #[test]
    fn dashed_text() {
        assert_eq!(dashed_v6(v6("::")), "0--0");
        assert_eq!(dashed_v6(v6("::1")), "0--1");
        assert_eq!(dashed_v6(v6("fdff::ff")), "fdff--ff");
        assert_eq!(dashed_v6(v6("f00d:42::")), "f00d-42--0");
        assert_eq!(dashed_v6(v6("2001:db8::1")), "2001-db8--1");
        // A single zero group is not elided, so no double dash appears.
        assert_eq!(
            dashed_v6(v6("2001:db8:cafe:0:cab:4:b0b:0")),
            "2001-db8-cafe-0-cab-4-b0b-0"
        );
    }

    #[test]
    fn network_text() {
        assert_eq!(format_network(v4("192.0.2.0"), 24), "192.0.2.0/24");
        assert_eq!(format_network(v4("0.0.0.0"), 0), "0.0.0.0/0");
        assert_eq!(
            format_network(IpAddr::V6(v6("2001:db8::")), 32),
            "2001-db8--0/32"
        );
    }
}
