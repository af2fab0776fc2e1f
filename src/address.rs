//! IPv6 address value

use core::{fmt, net, str};

use crate::parser::{parse_ipv6, ParseError};

#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
///IPv6 address, always consisting of 8 groups in network order
///
///[Display](https://doc.rust-lang.org/core/fmt/trait.Display.html) renders RFC 5952 canonical form:
///lowercase, without leading zeros, with the longest run of 2 or more zero groups replaced by `::`.
///IPv4-mapped addresses are rendered as `::ffff:a.b.c.d`.
pub struct Address(net::Ipv6Addr);

impl Address {
    ///Number of bits within address
    pub const BITS: u8 = net::Ipv6Addr::BITS as u8;
    ///Unspecified address `::`
    pub const UNSPECIFIED: Self = Self(net::Ipv6Addr::UNSPECIFIED);
    ///Loopback address `::1`
    pub const LOCALHOST: Self = Self(net::Ipv6Addr::LOCALHOST);

    #[allow(clippy::too_many_arguments)]
    #[inline(always)]
    ///Creates address from 8 groups
    pub const fn new(a: u16, b: u16, c: u16, d: u16, e: u16, f: u16, g: u16, h: u16) -> Self {
        Self(net::Ipv6Addr::new(a, b, c, d, e, f, g, h))
    }

    #[inline(always)]
    ///Creates address from 128-bit integer in host order
    pub const fn from_bits(bits: u128) -> Self {
        Self(net::Ipv6Addr::from_bits(bits))
    }

    #[inline(always)]
    ///Returns address as 128-bit integer in host order
    pub const fn to_bits(&self) -> u128 {
        self.0.to_bits()
    }

    #[inline(always)]
    ///Returns 8 groups of the address
    pub const fn segments(&self) -> [u16; 8] {
        self.0.segments()
    }

    #[inline(always)]
    ///Returns 16 octets of the address in network order
    pub const fn octets(&self) -> [u8; 16] {
        self.0.octets()
    }

    #[inline(always)]
    ///Returns address as [Ipv6Addr](https://doc.rust-lang.org/core/net/struct.Ipv6Addr.html)
    pub const fn as_ipv6(&self) -> net::Ipv6Addr {
        self.0
    }
}

impl From<net::Ipv6Addr> for Address {
    #[inline(always)]
    fn from(addr: net::Ipv6Addr) -> Self {
        Self(addr)
    }
}

impl From<Address> for net::Ipv6Addr {
    #[inline(always)]
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<[u16; 8]> for Address {
    #[inline(always)]
    fn from(segments: [u16; 8]) -> Self {
        Self(net::Ipv6Addr::from(segments))
    }
}

impl From<Address> for [u16; 8] {
    #[inline(always)]
    fn from(addr: Address) -> Self {
        addr.segments()
    }
}

impl From<u128> for Address {
    #[inline(always)]
    fn from(bits: u128) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Address> for u128 {
    #[inline(always)]
    fn from(addr: Address) -> Self {
        addr.to_bits()
    }
}

impl str::FromStr for Address {
    type Err = ParseError;

    #[inline(always)]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_ipv6(text)
    }
}

impl fmt::Display for Address {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, fmt)
    }
}
