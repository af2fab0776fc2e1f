//! Comparison oracles
//!
//!Provides common interface over address parsers, so that results of this crate can be cross-checked
//!against other implementations.
//!
//![CoreOracle] is the parser of the standard library, which differs from [StrictOracle] in following:
//!
//!- Surrounding whitespace is never accepted.
//!- Zone index is never accepted.

use core::net;

use crate::address::Address;
use crate::options::ParseOptions;
use crate::parser::parse_ipv6_with;

///Address parser capable of classifying text
pub trait AddressOracle {
    ///Attempts to parse `text`, returning `None` if it is not valid address
    fn try_parse_address(&self, text: &str) -> Option<Address>;
}

#[derive(Copy, Clone, Debug, Default)]
///Oracle backed by [Ipv6Addr](https://doc.rust-lang.org/core/net/struct.Ipv6Addr.html) parser
pub struct CoreOracle;

impl AddressOracle for CoreOracle {
    #[inline]
    fn try_parse_address(&self, text: &str) -> Option<Address> {
        text.parse::<net::Ipv6Addr>().ok().map(Address::from)
    }
}

#[derive(Copy, Clone, Debug, Default)]
///Oracle backed by [parse_ipv6_with](fn.parse_ipv6_with.html)
pub struct StrictOracle {
    options: ParseOptions,
}

impl StrictOracle {
    #[inline(always)]
    ///Creates oracle with provided `options`
    pub const fn new(options: ParseOptions) -> Self {
        Self {
            options,
        }
    }
}

impl AddressOracle for StrictOracle {
    #[inline]
    fn try_parse_address(&self, text: &str) -> Option<Address> {
        parse_ipv6_with(text, &self.options).ok()
    }
}

impl<O: AddressOracle + ?Sized> AddressOracle for &O {
    #[inline(always)]
    fn try_parse_address(&self, text: &str) -> Option<Address> {
        (**self).try_parse_address(text)
    }
}
