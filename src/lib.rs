//! Strict IPv6 text parser
//!
//!Accepts exactly the `IPv6address` grammar of RFC 3986, which covers RFC 4291 text
//!representation including trailing embedded IPv4:
//!
//!- At most one `::`, standing for one or more zero groups
//!- Each group is 1 to 4 hex digits
//!- Optional trailing `d.d.d.d`, where each component is 0..=255 without leading zeros
//!
//!```
//!use ipv6_text::{parse_ipv6, Address, ParseError};
//!
//!assert_eq!(parse_ipv6("::1"), Ok(Address::LOCALHOST));
//!assert_eq!(parse_ipv6("::ffff:192.0.2.1").map(|addr| addr.segments()[7]), Ok(0x0201));
//!assert_eq!(parse_ipv6("1::2::3"), Err(ParseError::MultipleElision));
//!assert_eq!(parse_ipv6("::ffff:192.0.2.01"), Err(ParseError::LeadingZeroOctet));
//!```

#![no_std]
#![warn(missing_docs)]
#![allow(clippy::style)]

mod scanner;
mod validator;
mod converter;
mod parser;
pub use parser::{parse_ipv6, parse_ipv6_with, is_valid_ipv6, is_valid_ipv6_with, ParseError};
mod address;
pub use address::Address;
mod options;
pub use options::ParseOptions;
pub mod oracle;
