use crate::{converter, scanner, validator};
use crate::address::Address;
use crate::options::ParseOptions;

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
///Possible errors parsing IPv6 address
///
///Each variant identifies the rule that was violated.
pub enum ParseError {
    ///Input is empty or consists only of whitespace
    #[error("Address is not specified")]
    EmptyInput,
    ///Address contains more than one `::`
    #[error("IPv6 contains more than 1 zero abbreviation")]
    MultipleElision,
    ///Hex group is empty, longer than 4 digits or contains non-hex characters
    #[error("IPv6 group must be 1 to 4 hex digits")]
    MalformedGroup,
    ///Address declares more than 8 groups
    #[error("IPv6 Address has '{0}' components but at most 8 are allowed")]
    TooManyGroups(usize),
    ///Address without `::` has number of groups other than 8
    #[error("IPv6 Address has '{0}' components but expected 8")]
    GroupCountMismatch(usize),
    ///`::` is present, but there is no group left for it to stand for
    #[error("IPv6 zero abbreviation must stand for at least 1 group")]
    ZeroWidthElision,
    ///Embedded IPv4 is not `d.d.d.d` or is not the last component
    #[error("Embedded IPv4 address is malformed")]
    MalformedEmbeddedIPv4,
    ///Embedded IPv4 component is greater than 255
    #[error("IPv4 component is out of 0..=255 range")]
    OctetOutOfRange,
    ///Embedded IPv4 component has leading zero
    #[error("IPv4 component must not have leading zeros")]
    LeadingZeroOctet,
    ///Zone index suffix is empty or contains illegal characters
    #[error("Zone index is invalid")]
    InvalidZoneIndex,
}

//Removes surrounding whitespace and zone index as allowed by `options`
fn strip<'a>(text: &'a str, options: &ParseOptions) -> Result<&'a str, ParseError> {
    let text = if options.allows_surrounding_whitespace() {
        text.trim()
    } else {
        text
    };

    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    if !options.allows_zone_index() {
        return Ok(text);
    }

    match text.split_once('%') {
        None => Ok(text),
        Some(("", _)) => Err(ParseError::EmptyInput),
        Some((addr, zone)) => {
            if zone.is_empty() || !zone.bytes().all(is_zone_char) {
                Err(ParseError::InvalidZoneIndex)
            } else {
                Ok(addr)
            }
        }
    }
}

#[inline(always)]
//RFC 3986 unreserved
const fn is_zone_char(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, b'-' | b'.' | b'_' | b'~')
}

///Parses IPv6 address from the input `text` according to `options`
pub fn parse_ipv6_with(text: &str, options: &ParseOptions) -> Result<Address, ParseError> {
    let result = strip(text, options)
        .and_then(scanner::scan)
        .and_then(validator::validate)
        .and_then(converter::convert);

    match &result {
        Ok(addr) => tracing::trace!(input = text, %addr, "parsed IPv6 address"),
        Err(error) => tracing::trace!(input = text, %error, "rejected IPv6 address"),
    }
    result
}

#[inline]
///Parses IPv6 address from the input `text` using [default](struct.ParseOptions.html#associatedconstant.DEFAULT) options
pub fn parse_ipv6(text: &str) -> Result<Address, ParseError> {
    parse_ipv6_with(text, &ParseOptions::DEFAULT)
}

#[inline]
///Checks whether `text` is valid IPv6 address according to `options`
pub fn is_valid_ipv6_with(text: &str, options: &ParseOptions) -> bool {
    parse_ipv6_with(text, options).is_ok()
}

#[inline]
///Checks whether `text` is valid IPv6 address
pub fn is_valid_ipv6(text: &str) -> bool {
    parse_ipv6(text).is_ok()
}
