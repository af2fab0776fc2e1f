//Numeric pass: turns resolved groups into address

use crate::address::Address;
use crate::parser::ParseError;
use crate::scanner::MAX_GROUPS;
use crate::validator::{Resolved, Slot};

//Reads RFC 3986 dec-octet
fn read_octet(text: &str) -> Result<u8, ParseError> {
    if text.is_empty() || !text.bytes().all(|ch| ch.is_ascii_digit()) {
        return Err(ParseError::MalformedEmbeddedIPv4);
    }

    if text.len() > 1 && text.starts_with('0') {
        return Err(ParseError::LeadingZeroOctet);
    }

    let mut octet = 0u16;
    for digit in text.bytes() {
        octet = octet.saturating_mul(10).saturating_add((digit - b'0') as u16);
    }

    match octet {
        octet @ 0..=255 => Ok(octet as u8),
        _ => Err(ParseError::OctetOutOfRange),
    }
}

fn read_ipv4(text: &str) -> Result<[u8; 4], ParseError> {
    let mut octets = [0u8; 4];
    let mut components = text.split('.');

    for octet in octets.iter_mut() {
        match components.next() {
            Some(component) => *octet = read_octet(component)?,
            None => return Err(ParseError::MalformedEmbeddedIPv4),
        }
    }

    match components.next() {
        Some(_) => Err(ParseError::MalformedEmbeddedIPv4),
        None => Ok(octets),
    }
}

pub(crate) fn convert(resolved: Resolved<'_>) -> Result<Address, ParseError> {
    let mut segments = [0u16; MAX_GROUPS];

    for (segment, slot) in segments.iter_mut().zip(resolved.hex_slots()) {
        *segment = match slot {
            Slot::Elided => 0,
            //Scanner guarantees 1..=4 hex digits, so this is not expected to fail
            Slot::Hex(group) => u16::from_str_radix(group, 16).map_err(|_| ParseError::MalformedGroup)?,
        };
    }

    if let Some(ipv4) = resolved.ipv4() {
        let [a, b, c, d] = read_ipv4(ipv4)?;
        segments[6] = u16::from_be_bytes([a, b]);
        segments[7] = u16::from_be_bytes([c, d]);
    }

    Ok(Address::from(segments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_octets() {
        let inputs = [
            ("0", Ok(0)),
            ("8", Ok(8)),
            ("86", Ok(86)),
            ("255", Ok(255)),
            ("256", Err(ParseError::OctetOutOfRange)),
            ("999999999999", Err(ParseError::OctetOutOfRange)),
            ("00", Err(ParseError::LeadingZeroOctet)),
            ("08", Err(ParseError::LeadingZeroOctet)),
            ("086", Err(ParseError::LeadingZeroOctet)),
            ("0300", Err(ParseError::LeadingZeroOctet)),
            ("", Err(ParseError::MalformedEmbeddedIPv4)),
            ("1a", Err(ParseError::MalformedEmbeddedIPv4)),
            ("+1", Err(ParseError::MalformedEmbeddedIPv4)),
            ("-1", Err(ParseError::MalformedEmbeddedIPv4)),
        ];

        for (text, expected) in inputs {
            assert_eq!(read_octet(text), expected, "octet '{text}'");
        }
    }

    #[test]
    fn should_pack_ipv4_big_endian() {
        let addr = crate::scanner::scan("::ffff:192.0.2.128")
            .and_then(crate::validator::validate)
            .and_then(convert)
            .expect("to convert");
        assert_eq!(addr.segments(), [0, 0, 0, 0, 0, 0xffff, 0xc000, 0x0280]);
    }

    #[test]
    fn should_require_four_components() {
        assert_eq!(read_ipv4("1.2.3.4"), Ok([1, 2, 3, 4]));
        assert_eq!(read_ipv4("1.2.3"), Err(ParseError::MalformedEmbeddedIPv4));
        assert_eq!(read_ipv4("1.2.3.4.5"), Err(ParseError::MalformedEmbeddedIPv4));
    }
}
