//Grammar pass: checks group counts and expands `::`

use crate::parser::ParseError;
use crate::scanner::{Candidate, MAX_GROUPS};

//Number of group slots occupied by embedded IPv4
const IPV4_SLOTS: usize = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Slot<'a> {
    //Zero group standing in for `::`
    Elided,
    Hex(&'a str),
}

#[derive(Debug, PartialEq, Eq)]
///Exactly [MAX_GROUPS] slots with `::` expanded.
///
///With embedded IPv4 present, only leading `MAX_GROUPS - 2` slots are meaningful.
pub(crate) struct Resolved<'a> {
    slots: [Slot<'a>; MAX_GROUPS],
    ipv4: Option<&'a str>,
}

impl<'a> Resolved<'a> {
    #[inline(always)]
    pub(crate) fn hex_slots(&self) -> &[Slot<'a>] {
        match self.ipv4 {
            Some(_) => &self.slots[..MAX_GROUPS - IPV4_SLOTS],
            None => &self.slots,
        }
    }

    #[inline(always)]
    pub(crate) const fn ipv4(&self) -> Option<&'a str> {
        self.ipv4
    }
}

pub(crate) fn validate(candidate: Candidate<'_>) -> Result<Resolved<'_>, ParseError> {
    let ipv4_slots = match candidate.ipv4() {
        Some(_) => IPV4_SLOTS,
        None => 0,
    };
    let present = candidate.len().saturating_add(ipv4_slots);

    if present > MAX_GROUPS {
        return Err(ParseError::TooManyGroups(present));
    }

    let hex_len = MAX_GROUPS - ipv4_slots;
    let mut slots = [Slot::Elided; MAX_GROUPS];
    let groups = candidate.groups();

    match candidate.elision() {
        None => {
            if present != MAX_GROUPS {
                return Err(ParseError::GroupCountMismatch(present));
            }

            for (slot, group) in slots.iter_mut().zip(groups) {
                *slot = Slot::Hex(*group);
            }
        },
        Some(position) => {
            let elided = MAX_GROUPS - present;
            if elided == 0 {
                return Err(ParseError::ZeroWidthElision);
            }

            let (head, tail) = groups.split_at(position);
            for (slot, group) in slots.iter_mut().zip(head) {
                *slot = Slot::Hex(*group);
            }
            //Right side is aligned to the end of hex slots
            let tail_start = hex_len - tail.len();
            for (slot, group) in slots[tail_start..hex_len].iter_mut().zip(tail) {
                *slot = Slot::Hex(*group);
            }
        },
    }

    Ok(Resolved {
        slots,
        ipv4: candidate.ipv4(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;

    fn resolve(text: &str) -> Result<Resolved<'_>, ParseError> {
        scan(text).and_then(validate)
    }

    #[test]
    fn should_expand_elision_in_place() {
        use Slot::{Elided, Hex};

        let resolved = resolve("1:2::7:8").expect("to resolve");
        assert_eq!(resolved.hex_slots(), [Hex("1"), Hex("2"), Elided, Elided, Elided, Elided, Hex("7"), Hex("8")]);

        let resolved = resolve("::").expect("to resolve");
        assert_eq!(resolved.hex_slots(), [Elided; 8]);

        let resolved = resolve("::8").expect("to resolve");
        assert_eq!(resolved.hex_slots(), [Elided, Elided, Elided, Elided, Elided, Elided, Elided, Hex("8")]);

        let resolved = resolve("1:2:3:4:5:6:7::").expect("to resolve");
        assert_eq!(resolved.hex_slots(), [Hex("1"), Hex("2"), Hex("3"), Hex("4"), Hex("5"), Hex("6"), Hex("7"), Elided]);
    }

    #[test]
    fn should_reserve_slots_for_ipv4() {
        use Slot::{Elided, Hex};

        let resolved = resolve("1::ffff:1.2.3.4").expect("to resolve");
        assert_eq!(resolved.hex_slots(), [Hex("1"), Elided, Elided, Elided, Elided, Hex("ffff")]);
        assert_eq!(resolved.ipv4(), Some("1.2.3.4"));

        let resolved = resolve("1:2:3:4:5:6:1.2.3.4").expect("to resolve");
        assert_eq!(resolved.hex_slots(), [Hex("1"), Hex("2"), Hex("3"), Hex("4"), Hex("5"), Hex("6")]);

        let resolved = resolve("::1.2.3.4").expect("to resolve");
        assert_eq!(resolved.hex_slots(), [Elided; 6]);
    }

    #[test]
    fn should_not_validate() {
        let inputs = [
            ("1:2:3:4:5:6:7", ParseError::GroupCountMismatch(7)),
            ("1:2:3:4:5:1.2.3.4", ParseError::GroupCountMismatch(7)),
            ("1.2.3.4", ParseError::GroupCountMismatch(2)),
            ("1:2:3:4:5:6:7:8:9", ParseError::TooManyGroups(9)),
            ("::1:2:3:4:5:6:7:8:9", ParseError::TooManyGroups(9)),
            ("1:2:3:4:5:6:7:1.2.3.4", ParseError::TooManyGroups(9)),
            ("1:2:3:4:5:6:7::8", ParseError::ZeroWidthElision),
            ("::1:2:3:4:5:6:7:8", ParseError::ZeroWidthElision),
            ("1:2:3:4:5:6:7:8::", ParseError::ZeroWidthElision),
            ("1:2:3:4:5::6:1.2.3.4", ParseError::ZeroWidthElision),
        ];

        for (text, expected) in inputs {
            let error = resolve(text).expect_err("should fail");
            assert_eq!(error, expected, "'{text}'");
        }
    }
}
