//Lexical pass: splits text into groups, finds `::` and trailing dotted quad

use crate::parser::ParseError;

pub(crate) const MAX_GROUPS: usize = 8;
const MAX_HEX_DIGITS: usize = 4;
const IPV4_COMPONENTS: usize = 4;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Candidate<'a> {
    groups: [&'a str; MAX_GROUPS],
    //Number of hex groups encountered, which can exceed MAX_GROUPS.
    //Excess groups are checked, but not stored
    len: usize,
    //Number of hex groups preceding `::`
    elision: Option<usize>,
    ipv4: Option<&'a str>,
}

impl<'a> Candidate<'a> {
    const fn new() -> Self {
        Self {
            groups: [""; MAX_GROUPS],
            len: 0,
            elision: None,
            ipv4: None,
        }
    }

    #[inline(always)]
    pub(crate) fn groups(&self) -> &[&'a str] {
        &self.groups[..self.len.min(MAX_GROUPS)]
    }

    #[inline(always)]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub(crate) const fn elision(&self) -> Option<usize> {
        self.elision
    }

    #[inline(always)]
    pub(crate) const fn ipv4(&self) -> Option<&'a str> {
        self.ipv4
    }

    fn push_hex(&mut self, group: &'a str) -> Result<(), ParseError> {
        if group.is_empty() || group.len() > MAX_HEX_DIGITS || !group.bytes().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(ParseError::MalformedGroup);
        }

        if let Some(slot) = self.groups.get_mut(self.len) {
            *slot = group;
        }
        self.len = self.len.saturating_add(1);
        Ok(())
    }

    fn push_ipv4(&mut self, group: &'a str, is_last: bool) -> Result<(), ParseError> {
        if !is_last {
            return Err(ParseError::MalformedEmbeddedIPv4);
        }

        let mut components = 0;
        for component in group.split('.') {
            if component.is_empty() {
                return Err(ParseError::MalformedEmbeddedIPv4);
            }
            components += 1;
        }

        if components != IPV4_COMPONENTS {
            return Err(ParseError::MalformedEmbeddedIPv4);
        }

        self.ipv4 = Some(group);
        Ok(())
    }

    //Reads colon separated `text`. `is_final` indicates nothing follows `text`
    fn read(&mut self, text: &'a str, is_final: bool) -> Result<(), ParseError> {
        let mut groups = text.split(':').peekable();
        while let Some(group) = groups.next() {
            let is_last = is_final && groups.peek().is_none();
            if group.contains('.') {
                self.push_ipv4(group, is_last)?;
            } else {
                self.push_hex(group)?;
            }
        }
        Ok(())
    }
}

///Splits `text` into [Candidate]
///
///`text` is expected to be free of surrounding whitespace and zone index
pub(crate) fn scan(text: &str) -> Result<Candidate<'_>, ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    //No grammar alternative permits `:::`
    if text.contains(":::") {
        return Err(ParseError::MalformedGroup);
    }

    let mut candidate = Candidate::new();
    match text.split_once("::") {
        Some((head, tail)) => {
            if tail.contains("::") {
                return Err(ParseError::MultipleElision);
            }

            if !head.is_empty() {
                candidate.read(head, false)?;
            }
            candidate.elision = Some(candidate.len);
            if !tail.is_empty() {
                candidate.read(tail, true)?;
            }
        },
        None => candidate.read(text, true)?,
    }

    Ok(candidate)
}
