//! Parser configuration

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
///Options controlling which variations of IPv6 text are accepted
///
///Grammar of the address itself is never relaxed, options only control what may surround it.
pub struct ParseOptions {
    allow_surrounding_whitespace: bool,
    allow_zone_index: bool,
}

impl ParseOptions {
    ///Default options:
    ///
    ///- Leading and trailing whitespace is trimmed
    ///- Zone index (`%eth0`) is rejected
    pub const DEFAULT: Self = Self {
        allow_surrounding_whitespace: true,
        allow_zone_index: false,
    };

    ///Strict options, accepting nothing but the address itself
    pub const STRICT: Self = Self {
        allow_surrounding_whitespace: false,
        allow_zone_index: false,
    };

    #[inline(always)]
    ///Creates default options
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[inline(always)]
    ///Sets whether leading and trailing whitespace is trimmed before parsing
    ///
    ///Whitespace inside address is never permitted.
    pub const fn allow_surrounding_whitespace(mut self, value: bool) -> Self {
        self.allow_surrounding_whitespace = value;
        self
    }

    #[inline(always)]
    ///Sets whether trailing zone index (e.g. `fe80::1%eth0`) is accepted and discarded
    pub const fn allow_zone_index(mut self, value: bool) -> Self {
        self.allow_zone_index = value;
        self
    }

    #[inline(always)]
    ///Returns whether leading and trailing whitespace is trimmed
    pub const fn allows_surrounding_whitespace(&self) -> bool {
        self.allow_surrounding_whitespace
    }

    #[inline(always)]
    ///Returns whether zone index is accepted
    pub const fn allows_zone_index(&self) -> bool {
        self.allow_zone_index
    }
}

impl Default for ParseOptions {
    #[inline(always)]
    fn default() -> Self {
        Self::DEFAULT
    }
}
