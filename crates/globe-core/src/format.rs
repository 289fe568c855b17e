/// Where group separators fall, counted from the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grouping {
    /// `1,234,567`
    Thousands,
    /// Three digits, then pairs: `12,34,567`.
    Indian,
}

impl Grouping {
    /// True when a separator goes in front of the digit that has `right`
    /// digits after it (itself included).
    fn breaks_before(self, right: usize) -> bool {
        match self {
            Grouping::Thousands => right % 3 == 0,
            Grouping::Indian => right == 3 || (right > 3 && (right - 3) % 2 == 0),
        }
    }
}

/// Integer grouping as done by `Intl.NumberFormat` for the common locales.
///
/// `min_grouping` is the CLDR minimum grouping digits: with 2, a four-digit
/// value such as `1234` stays ungrouped (`es`, `pl`, `pt-PT`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    group_separator: char,
    grouping: Grouping,
    min_grouping: usize,
}

impl NumberFormat {
    pub const EN_US: Self = Self {
        group_separator: ',',
        grouping: Grouping::Thousands,
        min_grouping: 1,
    };

    /// Pick the grouping rules for a BCP 47 tag such as `de-DE` or `fr`.
    /// Unknown tags fall back to `en-US`.
    pub fn for_locale(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase().replace('_', "-");
        let mut parts = tag.split('-');
        let lang = parts.next().unwrap_or("");
        let region = parts.next().unwrap_or("");
        let group_separator = match (lang, region) {
            ("de", "ch") | ("it", "ch") => '\u{2019}',
            ("pt", "pt") => '\u{a0}',
            ("de" | "it" | "nl" | "pt" | "id" | "tr" | "da" | "es" | "el" | "ro", _) => '.',
            ("fr", _) => '\u{202f}',
            ("ru" | "uk" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "hu" | "bg", _) => '\u{a0}',
            _ => ',',
        };
        let grouping = match (lang, region) {
            ("en", "in") | ("hi", _) => Grouping::Indian,
            _ => Grouping::Thousands,
        };
        let min_grouping = match (lang, region) {
            ("es" | "pl", _) | ("pt", "pt") => 2,
            _ => 1,
        };
        Self {
            group_separator,
            grouping,
            min_grouping,
        }
    }

    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    pub fn format(&self, value: u64) -> String {
        let digits = value.to_string();
        let len = digits.len();
        if len < 3 + self.min_grouping {
            return digits;
        }
        let sep_len = self.group_separator.len_utf8();
        let mut out = String::with_capacity(len + len / 2 * sep_len);
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && self.grouping.breaks_before(len - i) {
                out.push(self.group_separator);
            }
            out.push(ch);
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::EN_US
    }
}

#[inline]
pub fn format_population(population: u64, format: &NumberFormat) -> String {
    format.format(population)
}
