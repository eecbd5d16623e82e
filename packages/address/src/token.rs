//! Address tokens: a lexeme, its shape, the postal roles it could play and
//! the role it was finally assigned.

use bitflags::bitflags;

use crate::lex::{LexKind, LexToken};
use crate::lexicon::Lexicons;

bitflags! {
    /// Postal roles a token can play in a street address line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Roles: u16 {
        const HOUSE = 1;
        const PREFIX_DIR = 1 << 1;
        const PRE_TYPE = 1 << 2;
        const STREET_QUALIFIER = 1 << 3;
        const STREET_PREFIX = 1 << 4;
        const STREET = 1 << 5;
        const STREET_TYPE = 1 << 6;
        const SUFFIX_DIR = 1 << 7;
        const UNIT_TYPE = 1 << 8;
        const UNIT_NUM = 1 << 9;
        /// Punctuation-like tokens folded into their neighbours.
        const COLLAPSE = 1 << 10;
    }
}

impl Roles {
    /// Roles a token of the given shape could play.
    #[must_use]
    pub const fn possible_for(kind: LexKind) -> Self {
        match kind {
            LexKind::Amp | LexKind::Dash => Self::COLLAPSE,
            LexKind::OneChar => Self::PREFIX_DIR.union(Self::SUFFIX_DIR),
            LexKind::TwoChar => Self::PREFIX_DIR
                .union(Self::SUFFIX_DIR)
                .union(Self::STREET_TYPE),
            LexKind::Fraction => Self::HOUSE.union(Self::UNIT_NUM),
            LexKind::Alpha => Self::STREET.union(Self::STREET_TYPE).union(Self::UNIT_TYPE),
            LexKind::Alphanumeric => Self::UNIT_NUM,
            LexKind::Num => Self::HOUSE.union(Self::STREET).union(Self::UNIT_NUM),
            LexKind::Ordinal => Self::STREET.union(Self::HOUSE),
        }
    }
}

/// One postal component candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressToken {
    lexeme: String,
    kind: LexKind,
    possible: Roles,
    assigned: Roles,
}

impl From<LexToken> for AddressToken {
    fn from(token: LexToken) -> Self {
        Self::new(token.lexeme, token.kind)
    }
}

impl AddressToken {
    /// Wraps a lexeme. `&` and `-` style tokens are resolved to
    /// [`Roles::COLLAPSE`] immediately.
    #[must_use]
    pub fn new(lexeme: impl Into<String>, kind: LexKind) -> Self {
        let possible = Roles::possible_for(kind);
        let assigned = if possible == Roles::COLLAPSE {
            Roles::COLLAPSE
        } else {
            Roles::empty()
        };

        Self {
            lexeme: lexeme.into(),
            kind,
            possible,
            assigned,
        }
    }

    #[must_use]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    #[must_use]
    pub const fn kind(&self) -> LexKind {
        self.kind
    }

    #[must_use]
    pub const fn possible_roles(&self) -> Roles {
        self.possible
    }

    /// The role assigned by the grammar, empty until one is.
    #[must_use]
    pub const fn assigned_role(&self) -> Roles {
        self.assigned
    }

    pub(crate) const fn assign(&mut self, role: Roles) {
        self.assigned = role;
    }

    pub(crate) fn set_lexeme(&mut self, lexeme: impl Into<String>) {
        self.lexeme = lexeme.into();
    }

    /// Returns `true` if the token's shape allows any of `roles`.
    #[must_use]
    pub const fn could_be(&self, roles: Roles) -> bool {
        self.possible.intersects(roles)
    }

    /// Length of the lexeme in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.lexeme.chars().count()
    }

    #[must_use]
    pub fn starts_with(&self, ch: char) -> bool {
        self.lexeme.starts_with(ch)
    }

    #[must_use]
    pub fn is_normalized_directional(&self) -> bool {
        Lexicons::shared()
            .normalized_directionals
            .contains(&self.lexeme)
    }

    #[must_use]
    pub fn is_directional(&self) -> bool {
        Lexicons::shared().directionals.contains(&self.lexeme)
    }

    /// Membership in the common road-type table.
    #[must_use]
    pub fn is_road_type(&self) -> bool {
        Lexicons::shared().common_roads.contains(&self.lexeme)
    }

    /// Membership in the full USPS suffix table.
    #[must_use]
    pub fn is_usps_abbr(&self) -> bool {
        Lexicons::shared().usps_roads.contains(&self.lexeme)
    }

    #[must_use]
    pub fn is_unit(&self) -> bool {
        Lexicons::shared().secondary_units.contains(&self.lexeme)
    }

    #[must_use]
    pub fn is_ordinal_word(&self) -> bool {
        Lexicons::shared().ordinal_words.contains(&self.lexeme)
    }

    /// Rewrites a written ordinal (`FOURTH`) as `4TH`.
    pub fn normalize_ordinal_word(&mut self) {
        if let Some(ordinal) = Lexicons::shared().ordinal_words.substitute(&self.lexeme) {
            self.lexeme = ordinal.to_string();
        }
    }

    /// Rewrites a numeric ordinal (`4TH`) as its written form (`FOURTH`)
    /// when the word table has one.
    pub fn spell_ordinal(&mut self) {
        if self.kind != LexKind::Ordinal {
            return;
        }
        if let Some(word) = Lexicons::shared().ordinal_words.word_for(&self.lexeme) {
            self.lexeme = word.to_string();
            self.kind = LexKind::Alpha;
        }
    }

    /// Canonicalizes a directional and re-derives the one/two letter shape
    /// from the new length.
    pub fn normalize_directional(&mut self) {
        if let Some(canonical) = Lexicons::shared().directionals.substitute(&self.lexeme) {
            self.lexeme = canonical.to_string();
        }
        self.rederive_letter_kind();
    }

    fn rederive_letter_kind(&mut self) {
        match self.char_len() {
            1 => self.kind = LexKind::OneChar,
            2 => self.kind = LexKind::TwoChar,
            _ => {}
        }
    }

    /// Canonicalizes a road type through the USPS table.
    pub fn normalize_road_type(&mut self) {
        if let Some(canonical) = Lexicons::shared().usps_roads.substitute(&self.lexeme) {
            self.lexeme = canonical.to_string();
        }
    }

    /// Fuses two directionals, e.g. `N` + `E` into `NE`. The fused token
    /// keeps the shape of the first one, so `N E` stays one-letter shaped
    /// and can still be read as a street name.
    pub fn append_directional(&mut self, other: &mut Self) {
        self.normalize_directional();
        other.normalize_directional();
        self.lexeme.push_str(&other.lexeme);
    }

    /// Joins another word onto this one with a space, making a multi-word
    /// name.
    pub fn append(&mut self, other: &Self) {
        self.lexeme.push(' ');
        self.lexeme.push_str(&other.lexeme);
        self.kind = LexKind::Alpha;
    }

    /// Keeps only the digits of the lexeme.
    pub fn to_numeric(&mut self) {
        self.lexeme.retain(|ch| ch.is_ascii_digit());
        self.kind = LexKind::Num;
    }

    /// Adds an ordinal suffix chosen from the last digit alone, so `11`
    /// becomes `11ST`.
    pub fn to_ordinal(&mut self) {
        let suffix = match self.lexeme.chars().last() {
            Some('1') => "ST",
            Some('2') => "ND",
            Some('3') => "RD",
            _ => "TH",
        };
        self.lexeme.push_str(suffix);
        self.kind = LexKind::Ordinal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(lexeme: &str, kind: LexKind) -> AddressToken {
        AddressToken::new(lexeme, kind)
    }

    #[test]
    fn possible_roles_follow_kind() {
        assert_eq!(
            Roles::possible_for(LexKind::OneChar),
            Roles::PREFIX_DIR | Roles::SUFFIX_DIR
        );
        assert!(token("ST", LexKind::TwoChar).could_be(Roles::STREET_TYPE));
        assert!(!token("N", LexKind::OneChar).could_be(Roles::STREET_TYPE));
        assert!(token("123", LexKind::Num).could_be(Roles::HOUSE | Roles::STREET));
        assert!(token("4TH", LexKind::Ordinal).could_be(Roles::HOUSE));
        assert!(!token("12B", LexKind::Alphanumeric).could_be(Roles::STREET));
    }

    #[test]
    fn collapse_tokens_are_resolved_immediately() {
        let amp = token("&", LexKind::Amp);
        assert_eq!(amp.assigned_role(), Roles::COLLAPSE);
        assert_eq!(token("MAIN", LexKind::Alpha).assigned_role(), Roles::empty());
    }

    #[test]
    fn normalize_directional_rederives_kind() {
        let mut tok = token("NORTHWEST", LexKind::Alpha);
        tok.normalize_directional();
        assert_eq!(tok.lexeme(), "NW");
        assert_eq!(tok.kind(), LexKind::TwoChar);

        let mut tok = token("SOUTH", LexKind::Alpha);
        tok.normalize_directional();
        assert_eq!(tok.lexeme(), "S");
        assert_eq!(tok.kind(), LexKind::OneChar);

        let mut tok = token("MAIN", LexKind::Alpha);
        tok.normalize_directional();
        assert_eq!(tok.lexeme(), "MAIN");
        assert_eq!(tok.kind(), LexKind::Alpha);
    }

    #[test]
    fn append_directional_fuses_without_space() {
        let mut north = token("NORTH", LexKind::Alpha);
        let mut east = token("EAST", LexKind::Alpha);
        north.append_directional(&mut east);
        assert_eq!(north.lexeme(), "NE");
        assert_eq!(north.kind(), LexKind::OneChar);

        let mut north = token("N", LexKind::OneChar);
        let mut east = token("E", LexKind::OneChar);
        north.append_directional(&mut east);
        assert_eq!(north.lexeme(), "NE");
        assert_eq!(north.kind(), LexKind::OneChar);
    }

    #[test]
    fn append_joins_words() {
        let mut la = token("LA", LexKind::TwoChar);
        la.append(&token("PUSH", LexKind::Alpha));
        assert_eq!(la.lexeme(), "LA PUSH");
        assert_eq!(la.kind(), LexKind::Alpha);
    }

    #[test]
    fn road_types_use_usps_table() {
        let mut tok = token("AVENUE", LexKind::Alpha);
        assert!(tok.is_road_type());
        tok.normalize_road_type();
        assert_eq!(tok.lexeme(), "AVE");
    }

    #[test]
    fn ordinal_words_both_ways() {
        let mut tok = token("FOURTH", LexKind::Alpha);
        assert!(tok.is_ordinal_word());
        tok.normalize_ordinal_word();
        assert_eq!(tok.lexeme(), "4TH");

        let mut tok = token("4TH", LexKind::Ordinal);
        tok.spell_ordinal();
        assert_eq!(tok.lexeme(), "FOURTH");
        assert_eq!(tok.kind(), LexKind::Alpha);

        let mut tok = token("14TH", LexKind::Ordinal);
        tok.spell_ordinal();
        assert_eq!(tok.lexeme(), "14TH");
        assert_eq!(tok.kind(), LexKind::Ordinal);
    }

    #[test]
    fn to_numeric_strips_suffix() {
        let mut tok = token("21ST", LexKind::Ordinal);
        tok.to_numeric();
        assert_eq!(tok.lexeme(), "21");
        assert_eq!(tok.kind(), LexKind::Num);
    }

    #[test]
    fn to_ordinal_uses_last_digit() {
        let suffixed = |digits: &str| {
            let mut tok = token(digits, LexKind::Num);
            tok.to_ordinal();
            tok.lexeme().to_string()
        };
        assert_eq!(suffixed("1"), "1ST");
        assert_eq!(suffixed("22"), "22ND");
        assert_eq!(suffixed("103"), "103RD");
        assert_eq!(suffixed("4"), "4TH");
        assert_eq!(suffixed("20"), "20TH");
    }

    #[test]
    fn to_ordinal_keeps_teen_suffix_from_last_digit() {
        // 11, 12 and 13 take ST/ND/RD rather than TH.
        for (digits, expected) in [("11", "11ST"), ("12", "12ND"), ("13", "13RD")] {
            let mut tok = token(digits, LexKind::Num);
            tok.to_ordinal();
            assert_eq!(tok.lexeme(), expected);
        }
    }

    #[test]
    fn lexicon_queries() {
        assert!(token("NE", LexKind::TwoChar).is_normalized_directional());
        assert!(!token("NORTH", LexKind::Alpha).is_normalized_directional());
        assert!(token("NORTH", LexKind::Alpha).is_directional());
        assert!(token("STE", LexKind::Alpha).is_unit());
        assert!(token("TRAILS", LexKind::Alpha).is_usps_abbr());
    }
}
