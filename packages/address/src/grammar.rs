//! The fixed-shape rule grammar that assigns postal roles to a token list.
//!
//! Each rule accepts exactly one token count and a per-position set of
//! token shapes, plus lexicon checks or literal words. Rules are tried in
//! [`RULES`] order and the first match wins, so more constrained shapes sit
//! ahead of the generic ones: the `FOURTH PLAIN` family comes before
//! `HOUSE STREET TYPE`, and rules led by a house number come before the
//! house-less ones.

use crate::lex::LexKind;
use crate::parsed::ParsedAddress;
use crate::token::AddressToken;

use self::Shape::{Alpha, Any, Dir, Num, NumOrAlpha, NumOrMixed, Ordinalish, Street, TwoChar,
    TwoOrMixed, Type};

/// Token shapes accepted at one rule position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Any,
    Num,
    Alpha,
    TwoChar,
    /// One or two letters, as directionals are written.
    Dir,
    /// A word or two letters, as street types are written.
    Type,
    /// A word, number, ordinal or single letter.
    Street,
    /// A word or numeric ordinal.
    Ordinalish,
    NumOrAlpha,
    NumOrMixed,
    TwoOrMixed,
}

impl Shape {
    const fn accepts(self, kind: LexKind) -> bool {
        match self {
            Self::Any => true,
            Self::Num => matches!(kind, LexKind::Num),
            Self::Alpha => matches!(kind, LexKind::Alpha),
            Self::TwoChar => matches!(kind, LexKind::TwoChar),
            Self::Dir => matches!(kind, LexKind::OneChar | LexKind::TwoChar),
            Self::Type => matches!(kind, LexKind::Alpha | LexKind::TwoChar),
            Self::Street => matches!(
                kind,
                LexKind::Alpha | LexKind::Num | LexKind::Ordinal | LexKind::OneChar
            ),
            Self::Ordinalish => matches!(kind, LexKind::Alpha | LexKind::Ordinal),
            Self::NumOrAlpha => matches!(kind, LexKind::Num | LexKind::Alpha),
            Self::NumOrMixed => matches!(kind, LexKind::Num | LexKind::Alphanumeric),
            Self::TwoOrMixed => matches!(kind, LexKind::TwoChar | LexKind::Alphanumeric),
        }
    }
}

/// Returns `true` if `tokens` has exactly one token per shape and every
/// token fits its shape.
fn fits(tokens: &[AddressToken], shapes: &[Shape]) -> bool {
    tokens.len() == shapes.len()
        && tokens
            .iter()
            .zip(shapes)
            .all(|(token, shape)| shape.accepts(token.kind()))
}

fn is_word(token: &AddressToken, word: &str) -> bool {
    token.lexeme() == word
}

fn is_old(token: &AddressToken) -> bool {
    is_word(token, "OLD")
}

fn is_saint(token: &AddressToken) -> bool {
    matches!(token.lexeme(), "ST" | "SAINT")
}

fn is_highway(token: &AddressToken) -> bool {
    matches!(token.lexeme(), "USHY" | "STHY" | "HWY" | "HIGHWAY")
}

fn is_ordinal(token: &AddressToken) -> bool {
    token.is_ordinal_word() || token.kind() == LexKind::Ordinal
}

/// `4TH` or `FOURTH` followed by `PLAIN`.
fn is_fourth_plain(ordinal: &AddressToken, plain: &AddressToken) -> bool {
    is_ordinal(ordinal) && is_word(plain, "PLAIN")
}

/// Joins an ordinal and `PLAIN` into one street name with the ordinal
/// written out, so `4TH PLAIN` and `FOURTH PLAIN` compare equal.
fn fourth_plain(ordinal: &AddressToken, plain: &AddressToken) -> AddressToken {
    let mut street = ordinal.clone();
    street.spell_ordinal();
    street.append(plain);
    street
}

/// `ST` in front of a name is read as `SAINT`.
fn saint(token: &AddressToken) -> AddressToken {
    let mut saint = token.clone();
    if is_word(&saint, "ST") {
        saint.set_lexeme("SAINT");
    }
    saint
}

fn parsed() -> ParsedAddress {
    ParsedAddress::default()
}

/// A grammar rule: a full match yields the assigned components.
pub type Rule = fn(&[AddressToken]) -> Option<ParsedAddress>;

/// Every rule, in priority order.
pub const RULES: &[(&str, Rule)] = &[
    ("house_dir_fourth_plain_type", house_dir_fourth_plain_type),
    ("house_dir_fourth_plain", house_dir_fourth_plain),
    ("house_fourth_plain_type", house_fourth_plain_type),
    ("house_fourth_plain", house_fourth_plain),
    ("street_only", street_only),
    ("house_street", house_street),
    ("house_street_type", house_street_type),
    ("dir_house_street_type", dir_house_street_type),
    ("house_street_type_dir", house_street_type_dir),
    ("house_street_prefix_type", house_street_prefix_type),
    ("house_street_prefix_type_dir", house_street_prefix_type_dir),
    ("house_qualifier_prefix_street_tail", house_qualifier_prefix_street_tail),
    ("house_qualifier_prefix_street", house_qualifier_prefix_street),
    ("dir_house_type_street", dir_house_type_street),
    ("house_type_street_dir", house_type_street_dir),
    ("dir_house_street_type_dir", dir_house_street_type_dir),
    ("house_dir_type_street_dir", house_dir_type_street_dir),
    ("house_dir_street_type", house_dir_street_type),
    ("house_dir_street_dir", house_dir_street_dir),
    ("house_letters_type", house_letters_type),
    ("house_letters_type_dir", house_letters_type_dir),
    ("house_dir_street", house_dir_street),
    ("house_type_street", house_type_street),
    ("house_street_dir", house_street_dir),
    ("house_type_street_kp_dir", house_type_street_kp_dir),
    ("house_qualifier_prefix_street_dir_type", house_qualifier_prefix_street_dir_type),
    ("house_old_street_dir", house_old_street_dir),
    ("house_dir_two_letter_street_type", house_dir_two_letter_street_type),
    ("house_type_two_letter_street_dir", house_type_two_letter_street_dir),
    ("house_old_street_type", house_old_street_type),
    ("house_dir_saint_two_words_type", house_dir_saint_two_words_type),
    ("house_dir_saint_word_type", house_dir_saint_word_type),
    ("house_dir_saint_word", house_dir_saint_word),
    ("house_saint_word", house_saint_word),
    ("house_highway_number", house_highway_number),
    ("house_dir_hc_number", house_dir_hc_number),
    ("house_dir_hc_number_dir", house_dir_hc_number_dir),
    ("po_box", po_box),
    ("house_dir_old_two_words_highway", house_dir_old_two_words_highway),
    ("house_old_two_words_highway", house_old_two_words_highway),
    ("dir_fourth_plain", dir_fourth_plain),
    ("dir_fourth_plain_type", dir_fourth_plain_type),
    ("fourth_plain", fourth_plain_only),
    ("fourth_plain_type", fourth_plain_type),
    ("word_type", word_type),
    ("street_type", street_type),
    ("dir_street_type", dir_street_type),
    ("street_type_dir", street_type_dir),
    ("street_prefix_type", street_prefix_type),
    ("street_prefix_type_dir", street_prefix_type_dir),
    ("qualifier_prefix_street_tail", qualifier_prefix_street_tail),
    ("qualifier_prefix_street", qualifier_prefix_street),
    ("dir_type_street", dir_type_street),
    ("type_street_dir", type_street_dir),
    ("dir_street_type_dir", dir_street_type_dir),
    ("dir_type_street_dir", dir_type_street_dir),
    ("dir_street_dir", dir_street_dir),
    ("letters_type", letters_type),
    ("letters_type_dir", letters_type_dir),
    ("dir_street", dir_street),
    ("type_street", type_street),
    ("street_dir", street_dir),
    ("type_street_kp_dir", type_street_kp_dir),
    ("qualifier_prefix_street_dir_type", qualifier_prefix_street_dir_type),
    ("old_street_dir", old_street_dir),
    ("dir_two_letter_street_type", dir_two_letter_street_type),
    ("type_two_letter_street_dir", type_two_letter_street_dir),
    ("old_street_type", old_street_type),
    ("dir_saint_two_words_type", dir_saint_two_words_type),
    ("dir_saint_word_type", dir_saint_word_type),
    ("highway_number", highway_number),
    ("dir_hc_number", dir_hc_number),
    ("dir_hc_number_dir", dir_hc_number_dir),
    ("po_box_street", po_box_street),
    ("dir_old_two_words_highway", dir_old_two_words_highway),
    ("old_two_words_highway", old_two_words_highway),
];

/// Tries every rule in priority order and returns the first match along
/// with the rule's name.
#[must_use]
pub fn match_rule(tokens: &[AddressToken]) -> Option<(&'static str, ParsedAddress)> {
    RULES
        .iter()
        .find_map(|(name, rule)| rule(tokens).map(|parsed| (*name, parsed)))
}

/// Tries every rule in priority order.
#[must_use]
pub fn apply(tokens: &[AddressToken]) -> Option<ParsedAddress> {
    let (name, parsed) = match_rule(tokens)?;
    log::debug!("apply: matched rule {name}");
    Some(parsed)
}

// HOUSE PREDIR ORDINAL PLAIN TYPE
fn house_dir_fourth_plain_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Dir, Ordinalish, Type, Type])
        && t[1].is_directional()
        && t[4].is_road_type()
        && is_fourth_plain(&t[2], &t[3]))
    .then(|| {
        parsed()
            .with_house(&t[0])
            .with_prefix_dir(&t[1])
            .with_street(&fourth_plain(&t[2], &t[3]))
            .with_street_type(&t[4])
    })
}

// HOUSE PREDIR ORDINAL PLAIN
fn house_dir_fourth_plain(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Dir, Ordinalish, Type])
        && t[1].is_directional()
        && is_fourth_plain(&t[2], &t[3]))
    .then(|| {
        parsed()
            .with_house(&t[0])
            .with_prefix_dir(&t[1])
            .with_street(&fourth_plain(&t[2], &t[3]))
    })
}

// HOUSE ORDINAL PLAIN TYPE
fn house_fourth_plain_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Ordinalish, Type, Type])
        && t[3].is_road_type()
        && is_fourth_plain(&t[1], &t[2]))
    .then(|| {
        parsed()
            .with_house(&t[0])
            .with_street(&fourth_plain(&t[1], &t[2]))
            .with_street_type(&t[3])
    })
}

// HOUSE ORDINAL PLAIN
fn house_fourth_plain(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Ordinalish, Type]) && is_fourth_plain(&t[1], &t[2])).then(|| {
        parsed()
            .with_house(&t[0])
            .with_street(&fourth_plain(&t[1], &t[2]))
    })
}

// STREET
fn street_only(t: &[AddressToken]) -> Option<ParsedAddress> {
    match t {
        [street] => Some(parsed().with_street(street)),
        _ => None,
    }
}

// HOUSE STREET
fn house_street(t: &[AddressToken]) -> Option<ParsedAddress> {
    fits(t, &[Num, Street]).then(|| parsed().with_house(&t[0]).with_street(&t[1]))
}

// HOUSE STREET TYPE
fn house_street_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Street, Type]) && t[2].is_road_type()).then(|| {
        parsed()
            .with_house(&t[0])
            .with_street(&t[1])
            .with_street_type(&t[2])
    })
}

// PREDIR HOUSE STREET TYPE
fn dir_house_street_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Dir, Num, Street, Type]) && t[0].is_directional() && t[3].is_road_type()).then(
        || {
            parsed()
                .with_prefix_dir(&t[0])
                .with_house(&t[1])
                .with_street(&t[2])
                .with_street_type(&t[3])
        },
    )
}

// HOUSE STREET TYPE SUFDIR
fn house_street_type_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Street, Type, Any]) && t[2].is_road_type() && t[3].is_directional()).then(
        || {
            parsed()
                .with_house(&t[0])
                .with_street(&t[1])
                .with_street_type(&t[2])
                .with_suffix_dir(&t[3])
        },
    )
}

// HOUSE STREET STREETPRE TYPE
fn house_street_prefix_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Street, Alpha, Type])
        && t[3].is_road_type()
        && t[2].is_usps_abbr()
        && !t[1].is_directional())
    .then(|| {
        parsed()
            .with_house(&t[0])
            .with_street_prefix(&t[2])
            .with_street(&t[1])
            .with_street_type(&t[3])
    })
}

// HOUSE STREET STREETPRE TYPE SUFDIR
fn house_street_prefix_type_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Street, Alpha, Type, Dir]) && t[3].is_road_type() && t[2].is_usps_abbr())
        .then(|| {
            parsed()
                .with_house(&t[0])
                .with_street(&t[1])
                .with_street_prefix(&t[2])
                .with_street_type(&t[3])
                .with_suffix_dir(&t[4])
        })
}

/// Assigns a trailing token that may be either a suffix directional or a
/// street type.
fn with_dir_or_type(parsed: ParsedAddress, tail: &AddressToken) -> ParsedAddress {
    if tail.is_directional() {
        parsed.with_suffix_dir(tail)
    } else if tail.is_road_type() {
        parsed.with_street_type(tail)
    } else {
        parsed
    }
}

fn is_qualifier(token: &AddressToken) -> bool {
    token.is_usps_abbr() || is_old(token)
}

fn is_prefix(token: &AddressToken) -> bool {
    token.is_road_type() || is_word(token, "STATE")
}

// HOUSE QUALIFIER STREETPRE STREET (SUFDIR | TYPE)
fn house_qualifier_prefix_street_tail(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Alpha, Alpha, Street, Any])
        && (t[4].is_directional() || t[4].is_road_type())
        && is_prefix(&t[2])
        && is_qualifier(&t[1]))
    .then(|| {
        let parsed = parsed()
            .with_house(&t[0])
            .with_street_qualifier(&t[1])
            .with_street_prefix(&t[2])
            .with_street(&t[3]);
        with_dir_or_type(parsed, &t[4])
    })
}

// HOUSE QUALIFIER STREETPRE STREET
fn house_qualifier_prefix_street(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Alpha, Alpha, Street]) && t[2].is_usps_abbr() && !t[3].is_road_type())
        .then(|| {
            parsed()
                .with_house(&t[0])
                .with_street_qualifier(&t[1])
                .with_street_prefix(&t[2])
                .with_street(&t[3])
        })
}

// PREDIR HOUSE TYPE STREET
fn dir_house_type_street(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Dir, Num, Type, Street]) && t[2].is_road_type() && t[0].is_directional()).then(
        || {
            parsed()
                .with_prefix_dir(&t[0])
                .with_house(&t[1])
                .with_street(&t[3])
                .with_street_type(&t[2])
        },
    )
}

// HOUSE TYPE STREET SUFDIR
fn house_type_street_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Type, Street, Any]) && t[3].is_directional() && t[1].is_road_type()).then(
        || {
            parsed()
                .with_house(&t[0])
                .with_street_type(&t[1])
                .with_street(&t[2])
                .with_suffix_dir(&t[3])
        },
    )
}

// PREDIR HOUSE STREET TYPE SUFDIR
fn dir_house_street_type_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Dir, Num, Street, Type, Any])
        && t[4].is_directional()
        && t[0].is_directional()
        && t[3].is_road_type())
    .then(|| {
        parsed()
            .with_prefix_dir(&t[0])
            .with_house(&t[1])
            .with_street_type(&t[3])
            .with_street(&t[2])
            .with_suffix_dir(&t[4])
    })
}

// HOUSE PREDIR TYPE STREET SUFDIR
fn house_dir_type_street_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Dir, Type, Street, Any])
        && t[4].is_directional()
        && t[1].is_directional()
        && t[2].is_road_type())
    .then(|| {
        parsed()
            .with_house(&t[0])
            .with_prefix_dir(&t[1])
            .with_street_type(&t[2])
            .with_street(&t[3])
            .with_suffix_dir(&t[4])
    })
}

// HOUSE PREDIR STREET TYPE
fn house_dir_street_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Dir, Street, Type]) && t[1].is_directional() && t[3].is_road_type()).then(
        || {
            parsed()
                .with_house(&t[0])
                .with_prefix_dir(&t[1])
                .with_street(&t[2])
                .with_street_type(&t[3])
        },
    )
}

// HOUSE PREDIR STREET SUFDIR
fn house_dir_street_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Dir, Street, Any]) && t[3].is_directional() && t[1].is_directional()).then(
        || {
            parsed()
                .with_house(&t[0])
                .with_prefix_dir(&t[1])
                .with_street(&t[2])
                .with_suffix_dir(&t[3])
        },
    )
}

// HOUSE STREET:letters TYPE, where the letters are not a directional
fn house_letters_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Dir, Type]) && t[2].is_road_type() && !t[1].is_directional()).then(|| {
        parsed()
            .with_house(&t[0])
            .with_street(&t[1])
            .with_street_type(&t[2])
    })
}

// HOUSE STREET:letters TYPE SUFDIR
fn house_letters_type_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Dir, Type, Any])
        && t[3].is_directional()
        && t[2].is_road_type()
        && !t[1].is_directional())
    .then(|| {
        parsed()
            .with_house(&t[0])
            .with_street(&t[1])
            .with_street_type(&t[2])
            .with_suffix_dir(&t[3])
    })
}

// HOUSE PREDIR STREET
fn house_dir_street(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Dir, Street]) && t[1].is_directional()).then(|| {
        parsed()
            .with_house(&t[0])
            .with_prefix_dir(&t[1])
            .with_street(&t[2])
    })
}

// HOUSE TYPE STREET
fn house_type_street(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Type, Street]) && t[1].is_road_type()).then(|| {
        parsed()
            .with_house(&t[0])
            .with_street_type(&t[1])
            .with_street(&t[2])
    })
}

// HOUSE STREET SUFDIR
fn house_street_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Street, Dir]) && t[2].is_directional()).then(|| {
        parsed()
            .with_house(&t[0])
            .with_street(&t[1])
            .with_suffix_dir(&t[2])
    })
}

// HOUSE TYPE STREET KP SUFDIR (Key Peninsula addresses)
fn house_type_street_kp_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Type, Street, TwoChar, Any])
        && t[4].is_directional()
        && is_word(&t[3], "KP"))
    .then(|| {
        parsed()
            .with_house(&t[0])
            .with_street_type(&t[1])
            .with_street(&t[2])
            .with_street_qualifier(&t[3])
            .with_suffix_dir(&t[4])
    })
}

// HOUSE QUALIFIER STREETPRE STREET SUFDIR TYPE
fn house_qualifier_prefix_street_dir_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Alpha, Alpha, Street, Dir, Type])
        && t[2].is_road_type()
        && t[5].is_road_type()
        && t[4].is_directional()
        && is_qualifier(&t[1]))
    .then(|| {
        parsed()
            .with_house(&t[0])
            .with_street_qualifier(&t[1])
            .with_street_prefix(&t[2])
            .with_street(&t[3])
            .with_suffix_dir(&t[4])
            .with_street_type(&t[5])
    })
}

// HOUSE OLD STREET SUFDIR
fn house_old_street_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Alpha, NumOrAlpha, Any]) && t[3].is_directional() && is_old(&t[1])).then(
        || {
            parsed()
                .with_house(&t[0])
                .with_street_qualifier(&t[1])
                .with_street(&t[2])
                .with_suffix_dir(&t[3])
        },
    )
}

// HOUSE PREDIR STREET:two letters TYPE
fn house_dir_two_letter_street_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Dir, TwoChar, Type]) && t[1].is_directional() && t[3].is_road_type()).then(
        || {
            parsed()
                .with_house(&t[0])
                .with_prefix_dir(&t[1])
                .with_street(&t[2])
                .with_street_type(&t[3])
        },
    )
}

// HOUSE TYPE STREET:two characters SUFDIR
fn house_type_two_letter_street_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Type, TwoOrMixed, Any])
        && t[3].is_directional()
        && t[1].is_road_type()
        && t[2].char_len() == 2)
    .then(|| {
        parsed()
            .with_house(&t[0])
            .with_street_type(&t[1])
            .with_street(&t[2])
            .with_suffix_dir(&t[3])
    })
}

// HOUSE OLD STREET TYPE
fn house_old_street_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Alpha, NumOrAlpha, Type]) && t[3].is_road_type() && is_old(&t[1])).then(
        || {
            parsed()
                .with_house(&t[0])
                .with_street_qualifier(&t[1])
                .with_street(&t[2])
                .with_street_type(&t[3])
        },
    )
}

// HOUSE PREDIR SAINT WORD WORD TYPE
fn house_dir_saint_two_words_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Any, Any, Alpha, Alpha, Type])
        && t[1].is_directional()
        && is_saint(&t[2])
        && t[5].is_road_type())
    .then(|| {
        parsed()
            .with_house(&t[0])
            .with_prefix_dir(&t[1])
            .with_street_words(&saint(&t[2]), &[&t[3], &t[4]])
            .with_street_type(&t[5])
    })
}

// HOUSE PREDIR SAINT WORD TYPE
fn house_dir_saint_word_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Any, Any, Alpha, Type])
        && t[1].is_directional()
        && is_saint(&t[2])
        && t[4].is_road_type())
    .then(|| {
        parsed()
            .with_house(&t[0])
            .with_prefix_dir(&t[1])
            .with_street_words(&saint(&t[2]), &[&t[3]])
            .with_street_type(&t[4])
    })
}

// HOUSE PREDIR SAINT WORD, where the word is not a street type
fn house_dir_saint_word(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Any, Any, Alpha])
        && t[1].is_directional()
        && is_saint(&t[2])
        && !t[3].is_road_type())
    .then(|| {
        parsed()
            .with_house(&t[0])
            .with_prefix_dir(&t[1])
            .with_street_words(&saint(&t[2]), &[&t[3]])
    })
}

// HOUSE SAINT WORD
fn house_saint_word(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Any, Alpha])
        && is_saint(&t[1])
        && !(t[2].is_road_type() && !is_word(&t[1], "ST")))
    .then(|| {
        parsed()
            .with_house(&t[0])
            .with_street_words(&saint(&t[1]), &[&t[2]])
    })
}

// HOUSE HIGHWAY NUMBER
fn house_highway_number(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Any, NumOrMixed]) && is_highway(&t[1])).then(|| {
        parsed()
            .with_house(&t[0])
            .with_street_prefix(&t[1])
            .with_street(&t[2])
    })
}

// HOUSE PREDIR HC NUMBER (highway contract routes)
fn house_dir_hc_number(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Any, Any, Num]) && t[1].is_directional() && is_word(&t[2], "HC")).then(
        || {
            parsed()
                .with_house(&t[0])
                .with_prefix_dir(&t[1])
                .with_street_prefix(&t[2])
                .with_street(&t[3])
        },
    )
}

// HOUSE PREDIR HC NUMBER SUFDIR
fn house_dir_hc_number_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Any, Any, Num, Any])
        && t[1].is_directional()
        && is_word(&t[2], "HC")
        && t[4].is_directional())
    .then(|| {
        parsed()
            .with_house(&t[0])
            .with_prefix_dir(&t[1])
            .with_street_prefix(&t[2])
            .with_street(&t[3])
            .with_suffix_dir(&t[4])
    })
}

// PO BOX n, POBOX n, BOX n, POB n, P O BOX n
fn po_box(t: &[AddressToken]) -> Option<ParsedAddress> {
    let number = match t {
        [po, bx, number] if is_word(po, "PO") && is_word(bx, "BOX") => number,
        [bx, number] if matches!(bx.lexeme(), "POBOX" | "BOX" | "POB") => number,
        [p, o, bx, number] if is_word(p, "P") && is_word(o, "O") && is_word(bx, "BOX") => {
            number
        }
        _ => return None,
    };

    let mut street = t[0].clone();
    street.set_lexeme("PO BOX");
    let parsed = parsed().with_street(&street);

    Some(if number.kind() == LexKind::Num {
        parsed.with_house(number)
    } else {
        parsed
    })
}

// HOUSE PREDIR OLD WORD WORD HIGHWAY
fn house_dir_old_two_words_highway(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Any, Alpha, Alpha, Alpha, Any])
        && t[1].is_directional()
        && is_highway(&t[5])
        && is_old(&t[2]))
    .then(|| {
        parsed()
            .with_house(&t[0])
            .with_prefix_dir(&t[1])
            .with_street_qualifier(&t[2])
            .with_street_words(&t[3], &[&t[4]])
            .with_street_type(&t[5])
    })
}

// HOUSE OLD WORD WORD HIGHWAY
fn house_old_two_words_highway(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Num, Alpha, Alpha, Alpha, Any]) && is_highway(&t[4]) && is_old(&t[1])).then(
        || {
            parsed()
                .with_house(&t[0])
                .with_street_qualifier(&t[1])
                .with_street_words(&t[2], &[&t[3]])
                .with_street_type(&t[4])
        },
    )
}

// PREDIR ORDINAL PLAIN
fn dir_fourth_plain(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Dir, Ordinalish, Type]) && t[0].is_directional() && is_fourth_plain(&t[1], &t[2]))
        .then(|| {
            parsed()
                .with_prefix_dir(&t[0])
                .with_street(&fourth_plain(&t[1], &t[2]))
        })
}

// PREDIR ORDINAL PLAIN TYPE
fn dir_fourth_plain_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Dir, Ordinalish, Type, Type])
        && t[0].is_directional()
        && t[3].is_road_type()
        && is_fourth_plain(&t[1], &t[2]))
    .then(|| {
        parsed()
            .with_prefix_dir(&t[0])
            .with_street(&fourth_plain(&t[1], &t[2]))
            .with_street_type(&t[3])
    })
}

// ORDINAL PLAIN
fn fourth_plain_only(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Ordinalish, Type]) && is_fourth_plain(&t[0], &t[1]))
        .then(|| parsed().with_street(&fourth_plain(&t[0], &t[1])))
}

// ORDINAL PLAIN TYPE
fn fourth_plain_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Ordinalish, Type, Type]) && t[2].is_road_type() && is_fourth_plain(&t[0], &t[1]))
        .then(|| {
            parsed()
                .with_street(&fourth_plain(&t[0], &t[1]))
                .with_street_type(&t[2])
        })
}

// STREET:word TYPE
fn word_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Type, Street]) && t[1].is_road_type())
        .then(|| parsed().with_street(&t[0]).with_street_type(&t[1]))
}

// STREET TYPE
fn street_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Street, Type]) && t[1].is_road_type())
        .then(|| parsed().with_street(&t[0]).with_street_type(&t[1]))
}

// PREDIR STREET TYPE
fn dir_street_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Dir, Street, Type]) && t[2].is_road_type() && t[0].is_directional()).then(|| {
        parsed()
            .with_prefix_dir(&t[0])
            .with_street(&t[1])
            .with_street_type(&t[2])
    })
}

// STREET TYPE SUFDIR
fn street_type_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Street, Type, Dir]) && t[1].is_road_type() && t[2].is_directional()).then(|| {
        parsed()
            .with_street(&t[0])
            .with_street_type(&t[1])
            .with_suffix_dir(&t[2])
    })
}

// STREET STREETPRE TYPE
fn street_prefix_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Street, Alpha, Type])
        && t[2].is_road_type()
        && t[1].is_usps_abbr()
        && !t[0].is_directional())
    .then(|| {
        parsed()
            .with_street_prefix(&t[1])
            .with_street(&t[0])
            .with_street_type(&t[2])
    })
}

// STREET STREETPRE TYPE SUFDIR
fn street_prefix_type_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Street, Alpha, Type, Dir]) && t[2].is_road_type() && t[1].is_usps_abbr()).then(
        || {
            parsed()
                .with_street(&t[0])
                .with_street_prefix(&t[1])
                .with_street_type(&t[2])
                .with_suffix_dir(&t[3])
        },
    )
}

// QUALIFIER STREETPRE STREET (SUFDIR | TYPE)
fn qualifier_prefix_street_tail(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Alpha, Alpha, Street, Dir])
        && is_prefix(&t[1])
        && is_qualifier(&t[0])
        && (t[3].is_directional() || t[3].is_road_type()))
    .then(|| {
        let parsed = parsed()
            .with_street_qualifier(&t[0])
            .with_street_prefix(&t[1])
            .with_street(&t[2]);
        with_dir_or_type(parsed, &t[3])
    })
}

// QUALIFIER STREETPRE STREET
fn qualifier_prefix_street(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Alpha, Alpha, Street]) && t[1].is_usps_abbr() && !t[2].is_road_type()).then(
        || {
            parsed()
                .with_street_qualifier(&t[0])
                .with_street_prefix(&t[1])
                .with_street(&t[2])
        },
    )
}

// PREDIR TYPE STREET
fn dir_type_street(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Dir, Type, Street]) && t[1].is_road_type() && t[0].is_directional()).then(|| {
        parsed()
            .with_prefix_dir(&t[0])
            .with_street(&t[2])
            .with_street_type(&t[1])
    })
}

// TYPE STREET SUFDIR
fn type_street_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Type, Street, Dir]) && t[0].is_road_type() && t[2].is_directional()).then(|| {
        parsed()
            .with_street_type(&t[0])
            .with_street(&t[1])
            .with_suffix_dir(&t[2])
    })
}

// PREDIR STREET TYPE SUFDIR
fn dir_street_type_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Dir, Street, Type, Dir])
        && t[0].is_directional()
        && t[2].is_road_type()
        && t[3].is_directional())
    .then(|| {
        parsed()
            .with_prefix_dir(&t[0])
            .with_street_type(&t[2])
            .with_street(&t[1])
            .with_suffix_dir(&t[3])
    })
}

// PREDIR TYPE STREET SUFDIR
fn dir_type_street_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Dir, Type, Street, Dir])
        && t[0].is_directional()
        && t[1].is_road_type()
        && t[3].is_directional())
    .then(|| {
        parsed()
            .with_prefix_dir(&t[0])
            .with_street_type(&t[1])
            .with_street(&t[2])
            .with_suffix_dir(&t[3])
    })
}

// PREDIR STREET SUFDIR
fn dir_street_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Dir, Street, Dir]) && t[0].is_directional() && t[2].is_directional()).then(|| {
        parsed()
            .with_prefix_dir(&t[0])
            .with_street(&t[1])
            .with_suffix_dir(&t[2])
    })
}

// STREET:letters TYPE
fn letters_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Dir, Type]) && t[1].is_road_type() && !t[0].is_directional())
        .then(|| parsed().with_street(&t[0]).with_street_type(&t[1]))
}

// STREET:letters TYPE SUFDIR
fn letters_type_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Dir, Type, Dir])
        && t[2].is_directional()
        && t[1].is_road_type()
        && !t[0].is_directional())
    .then(|| {
        parsed()
            .with_street(&t[0])
            .with_street_type(&t[1])
            .with_suffix_dir(&t[2])
    })
}

// PREDIR STREET
fn dir_street(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Dir, Street]) && t[0].is_directional())
        .then(|| parsed().with_prefix_dir(&t[0]).with_street(&t[1]))
}

// TYPE STREET
fn type_street(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Type, Street]) && t[0].is_road_type())
        .then(|| parsed().with_street_type(&t[0]).with_street(&t[1]))
}

// STREET SUFDIR
fn street_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Street, Dir]) && t[1].is_directional())
        .then(|| parsed().with_street(&t[0]).with_suffix_dir(&t[1]))
}

// TYPE STREET KP SUFDIR
fn type_street_kp_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Type, Street, TwoChar, Dir]) && t[3].is_directional() && is_word(&t[2], "KP"))
        .then(|| {
            parsed()
                .with_street_type(&t[0])
                .with_street(&t[1])
                .with_street_qualifier(&t[2])
                .with_suffix_dir(&t[3])
        })
}

// QUALIFIER STREETPRE STREET SUFDIR TYPE
fn qualifier_prefix_street_dir_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Alpha, Alpha, Street, Dir, Type])
        && t[1].is_road_type()
        && t[4].is_road_type()
        && t[3].is_directional()
        && is_qualifier(&t[0]))
    .then(|| {
        parsed()
            .with_street_qualifier(&t[0])
            .with_street_prefix(&t[1])
            .with_street(&t[2])
            .with_suffix_dir(&t[3])
            .with_street_type(&t[4])
    })
}

// OLD STREET SUFDIR
fn old_street_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Alpha, NumOrAlpha, Dir]) && t[2].is_directional() && is_old(&t[0])).then(|| {
        parsed()
            .with_street_qualifier(&t[0])
            .with_street(&t[1])
            .with_suffix_dir(&t[2])
    })
}

// PREDIR STREET:two letters TYPE
fn dir_two_letter_street_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Dir, TwoChar, Type]) && t[0].is_directional() && t[2].is_road_type()).then(|| {
        parsed()
            .with_prefix_dir(&t[0])
            .with_street(&t[1])
            .with_street_type(&t[2])
    })
}

// TYPE STREET:two characters SUFDIR
fn type_two_letter_street_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Type, TwoOrMixed, Dir])
        && t[2].is_directional()
        && t[0].is_road_type()
        && t[1].char_len() == 2)
    .then(|| {
        parsed()
            .with_street_type(&t[0])
            .with_street(&t[1])
            .with_suffix_dir(&t[2])
    })
}

// OLD STREET TYPE
fn old_street_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Alpha, NumOrAlpha, Type]) && t[2].is_road_type() && is_old(&t[0])).then(|| {
        parsed()
            .with_street_qualifier(&t[0])
            .with_street(&t[1])
            .with_street_type(&t[2])
    })
}

// PREDIR SAINT WORD WORD TYPE
fn dir_saint_two_words_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Any, Any, Alpha, Alpha, Type])
        && t[0].is_directional()
        && is_saint(&t[1])
        && t[4].is_road_type())
    .then(|| {
        parsed()
            .with_prefix_dir(&t[0])
            .with_street_words(&saint(&t[1]), &[&t[2], &t[3]])
            .with_street_type(&t[4])
    })
}

// PREDIR SAINT WORD TYPE
fn dir_saint_word_type(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Any, Any, Alpha, Type])
        && t[0].is_directional()
        && is_saint(&t[1])
        && t[3].is_road_type())
    .then(|| {
        parsed()
            .with_prefix_dir(&t[0])
            .with_street_words(&saint(&t[1]), &[&t[2]])
            .with_street_type(&t[3])
    })
}

// HIGHWAY NUMBER
fn highway_number(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Any, NumOrMixed]) && is_highway(&t[0]))
        .then(|| parsed().with_street_prefix(&t[0]).with_street(&t[1]))
}

// PREDIR HC NUMBER
fn dir_hc_number(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Any, Any, Num]) && t[0].is_directional() && is_word(&t[1], "HC")).then(|| {
        parsed()
            .with_prefix_dir(&t[0])
            .with_street_prefix(&t[1])
            .with_street(&t[2])
    })
}

// PREDIR HC NUMBER SUFDIR
fn dir_hc_number_dir(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Any, Any, Num, Any])
        && t[0].is_directional()
        && is_word(&t[1], "HC")
        && t[3].is_directional())
    .then(|| {
        parsed()
            .with_prefix_dir(&t[0])
            .with_street_prefix(&t[1])
            .with_street(&t[2])
            .with_suffix_dir(&t[3])
    })
}

// PO BOX without a number
fn po_box_street(t: &[AddressToken]) -> Option<ParsedAddress> {
    match t {
        [po, bx] if is_word(po, "PO") && is_word(bx, "BOX") => {
            Some(parsed().with_street_words(po, &[bx]))
        }
        _ => None,
    }
}

// PREDIR OLD WORD WORD HIGHWAY
fn dir_old_two_words_highway(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Any, Alpha, Alpha, Alpha, Any])
        && t[0].is_directional()
        && is_highway(&t[4])
        && is_old(&t[1]))
    .then(|| {
        parsed()
            .with_prefix_dir(&t[0])
            .with_street_qualifier(&t[1])
            .with_street_words(&t[2], &[&t[3]])
            .with_street_type(&t[4])
    })
}

// OLD WORD WORD HIGHWAY
fn old_two_words_highway(t: &[AddressToken]) -> Option<ParsedAddress> {
    (fits(t, &[Alpha, Alpha, Alpha, Any]) && is_highway(&t[3]) && is_old(&t[0])).then(|| {
        parsed()
            .with_street_qualifier(&t[0])
            .with_street_words(&t[1], &[&t[2]])
            .with_street_type(&t[3])
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::lex::scan;

    fn tokens(line: &str) -> Vec<AddressToken> {
        scan(line).into_iter().map(AddressToken::from).collect()
    }

    fn rule_for(line: &str) -> Option<&'static str> {
        match_rule(&tokens(line)).map(|(name, _)| name)
    }

    #[test]
    fn rule_names_are_unique() {
        let names: BTreeSet<_> = RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), RULES.len());
    }

    #[test]
    fn house_street_type_suffix() {
        let (name, parsed) = match_rule(&tokens("6500 LINDERSON WAY SW")).unwrap();
        assert_eq!(name, "house_street_type_dir");
        assert_eq!(parsed.house(), Some("6500"));
        assert_eq!(parsed.street(), Some("LINDERSON"));
        assert_eq!(parsed.street_type(), Some("WAY"));
        assert_eq!(parsed.suffix_dir(), Some("SW"));
    }

    #[test]
    fn fourth_plain_family_beats_generic_shapes() {
        // HOUSE STREET TYPE would also accept this line.
        let (name, parsed) = match_rule(&tokens("123 4TH PLAIN")).unwrap();
        assert_eq!(name, "house_fourth_plain");
        assert_eq!(parsed.street(), Some("FOURTH PLAIN"));
        assert!(parsed.street_type().is_none());

        let parsed = apply(&tokens("4407 W 4TH PLAIN BLVD")).unwrap();
        assert_eq!(parsed.house(), Some("4407"));
        assert_eq!(parsed.prefix_dir(), Some("W"));
        assert_eq!(parsed.street(), Some("FOURTH PLAIN"));
        assert_eq!(parsed.street_type(), Some("BLVD"));
    }

    #[test]
    fn fourth_plain_written_out_or_without_house() {
        assert_eq!(
            apply(&tokens("FOURTH PLAIN BLVD")).unwrap().street(),
            Some("FOURTH PLAIN")
        );
        assert_eq!(
            apply(&tokens("E 4TH PLAIN")).unwrap().street(),
            Some("FOURTH PLAIN")
        );
        assert_eq!(
            apply(&tokens("FOURTH PLAIN")).unwrap().street(),
            Some("FOURTH PLAIN")
        );
    }

    #[test]
    fn single_token_is_street() {
        let parsed = apply(&tokens("FIRST")).unwrap();
        assert_eq!(parsed.street(), Some("1ST"));
        assert_eq!(rule_for("12B"), Some("street_only"));
    }

    #[test]
    fn prefix_directional_with_ordinal_street() {
        let parsed = apply(&tokens("3715 W 10TH AVE")).unwrap();
        assert_eq!(parsed.house(), Some("3715"));
        assert_eq!(parsed.prefix_dir(), Some("W"));
        assert_eq!(parsed.street(), Some("10TH"));
        assert_eq!(parsed.street_type(), Some("AVE"));
    }

    #[test]
    fn qualifier_and_street_prefix() {
        let (name, parsed) = match_rule(&tokens("3715 OLD HIGHWAY 99")).unwrap();
        assert_eq!(name, "house_qualifier_prefix_street");
        assert_eq!(parsed.street_qualifier(), Some("OLD"));
        assert_eq!(parsed.street_prefix(), Some("HIGHWAY"));
        assert_eq!(parsed.street(), Some("99"));
    }

    #[test]
    fn saint_is_spelled_out() {
        let parsed = apply(&tokens("123 N ST HELENS AVE")).unwrap();
        assert_eq!(parsed.prefix_dir(), Some("N"));
        assert_eq!(parsed.street(), Some("SAINT HELENS"));
        assert_eq!(parsed.street_type(), Some("AVE"));
    }

    #[test]
    fn highway_number() {
        // A plain number after a road type reads as HOUSE TYPE STREET first.
        let (name, parsed) = match_rule(&tokens("2100 HWY 101")).unwrap();
        assert_eq!(name, "house_type_street");
        assert_eq!(parsed.street_type(), Some("HWY"));
        assert_eq!(parsed.street(), Some("101"));

        let (name, parsed) = match_rule(&tokens("2100 HWY 101A")).unwrap();
        assert_eq!(name, "house_highway_number");
        assert_eq!(parsed.house(), Some("2100"));
        assert_eq!(parsed.street_prefix(), Some("HWY"));
        assert_eq!(parsed.street(), Some("101A"));
    }

    #[test]
    fn key_peninsula() {
        let parsed = apply(&tokens("1234 RD 5 KP N")).unwrap();
        assert_eq!(parsed.street_type(), Some("RD"));
        assert_eq!(parsed.street(), Some("5"));
        assert_eq!(parsed.street_qualifier(), Some("KP"));
        assert_eq!(parsed.suffix_dir(), Some("N"));
    }

    #[test]
    fn po_box_forms() {
        for line in ["PO BOX 123", "POBOX 123", "BOX 123", "P O BOX 123"] {
            let parsed = apply(&tokens(line)).unwrap();
            assert_eq!(parsed.street(), Some("PO BOX"), "{line}");
            assert_eq!(parsed.house(), Some("123"), "{line}");
        }

        let parsed = apply(&tokens("PO BOX")).unwrap();
        assert_eq!(parsed.street(), Some("PO BOX"));
        assert!(parsed.house().is_none());
    }

    #[test]
    fn street_type_without_house() {
        let parsed = apply(&tokens("LINDERSON WAY")).unwrap();
        assert_eq!(parsed.street(), Some("LINDERSON"));
        assert_eq!(parsed.street_type(), Some("WAY"));
        assert!(parsed.house().is_none());
    }

    #[test]
    fn unmatched_shapes_fall_through() {
        assert!(apply(&tokens("123 MAIN")).is_some());
        assert!(apply(&tokens("SAINT JOHNS")).is_none());
        assert!(apply(&[]).is_none());
    }
}
