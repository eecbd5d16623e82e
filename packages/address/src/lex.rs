//! Lexical scanner for street address lines.
//!
//! The scanner is a small state machine that upper-cases its input, skips
//! periods and commas, and splits on whitespace and `&`. Each token is
//! tagged with a [`LexKind`] describing its shape (one letter, two
//! letters, a word, a number, an ordinal like `4TH`, a fraction like
//! `1/2`, or a mixed run like `12B`).

use strum_macros::{AsRefStr, Display};

/// Shape of a scanned lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LexKind {
    /// A standalone `&`.
    Amp,
    /// A standalone dash.
    Dash,
    /// A single letter, e.g. `N`.
    OneChar,
    /// Two letters, e.g. `NE` or `ST`.
    TwoChar,
    /// A fraction, e.g. `1/2`.
    Fraction,
    /// Three or more letters.
    Alpha,
    /// Mixed letters, digits and punctuation, e.g. `12B` or `#4`.
    Alphanumeric,
    /// Digits only.
    Num,
    /// A numeric ordinal, e.g. `21ST`.
    Ordinal,
}

/// A lexeme and its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexToken {
    /// Upper-cased token text.
    pub lexeme: String,
    /// Token shape.
    pub kind: LexKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Num,
    Alpha1,
    Alpha2,
    Alpha,
    Alphanumeric,
    /// Read `1S`, expecting `T`.
    OrdT,
    /// Read `2R`, `2N` or `3R`, expecting `D`.
    OrdD,
    /// Read a digit and `T`, expecting `H`.
    OrdH,
    OrdEnd,
    Fraction,
}

/// Marks end of input inside the state machine. Literal NULs in the input
/// are mapped to spaces up front so this value is never ambiguous.
const END: char = '\0';

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '&' || ch == END
}

/// Scanner over one address line.
///
/// Iterating yields tokens until the input is exhausted; running out of
/// input is not an error.
#[derive(Debug, Clone)]
pub struct Lexer {
    text: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Creates a scanner over `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let text = text
            .to_uppercase()
            .chars()
            .map(|ch| if ch == END { ' ' } else { ch })
            .collect();
        Self { text, position: 0 }
    }

    const fn is_eof(&self) -> bool {
        self.position >= self.text.len()
    }

    /// Steps back over the character just read, unless it was the end
    /// marker.
    const fn unread(&mut self, ch: char) {
        if ch != END {
            self.position -= 1;
        }
    }

    /// Scans the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<LexToken> {
        if self.is_eof() {
            return None;
        }

        let mut lexeme = String::new();
        let mut state = State::Start;

        loop {
            let ch = if self.is_eof() {
                END
            } else {
                let ch = self.text[self.position];
                self.position += 1;
                if ch == '.' || ch == ',' {
                    continue;
                }
                ch
            };

            let emit = |lexeme: String, kind: LexKind| Some(LexToken { lexeme, kind });

            match state {
                State::Start => {
                    if ch == END {
                        return None;
                    }
                    if ch.is_whitespace() {
                        continue;
                    }
                    lexeme.push(ch);
                    if ch == '&' {
                        return emit(lexeme, LexKind::Amp);
                    }
                    state = if ch == '-' {
                        State::Alphanumeric
                    } else if ch.is_ascii_digit() {
                        State::Num
                    } else {
                        State::Alpha1
                    };
                }
                State::Num => {
                    if is_separator(ch) {
                        self.unread(ch);
                        return emit(lexeme, LexKind::Num);
                    }
                    if !ch.is_ascii_digit() {
                        let last = lexeme.chars().last();
                        let next = match (last, ch) {
                            (Some('1'), 'S') => Some(State::OrdT),
                            (Some('2'), 'R' | 'N') | (Some('3'), 'R') => Some(State::OrdD),
                            (_, 'T') => Some(State::OrdH),
                            (_, '/') => Some(State::Fraction),
                            _ => None,
                        };
                        state = next.unwrap_or(State::Alphanumeric);
                    }
                    lexeme.push(ch);
                }
                State::Fraction => {
                    if !ch.is_ascii_digit() {
                        self.unread(ch);
                        return emit(lexeme, LexKind::Fraction);
                    }
                    lexeme.push(ch);
                }
                State::Alpha1 | State::Alpha2 | State::Alpha => {
                    if is_separator(ch) {
                        self.unread(ch);
                        let kind = match state {
                            State::Alpha1 => LexKind::OneChar,
                            State::Alpha2 => LexKind::TwoChar,
                            _ => LexKind::Alpha,
                        };
                        return emit(lexeme, kind);
                    }
                    lexeme.push(ch);
                    state = match (state, ch.is_alphabetic()) {
                        (_, false) => State::Alphanumeric,
                        (State::Alpha1, true) => State::Alpha2,
                        _ => State::Alpha,
                    };
                }
                State::Alphanumeric => {
                    if is_separator(ch) {
                        self.unread(ch);
                        return emit(lexeme, LexKind::Alphanumeric);
                    }
                    lexeme.push(ch);
                }
                State::OrdT | State::OrdD | State::OrdH => {
                    if is_separator(ch) {
                        self.unread(ch);
                        return emit(lexeme, LexKind::Alphanumeric);
                    }
                    let expected = match state {
                        State::OrdT => 'T',
                        State::OrdD => 'D',
                        _ => 'H',
                    };
                    if ch == expected {
                        lexeme.push(ch);
                        state = State::OrdEnd;
                    } else {
                        self.unread(ch);
                        state = State::Alphanumeric;
                    }
                }
                State::OrdEnd => {
                    if is_separator(ch) {
                        self.unread(ch);
                        return emit(lexeme, LexKind::Ordinal);
                    }
                    lexeme.push(ch);
                    state = State::Alphanumeric;
                }
            }
        }
    }
}

impl Iterator for Lexer {
    type Item = LexToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Scans a whole line into tokens.
#[must_use]
pub fn scan(text: &str) -> Vec<LexToken> {
    Lexer::new(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(String, LexKind)> {
        scan(text).into_iter().map(|t| (t.lexeme, t.kind)).collect()
    }

    fn tok(lexeme: &str, kind: LexKind) -> (String, LexKind) {
        (lexeme.to_string(), kind)
    }

    #[test]
    fn scans_simple_address() {
        assert_eq!(
            kinds("6500 Linderson Way SW"),
            vec![
                tok("6500", LexKind::Num),
                tok("LINDERSON", LexKind::Alpha),
                tok("WAY", LexKind::Alpha),
                tok("SW", LexKind::TwoChar),
            ]
        );
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(scan("").is_empty());
        assert!(scan("   ").is_empty());
        assert!(scan(" . , ").is_empty());
    }

    #[test]
    fn trailing_separators_yield_nothing_extra() {
        assert_eq!(
            kinds("MAIN   "),
            vec![tok("MAIN", LexKind::Alpha)]
        );
    }

    #[test]
    fn skips_periods_and_commas() {
        assert_eq!(
            kinds("N.E. 4th St., Olympia"),
            vec![
                tok("NE", LexKind::TwoChar),
                tok("4TH", LexKind::Ordinal),
                tok("ST", LexKind::TwoChar),
                tok("OLYMPIA", LexKind::Alpha),
            ]
        );
    }

    #[test]
    fn recognizes_ordinals() {
        assert_eq!(kinds("1ST")[0].1, LexKind::Ordinal);
        assert_eq!(kinds("22ND")[0].1, LexKind::Ordinal);
        assert_eq!(kinds("103RD")[0].1, LexKind::Ordinal);
        assert_eq!(kinds("11TH")[0].1, LexKind::Ordinal);
        assert_eq!(kinds("5th")[0], tok("5TH", LexKind::Ordinal));
    }

    #[test]
    fn broken_ordinals_degrade_to_alphanumeric() {
        assert_eq!(kinds("1S"), vec![tok("1S", LexKind::Alphanumeric)]);
        assert_eq!(kinds("1SX"), vec![tok("1SX", LexKind::Alphanumeric)]);
        assert_eq!(kinds("4THS"), vec![tok("4THS", LexKind::Alphanumeric)]);
        assert_eq!(kinds("12B"), vec![tok("12B", LexKind::Alphanumeric)]);
    }

    #[test]
    fn recognizes_fractions() {
        assert_eq!(
            kinds("123 1/2 MAIN"),
            vec![
                tok("123", LexKind::Num),
                tok("1/2", LexKind::Fraction),
                tok("MAIN", LexKind::Alpha),
            ]
        );
    }

    #[test]
    fn fraction_followed_by_letter_keeps_letter() {
        assert_eq!(
            kinds("1/2A"),
            vec![tok("1/2", LexKind::Fraction), tok("A", LexKind::OneChar)]
        );
    }

    #[test]
    fn ampersand_is_its_own_token() {
        assert_eq!(
            kinds("A&B"),
            vec![
                tok("A", LexKind::OneChar),
                tok("&", LexKind::Amp),
                tok("B", LexKind::OneChar),
            ]
        );
    }

    #[test]
    fn dash_and_hash_are_alphanumeric() {
        assert_eq!(kinds("-"), vec![tok("-", LexKind::Alphanumeric)]);
        assert_eq!(kinds("#12"), vec![tok("#12", LexKind::Alphanumeric)]);
        assert_eq!(kinds("A-1"), vec![tok("A-1", LexKind::Alphanumeric)]);
    }

    #[test]
    fn letter_runs_track_length() {
        assert_eq!(kinds("N")[0].1, LexKind::OneChar);
        assert_eq!(kinds("NE")[0].1, LexKind::TwoChar);
        assert_eq!(kinds("NORTH")[0].1, LexKind::Alpha);
        assert_eq!(kinds("AB1")[0].1, LexKind::Alphanumeric);
    }

    #[test]
    fn nul_is_a_separator() {
        assert_eq!(
            kinds("MAIN\0ST"),
            vec![tok("MAIN", LexKind::Alpha), tok("ST", LexKind::TwoChar)]
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(LexKind::TwoChar.to_string(), "TWO_CHAR");
        assert_eq!(LexKind::Alphanumeric.as_ref(), "ALPHANUMERIC");
    }
}
