//! Address line tokenizer.
//!
//! [`tokenize`] scans a line, tries the rule grammar and, when no rule
//! matches, runs a fixed sequence of greedy repairs over the token list,
//! retrying the grammar after each one. Repairs are never undone. If the
//! grammar still fails, a fallback picks the most street-like token.

use crate::grammar;
use crate::lex::{LexKind, Lexer};
use crate::parsed::ParsedAddress;
use crate::token::AddressToken;

/// Parses one address line into its postal components.
///
/// Never fails. An empty or blank line yields an empty [`ParsedAddress`];
/// any line with at least one token yields a street.
#[must_use]
pub fn tokenize(line: &str) -> ParsedAddress {
    let mut tokens: Vec<AddressToken> = Lexer::new(line).map(AddressToken::from).collect();
    log::trace!("tokenize: {line:?} -> {:?}", lexemes(&tokens));

    drop_unit_marker(&mut tokens);
    drop_house_fraction(&mut tokens);

    if tokens.is_empty() {
        return ParsedAddress::default();
    }

    coalesce_directionals(&mut tokens);

    if let Some(parsed) = grammar::apply(&tokens) {
        return parsed;
    }

    if numeric_ordinal(&mut tokens)
        && let Some(parsed) = retry("numeric ordinal", &tokens)
    {
        return parsed;
    }

    if normalize_long_directionals(&mut tokens) {
        coalesce_directionals(&mut tokens);
        if let Some(parsed) = retry("long directionals", &tokens) {
            return parsed;
        }
    }

    if truncate_at_unit(&mut tokens)
        && let Some(parsed) = retry("unit truncation", &tokens)
    {
        return parsed;
    }

    for _ in 0..3 {
        if !combine_words(&mut tokens, false) {
            break;
        }
        if let Some(parsed) = retry("combine words", &tokens) {
            return parsed;
        }
    }

    if combine_words(&mut tokens, true)
        && let Some(parsed) = retry("combine words across street types", &tokens)
    {
        return parsed;
    }

    if fix_up_road_types(&mut tokens)
        && let Some(parsed) = retry("road type in name", &tokens)
    {
        return parsed;
    }

    if fix_up_directionals(&mut tokens) {
        combine_words(&mut tokens, false);
        if let Some(parsed) = retry("interior directional", &tokens) {
            return parsed;
        }
    }

    log::debug!("tokenize: no rule matched {:?}, using fallback", lexemes(&tokens));
    fallback(&tokens)
}

fn lexemes(tokens: &[AddressToken]) -> Vec<&str> {
    tokens.iter().map(AddressToken::lexeme).collect()
}

fn retry(repair: &str, tokens: &[AddressToken]) -> Option<ParsedAddress> {
    log::debug!("tokenize: retrying after {repair}: {:?}", lexemes(tokens));
    grammar::apply(tokens)
}

/// Drops the first `#`-prefixed token (an apartment or suite number).
fn drop_unit_marker(tokens: &mut Vec<AddressToken>) {
    if let Some(x) = tokens
        .iter()
        .position(|t| t.kind() == LexKind::Alphanumeric && t.starts_with('#'))
    {
        tokens.remove(x);
    }
}

/// Drops a fraction right after a leading house number, as in `123 1/2`.
fn drop_house_fraction(tokens: &mut Vec<AddressToken>) {
    if let [house, fraction, ..] = tokens.as_slice()
        && house.kind() == LexKind::Num
        && fraction.kind() == LexKind::Fraction
    {
        tokens.remove(1);
    }
}

/// A north/south directional followed by an east/west one.
fn directionals_compatible(first: &AddressToken, second: &AddressToken) -> bool {
    (first.starts_with('N') || first.starts_with('S'))
        && (second.starts_with('E') || second.starts_with('W'))
}

/// Fuses `N E` into `NE` and `NORTH WEST` into `NW`. Mixed lengths such
/// as `N EAST` are left alone. A fused token is not compared against the
/// token that follows it.
fn coalesce_directionals(tokens: &mut Vec<AddressToken>) {
    let mut x = 0;
    while x + 1 < tokens.len() {
        let (first, second) = (&tokens[x], &tokens[x + 1]);
        let same_form = (first.char_len() == 1 && second.char_len() == 1)
            || (first.char_len() > 3 && second.char_len() > 3);

        if first.is_directional()
            && second.is_directional()
            && same_form
            && directionals_compatible(first, second)
        {
            let mut second = tokens.remove(x + 1);
            tokens[x].append_directional(&mut second);
        }
        x += 1;
    }
}

/// A leading ordinal, or an ordinal right after a non-numeric first
/// token, is reduced to its digits.
fn numeric_ordinal(tokens: &mut [AddressToken]) -> bool {
    match tokens {
        [first, ..] if first.kind() == LexKind::Ordinal => {
            first.to_numeric();
            true
        }
        [first, second, ..]
            if second.kind() == LexKind::Ordinal && first.kind() != LexKind::Num =>
        {
            second.to_numeric();
            true
        }
        _ => false,
    }
}

/// Abbreviates spelled-out directionals not preceded by another
/// directional.
fn normalize_long_directionals(tokens: &mut [AddressToken]) -> bool {
    let mut changed = false;
    for x in 0..tokens.len() {
        let after_directional = x > 0 && tokens[x - 1].is_directional();
        let token = &mut tokens[x];
        if token.is_directional() && token.char_len() > 2 && !after_directional {
            token.normalize_directional();
            changed = true;
        }
    }
    changed
}

/// Cuts the line at the first unit designator (or `%` token) from the
/// third token on.
fn truncate_at_unit(tokens: &mut Vec<AddressToken>) -> bool {
    let Some(x) = (2..tokens.len()).find(|&x| tokens[x].is_unit() || tokens[x].starts_with('%'))
    else {
        return false;
    };
    tokens.truncate(x);
    true
}

fn merge_next(tokens: &mut Vec<AddressToken>, x: usize) {
    let next = tokens.remove(x + 1);
    tokens[x].append(&next);
}

fn is_wordish(token: &AddressToken) -> bool {
    matches!(
        token.kind(),
        LexKind::Alpha | LexKind::TwoChar | LexKind::OneChar
    )
}

/// Whether the words at `x` and `x + 1` can be joined into one street
/// name. Short directionals and short road types stay separate, and a
/// road type in final position is kept as the street type.
fn can_combine(tokens: &[AddressToken], x: usize, ignore_street_type: bool) -> bool {
    let (word, next) = (&tokens[x], &tokens[x + 1]);

    if !is_wordish(word)
        || (word.is_directional() && word.char_len() < 3)
        || (word.is_road_type() && word.char_len() < 3)
        || !is_wordish(next)
    {
        return false;
    }

    if next.is_road_type() && (next.char_len() < 3 || x + 2 == tokens.len()) {
        return false;
    }

    if next.is_directional() && next.char_len() < 3 {
        if (word.is_road_type() || next.is_road_type()) && !ignore_street_type {
            return false;
        }
        return tokens.get(x + 2).is_some_and(AddressToken::is_road_type);
    }

    true
}

/// Joins the first pair of adjacent words that can form a multi-word
/// street name.
fn combine_words(tokens: &mut Vec<AddressToken>, ignore_street_type: bool) -> bool {
    let Some(x) =
        (0..tokens.len().saturating_sub(1)).find(|&x| can_combine(tokens, x, ignore_street_type))
    else {
        return false;
    };
    merge_next(tokens, x);
    true
}

/// When the line ends in a road type (optionally followed by a
/// directional), an earlier road-type word is part of the name, as in
/// `LA PUSH DR`.
fn fix_up_road_types(tokens: &mut Vec<AddressToken>) -> bool {
    let count = tokens.len();
    let end = match tokens.as_slice() {
        [.., last] if last.is_road_type() => count.saturating_sub(2),
        [.., before, last] if last.is_directional() && before.is_road_type() => {
            count.saturating_sub(3)
        }
        _ => return false,
    };

    let Some(x) = (0..end).find(|&x| {
        tokens[x].is_road_type()
            && matches!(tokens[x + 1].kind(), LexKind::Alpha | LexKind::TwoChar)
    }) else {
        return false;
    };
    merge_next(tokens, x);
    true
}

/// Joins a one-letter directional inside the line onto the following
/// word, reading it as part of the street name.
fn fix_up_directionals(tokens: &mut Vec<AddressToken>) -> bool {
    let count = tokens.len();
    let starts_with_house = tokens.first().is_some_and(|t| t.kind() == LexKind::Num);
    if (starts_with_house && count < 4) || (!starts_with_house && count < 3) {
        return false;
    }

    let start = usize::from(starts_with_house);
    let Some(x) = (start..count - 2).find(|&x| {
        let (letter, next) = (&tokens[x], &tokens[x + 1]);
        letter.is_directional()
            && letter.char_len() == 1
            && (next.kind() == LexKind::Alpha || next.char_len() == 1)
    }) else {
        return false;
    };
    merge_next(tokens, x);
    true
}

/// Street is the first word, else the first mixed token, else the second
/// token. House is the first other plain number.
fn fallback(tokens: &[AddressToken]) -> ParsedAddress {
    let street_index = tokens
        .iter()
        .position(|t| t.kind() == LexKind::Alpha)
        .or_else(|| {
            tokens
                .iter()
                .position(|t| t.kind() == LexKind::Alphanumeric)
        })
        .unwrap_or_else(|| usize::from(tokens.len() > 1));

    let Some(street) = tokens.get(street_index) else {
        return ParsedAddress::default();
    };
    let parsed = ParsedAddress::default().with_street(street);

    match tokens
        .iter()
        .enumerate()
        .find(|(x, t)| *x != street_index && t.kind() == LexKind::Num)
    {
        Some((_, house)) => parsed.with_house(house),
        None => parsed,
    }
}
