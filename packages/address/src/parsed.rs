//! The structured result of tokenizing an address line.

use wa_sales_tax_address_models::AddressComponents;

use crate::token::{AddressToken, Roles};

/// Postal components identified in one address line.
///
/// Assigning a component normalizes the token for its role: directionals
/// become their canonical abbreviation, street types go through the USPS
/// table and a written ordinal street name (`FIRST`) becomes `1ST`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAddress {
    pub house: Option<AddressToken>,
    pub prefix_dir: Option<AddressToken>,
    pub street_qualifier: Option<AddressToken>,
    pub street_prefix: Option<AddressToken>,
    pub street: Option<AddressToken>,
    pub street_type: Option<AddressToken>,
    pub suffix_dir: Option<AddressToken>,
}

fn lexeme(token: Option<&AddressToken>) -> Option<&str> {
    token.map(AddressToken::lexeme)
}

impl ParsedAddress {
    #[must_use]
    pub fn with_house(mut self, token: &AddressToken) -> Self {
        let mut token = token.clone();
        token.assign(Roles::HOUSE);
        self.house = Some(token);
        self
    }

    #[must_use]
    pub fn with_prefix_dir(mut self, token: &AddressToken) -> Self {
        let mut token = token.clone();
        token.normalize_directional();
        token.assign(Roles::PREFIX_DIR);
        self.prefix_dir = Some(token);
        self
    }

    #[must_use]
    pub fn with_street_qualifier(mut self, token: &AddressToken) -> Self {
        let mut token = token.clone();
        token.assign(Roles::STREET_QUALIFIER);
        self.street_qualifier = Some(token);
        self
    }

    #[must_use]
    pub fn with_street_prefix(mut self, token: &AddressToken) -> Self {
        let mut token = token.clone();
        token.assign(Roles::STREET_PREFIX);
        self.street_prefix = Some(token);
        self
    }

    #[must_use]
    pub fn with_street(mut self, token: &AddressToken) -> Self {
        let mut token = token.clone();
        if token.is_ordinal_word() {
            token.normalize_ordinal_word();
        }
        token.assign(Roles::STREET);
        self.street = Some(token);
        self
    }

    /// Assigns a multi-word street: `first` is normalized as a street name
    /// and the remaining words are appended after it.
    #[must_use]
    pub fn with_street_words(self, first: &AddressToken, rest: &[&AddressToken]) -> Self {
        let mut parsed = self.with_street(first);
        if let Some(street) = parsed.street.as_mut() {
            for word in rest {
                street.append(word);
            }
        }
        parsed
    }

    #[must_use]
    pub fn with_street_type(mut self, token: &AddressToken) -> Self {
        let mut token = token.clone();
        token.normalize_road_type();
        token.assign(Roles::STREET_TYPE);
        self.street_type = Some(token);
        self
    }

    #[must_use]
    pub fn with_suffix_dir(mut self, token: &AddressToken) -> Self {
        let mut token = token.clone();
        token.normalize_directional();
        token.assign(Roles::SUFFIX_DIR);
        self.suffix_dir = Some(token);
        self
    }

    #[must_use]
    pub fn house(&self) -> Option<&str> {
        lexeme(self.house.as_ref())
    }

    #[must_use]
    pub fn prefix_dir(&self) -> Option<&str> {
        lexeme(self.prefix_dir.as_ref())
    }

    #[must_use]
    pub fn street_qualifier(&self) -> Option<&str> {
        lexeme(self.street_qualifier.as_ref())
    }

    #[must_use]
    pub fn street_prefix(&self) -> Option<&str> {
        lexeme(self.street_prefix.as_ref())
    }

    #[must_use]
    pub fn street(&self) -> Option<&str> {
        lexeme(self.street.as_ref())
    }

    #[must_use]
    pub fn street_type(&self) -> Option<&str> {
        lexeme(self.street_type.as_ref())
    }

    #[must_use]
    pub fn suffix_dir(&self) -> Option<&str> {
        lexeme(self.suffix_dir.as_ref())
    }

    /// Returns `true` if a street name was identified.
    #[must_use]
    pub fn has_street(&self) -> bool {
        self.street().is_some_and(|street| !street.trim().is_empty())
    }

    /// Owned, serializable copy of the component text.
    #[must_use]
    pub fn to_components(&self) -> AddressComponents {
        AddressComponents {
            house: self.house().map(str::to_string),
            prefix_dir: self.prefix_dir().map(str::to_string),
            street_qualifier: self.street_qualifier().map(str::to_string),
            street_prefix: self.street_prefix().map(str::to_string),
            street: self.street().map(str::to_string),
            street_type: self.street_type().map(str::to_string),
            suffix_dir: self.suffix_dir().map(str::to_string),
        }
    }
}

impl From<&ParsedAddress> for AddressComponents {
    fn from(parsed: &ParsedAddress) -> Self {
        parsed.to_components()
    }
}
