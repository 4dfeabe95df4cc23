use rust_decimal::Decimal;
use std::collections::HashMap;

/// One line of a deck list after parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckEntry {
    pub name: String,
    pub quantity: u32,
    /// USD price of a single copy; `None` until reconciled or when unpriced
    pub unit_price: Option<Decimal>,
}

impl DeckEntry {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price: None,
        }
    }

    /// Quantity times unit price, zero when unpriced
    pub fn extended_price(&self) -> Decimal {
        self.unit_price.unwrap_or(Decimal::ZERO) * Decimal::from(self.quantity)
    }
}

/// Deck list keyed by card name.
///
/// Map order is undefined; callers that need a stable order use
/// [`Deck::sorted_entries`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    entries: HashMap<String, DeckEntry>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any existing entry with the same name
    pub fn insert(&mut self, entry: DeckEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&DeckEntry> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut DeckEntry> {
        self.entries.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &DeckEntry> {
        self.entries.values()
    }

    /// Entries ordered by card name
    pub fn sorted_entries(&self) -> Vec<&DeckEntry> {
        let mut entries: Vec<&DeckEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// Total number of cards across all entries
    pub fn total_quantity(&self) -> u64 {
        self.entries.values().map(|e| u64::from(e.quantity)).sum()
    }

    /// Sum of extended prices across all entries
    pub fn total_price(&self) -> Decimal {
        self.entries.values().map(DeckEntry::extended_price).sum()
    }
}

/// A name/price pair decoded from a search response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedCard {
    pub name: String,
    pub unit_price_usd: Option<Decimal>,
}
