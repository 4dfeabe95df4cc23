use crate::models::Deck;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round to cents, halves away from zero
fn cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render the priced deck as a plain-text table.
///
/// One line per entry in name order, then a summary line with the total
/// card count and total value. Unpriced entries show `$0.00`.
pub fn format_report(deck: &Deck) -> String {
    let mut output = String::new();

    for entry in deck.sorted_entries() {
        output.push_str(&format!(
            "{:2} x {:<20} = ${:.2}\n",
            entry.quantity,
            entry.name,
            cents(entry.extended_price())
        ));
    }

    output.push_str(&format!(
        "{:2} {:<22} = ${:.2}\n",
        deck.total_quantity(),
        "cards",
        cents(deck.total_price())
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_deck;
    use crate::models::DeckEntry;
    use std::str::FromStr;

    fn squash(line: &str) -> String {
        line.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_report_lines_and_summary() {
        let mut deck = Deck::new();
        let mut lotus = DeckEntry::new("Black Lotus", 1);
        lotus.unit_price = Some(Decimal::from_str("5000.00").unwrap());
        deck.insert(lotus);
        deck.insert(DeckEntry::new("Forest", 20));

        let report = format_report(&deck);
        let lines: Vec<String> = report.lines().map(squash).collect();

        assert_eq!(
            lines,
            vec![
                "1 x Black Lotus = $5000.00",
                "20 x Forest = $0.00",
                "21 cards = $5000.00",
            ]
        );
    }

    #[test]
    fn test_report_fixed_width_columns() {
        let mut deck = Deck::new();
        let mut opt = DeckEntry::new("Opt", 4);
        opt.unit_price = Some(Decimal::from_str("0.125").unwrap());
        deck.insert(opt);

        let report = format_report(&deck);
        let mut lines = report.lines();

        assert_eq!(lines.next(), Some(" 4 x Opt                  = $0.50"));
        assert_eq!(lines.next(), Some(" 4 cards                  = $0.50"));
    }

    #[test]
    fn test_report_rounds_to_nearest_cent() {
        let mut deck = Deck::new();
        let mut opt = DeckEntry::new("Opt", 1);
        opt.unit_price = Some(Decimal::from_str("2.679").unwrap());
        deck.insert(opt);
        let mut ponder = DeckEntry::new("Ponder", 1);
        ponder.unit_price = Some(Decimal::from_str("0.125").unwrap());
        deck.insert(ponder);

        let report = format_report(&deck);
        let lines: Vec<String> = report.lines().map(squash).collect();

        assert_eq!(
            lines,
            vec![
                "1 x Opt = $2.68",
                "1 x Ponder = $0.13",
                "2 cards = $2.80",
            ]
        );
    }

    #[test]
    fn test_report_total_beyond_u32_quantities() {
        let deck = parse_deck(["4000000000 Forest", "4000000000 Island"]).unwrap();
        let report = format_report(&deck);
        assert_eq!(
            squash(report.lines().last().unwrap()),
            "8000000000 cards = $0.00"
        );
    }

    #[test]
    fn test_report_empty_deck() {
        let report = format_report(&Deck::new());
        assert_eq!(squash(&report), "0 cards = $0.00");
    }
}
