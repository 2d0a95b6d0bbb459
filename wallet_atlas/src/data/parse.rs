//! Ledger text parsing: header + comma-separated `address,quantity[,...]` rows.

use crate::data::LedgerEntry;

/// Entries accepted from one ledger text, plus the count of rows rejected.
/// Malformed rows are skipped, never fatal.
#[derive(Debug, Default)]
pub struct ParsedLedger {
    pub entries: Vec<LedgerEntry>,
    pub skipped_rows: usize,
}

/// Parses a two-column ledger. The header line is always skipped; each
/// non-blank line after it is accepted only if the first field is a non-empty
/// address and the second parses as a finite number. Trailing columns are
/// ignored. Input with fewer than two lines yields an empty result.
pub fn parse_ledger(text: &str) -> ParsedLedger {
    let lines: Vec<&str> = text.trim().lines().collect();
    if lines.len() < 2 {
        return ParsedLedger::default();
    }

    let mut parsed = ParsedLedger::default();
    for line in &lines[1..] {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(',');
        let address = fields.next().map(str::trim).unwrap_or_default();
        let quantity = fields.next().map(str::trim);

        let Some(quantity) = quantity else {
            parsed.skipped_rows += 1;
            continue;
        };
        let amount = match quantity.parse::<f64>() {
            Ok(amount) if amount.is_finite() => amount,
            _ => {
                parsed.skipped_rows += 1;
                continue;
            }
        };
        if address.is_empty() {
            parsed.skipped_rows += 1;
            continue;
        }

        parsed.entries.push(LedgerEntry {
            address: address.to_string(),
            amount,
        });
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_rows_in_order() {
        let text = "Account,Quantity\nAbc,100.5\nDef,2\nGhi,0.25";
        let parsed = parse_ledger(text);

        assert_eq!(parsed.skipped_rows, 0);
        let addresses: Vec<&str> = parsed.entries.iter().map(|e| e.address.as_str()).collect();
        assert_eq!(addresses, ["Abc", "Def", "Ghi"]);
        assert_eq!(parsed.entries[0].amount, 100.5);
    }

    #[test]
    fn counts_malformed_rows_without_aborting() {
        let text = "Account,Quantity\n\
                    good1,10\n\
                    ,5\n\
                    noamount\n\
                    bad,notanumber\n\
                    good2,20\n\
                    inf,inf\n\
                    nan,NaN";
        let parsed = parse_ledger(text);

        assert_eq!(parsed.entries.len(), 2);
        assert_eq!(parsed.skipped_rows, 5);
        assert_eq!(parsed.entries[0].address, "good1");
        assert_eq!(parsed.entries[1].address, "good2");
    }

    #[test]
    fn ignores_trailing_columns_and_whitespace() {
        let text = "Account,Quantity,Rank,Label\n  spaced  ,  42.0  , 1, whale";
        let parsed = parse_ledger(text);

        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.entries[0].address, "spaced");
        assert_eq!(parsed.entries[0].amount, 42.0);
    }

    #[test]
    fn blank_lines_are_neither_accepted_nor_counted() {
        let text = "Account,Quantity\n\na,1\n   \nb,2\n";
        let parsed = parse_ledger(text);

        assert_eq!(parsed.entries.len(), 2);
        assert_eq!(parsed.skipped_rows, 0);
    }

    #[test]
    fn short_input_yields_empty_result() {
        assert!(parse_ledger("").entries.is_empty());
        assert!(parse_ledger("Account,Quantity").entries.is_empty());
        assert!(parse_ledger("   \n").entries.is_empty());
    }

    #[test]
    fn header_is_always_skipped_even_if_well_formed() {
        // A header that happens to parse as data must still be dropped.
        let text = "w0,999\nw1,1";
        let parsed = parse_ledger(text);

        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.entries[0].address, "w1");
    }
}
