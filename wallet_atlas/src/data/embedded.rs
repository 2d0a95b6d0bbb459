//! Embedded fallback datasets, used when a ledger has no reachable source.

use crate::data::LedgerEntry;

/// Snapshot of the token-A holder ledger shipped with the binary.
pub const LEDGER_A: &str = "\
Account,Quantity
u6PJ8DtQuPFnfmwHbGFULQ4u4EgjDiyYKjVEsynXq2w,53353226.72
9SLPTL41SPsYkgdsMzdfJsxymEANKr5bYoBsQzJyKpKS,19700515.36
F7RkX6Y1qTfBqoX5oHoZEgrG1Dpy55UZ3GfWwPbM58nQ,18358622.60
A77HErqtfN1hLLpvZ9pCtu66FEtM8BveoaKbbMoZ4RiR,17700127.59
44P5Ct5JkPz76Rs2K6juC65zXMpFRDrHatxcASJ4Dyra,16151152.36
9cNE6KBg2Xmf34FPMMvzDF8yUHMrgLRzBV3vD7b1JnUS,12645354.91
38ESLHdJkqNvMbJmbgsHJGXjJPpsL4TkvSUgXegYgvpr,10001047.32
5Q544fKrFoe6tsEbD7S8EmxGTJYAKtTVhAW5Q5pge4j1,9042762.02
AcFmVa1HJTKkz6qn4sfLAFvjKqd914KgdaNHGEszMR5Q,8891026.60
GxhQ5LTFc4dTxAXt7aQ4uSKvr8ev9T2QXE9zWKA3pjFP,8591047.43
79sJvLQ3QrL88Uc9jgV3iTT5Ft19xtMbjmAkhgoKh38W,7932329.62
FWznbcNXWQuHTawe9RxvQ2LdCENssh12dsznf4RiouN5,7763719.78
7QAFvj11sS5kgNh7otR3EGEZbGRHR3nMwNz31rTcDm8P,7523424.67
Ait7nuyWJSxHF7c1WX2CQ7AHFa2nPFYYg84xL5nPhYtn,7025023.12
DBmae92YTQKLsNzXcPscxiwPqMcz9stQr2prB5ZCAHPd,6728342.10
ASTyfSima4LLAdDgoFGkgqoKowG1LZFDr9fAQrg7iaJZ,6655043.23
HVh6wHNBAsG3pq1Bj5oCzRjoWKVogEDHwUHkRz3ekFgt,6251889.47
8icKqfmu95pCmfQLc2cLkmhB7LqN8tRaaE4cvKnGpwpq,6002400.00
DHeiaWt2MzA5BgBU6FQe6V3K8akJMcDbXYxrqPV19F9U,6000100.00
";

/// Snapshot of the token-B holder ledger shipped with the binary.
/// Five addresses overlap with [`LEDGER_A`].
pub const LEDGER_B: &str = "\
Account,Quantity
8Mm46CsqxiyAputDUp2cXHg41HE3BfynTeMBDwzrMZQH,112378114.33
hTvwKr1RvQdPS5xiWfXM2UZYuF55Ei8zzsuB7e58feu,109758331.88
AC5RDfQFmDS1deWZos921JfqscXdByf8BKHs5ACWjtW2,67456670.68
CBEADkb8TZAXHjVE3zwad4L995GZE7rJcacJ7asebkVG,52117385.50
u6PJ8DtQuPFnfmwHbGFULQ4u4EgjDiyYKjVEsynXq2w,41100416.44
JBQ1suc4GJBbVYP6y2poGjoDCFrfjtGSEJRt4deasyNe,32829674.18
A77HErqtfN1hLLpvZ9pCtu66FEtM8BveoaKbbMoZ4RiR,32479739.27
4vmjUC6AtFK4JyF9CrcBM8Wtq9fFvUSa31pLWJumGMZ,29012410.64
81BgcfZuZf9bESLvw3zDkh7cZmMtDwTPgkCvYu7zx26o,27626054.69
7XmrmvNNGc3LHqq3HqGHnCdgoAQv4yx7kHwYqtiMPzgD,24226306.00
8DBwT4zFqHmK5KU4kMj1zceQANHwf76NRuhevB7ZSoEc,22284354.03
5Q544fKrFoe6tsEbD7S8EmxGTJYAKtTVhAW5Q5pge4j1,18023656.63
5PAhQiYdLBd6SVdjzBQDxUAEFyDdF5ExNPQfcscnPRj5,16718869.33
417ccNwQnQykVbFUDKd3sh6xHKGSRTaCTWr6sdR9ZuCa,10704068.07
6FEVkH17P9y8Q9aCkDdPcMDjvj7SVxrTETaYEm8f51Jy,8875472.76
2tU4k62hFNMwwxrynmudXGv3csNQuxLtDBUsxAMt9SdL,8698591.41
Ezhr48hfsyUg9zoAq7CH5opi7NbSM34RjrVFf4n8cVpo,8539942.52
DBmae92YTQKLsNzXcPscxiwPqMcz9stQr2prB5ZCAHPd,8189534.80
HVh6wHNBAsG3pq1Bj5oCzRjoWKVogEDHwUHkRz3ekFgt,7987933.45
";

fn entries(rows: &[(&str, f64)]) -> Vec<LedgerEntry> {
    rows.iter()
        .map(|&(address, amount)| LedgerEntry {
            address: address.to_string(),
            amount,
        })
        .collect()
}

/// Last-resort token-A dataset: the loader substitutes this when even the
/// embedded text parses to zero entries, so downstream never sees no data.
pub fn minimal_ledger_a() -> Vec<LedgerEntry> {
    entries(&[
        ("wallet1", 1_000_000.0),
        ("wallet2", 900_000.0),
        ("wallet3", 800_000.0),
        ("shared1", 700_000.0),
        ("shared2", 600_000.0),
    ])
}

/// Last-resort token-B dataset. `shared1`/`shared2` overlap with token A.
pub fn minimal_ledger_b() -> Vec<LedgerEntry> {
    entries(&[
        ("wallet4", 500_000.0),
        ("wallet5", 400_000.0),
        ("wallet6", 300_000.0),
        ("shared1", 200_000.0),
        ("shared2", 100_000.0),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse::parse_ledger;

    #[test]
    fn embedded_ledgers_parse_cleanly() {
        let a = parse_ledger(LEDGER_A);
        let b = parse_ledger(LEDGER_B);

        assert_eq!(a.entries.len(), 19);
        assert_eq!(b.entries.len(), 19);
        assert_eq!(a.skipped_rows, 0);
        assert_eq!(b.skipped_rows, 0);
    }

    #[test]
    fn minimal_datasets_have_five_entries_and_two_shared() {
        let a = minimal_ledger_a();
        let b = minimal_ledger_b();
        assert_eq!(a.len(), 5);
        assert_eq!(b.len(), 5);

        let shared: Vec<&str> = b
            .iter()
            .filter(|e| a.iter().any(|o| o.address == e.address))
            .map(|e| e.address.as_str())
            .collect();
        assert_eq!(shared, ["shared1", "shared2"]);
    }
}
