//! Sequential human-readable identifiers.
//!
//! Clients are numbered `CUST-001`, `CUST-002`, ... and quotations
//! `Q_00001`, `Q_00002`, ... The next identifier is derived from the latest
//! stored one by incrementing its trailing digit run and re-padding. Two
//! concurrent callers can derive the same candidate; the unique index on the
//! ID field rejects the loser, which is surfaced as a retryable conflict and
//! handled by a bounded retry loop in the owning service.

/// A fixed-width, prefixed identifier sequence.
#[derive(Debug, Clone, Copy)]
pub struct SequenceFormat {
    pub prefix: &'static str,
    pub width: usize,
}

pub const CLIENT_ID_FORMAT: SequenceFormat = SequenceFormat { prefix: "CUST-", width: 3 };
pub const QUOTATION_ID_FORMAT: SequenceFormat = SequenceFormat { prefix: "Q_", width: 5 };

impl SequenceFormat {
    /// Next identifier after `latest`, or the first one when no record exists.
    ///
    /// An unparsable `latest` (no trailing digit run) restarts the sequence at
    /// 1, matching the original numbering behavior.
    pub fn next(&self, latest: Option<&str>) -> String {
        let next_number = latest
            .and_then(trailing_number)
            .map(|n| n + 1)
            .unwrap_or(1);
        self.format(next_number)
    }

    /// Render `number` with the sequence prefix and zero padding. Numbers
    /// wider than the pad width keep all their digits.
    pub fn format(&self, number: u64) -> String {
        format!("{}{:0width$}", self.prefix, number, width = self.width)
    }
}

/// Extract the trailing digit run of an identifier, e.g. `CUST-012` -> 12.
fn trailing_number(id: &str) -> Option<u64> {
    let digits: String = id
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_client_id_starts_at_one() {
        assert_eq!(CLIENT_ID_FORMAT.next(None), "CUST-001");
    }

    #[test]
    fn client_id_increments_latest() {
        assert_eq!(CLIENT_ID_FORMAT.next(Some("CUST-002")), "CUST-003");
        assert_eq!(CLIENT_ID_FORMAT.next(Some("CUST-099")), "CUST-100");
    }

    #[test]
    fn client_id_grows_past_pad_width() {
        assert_eq!(CLIENT_ID_FORMAT.next(Some("CUST-999")), "CUST-1000");
    }

    #[test]
    fn quotation_id_uses_five_digits() {
        assert_eq!(QUOTATION_ID_FORMAT.next(None), "Q_00001");
        assert_eq!(QUOTATION_ID_FORMAT.next(Some("Q_00041")), "Q_00042");
    }

    #[test]
    fn unparsable_latest_restarts_sequence() {
        assert_eq!(CLIENT_ID_FORMAT.next(Some("legacy-id")), "CUST-001");
    }

    #[test]
    fn trailing_number_ignores_leading_digits() {
        assert_eq!(trailing_number("Q2024_00007"), Some(7));
        assert_eq!(trailing_number("CUST-"), None);
    }
}
