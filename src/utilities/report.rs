use std::collections::BTreeSet;
use std::io::{self, Write};

use crate::scraping::match_cards::CardMatch;

/// Writes one line per distinct match.
pub fn report_matches<W: Write>(out: &mut W, matches: &BTreeSet<CardMatch>) -> io::Result<()> {
    for card in matches {
        writeln!(out, "{}", card)?;
    }
    Ok(())
}

/// Writes the single failure line, with the full error chain.
pub fn report_error<W: Write>(out: &mut W, error: &anyhow::Error) -> io::Result<()> {
    writeln!(out, "Error: {:#}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_match() {
        let matches: BTreeSet<_> = [
            CardMatch {
                label: "SC Smart".to_string(),
                src: "https://x.com/smart.png".to_string(),
            },
            CardMatch {
                label: "DBS Eminent".to_string(),
                src: "https://x.com/eminent.png".to_string(),
            },
        ]
        .into_iter()
        .collect();
        let mut out = Vec::new();

        report_matches(&mut out, &matches).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "DBS Eminent: https://x.com/eminent.png\nSC Smart: https://x.com/smart.png\n"
        );
    }

    #[test]
    fn writes_nothing_without_matches() {
        let mut out = Vec::new();

        report_matches(&mut out, &BTreeSet::new()).unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn error_line_includes_context_chain() {
        let error = anyhow::anyhow!("connection refused").context("Failed to send request");
        let mut out = Vec::new();

        report_error(&mut out, &error).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: Failed to send request: connection refused\n"
        );
    }
}
