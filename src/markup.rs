use scraper::{Html, Selector};
use tracing::debug;

use crate::config::TableLocator;
use crate::error::{Result, StandingsError};

/// Text nodes of the standings table, trimmed, in document order.
///
/// Only the first table matching `locator` is read. Blank nodes are kept;
/// the chunker skips them.
pub fn table_tokens(html: &str, locator: &TableLocator) -> Result<Vec<String>> {
    let selector_text = locator.selector();
    let selector =
        Selector::parse(&selector_text).map_err(|e| StandingsError::InvalidSelector {
            selector: selector_text.clone(),
            message: e.to_string(),
        })?;

    let document = Html::parse_document(html);
    let table = document
        .select(&selector)
        .next()
        .ok_or_else(|| StandingsError::TableNotFound {
            selector: selector_text.clone(),
        })?;

    let tokens: Vec<String> = table.text().map(|s| s.trim().to_string()).collect();
    debug!("Found {} text nodes in {}", tokens.len(), selector_text);
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <table cellpadding="2" cellspacing="0"><tr><td>Menu</td></tr></table>
          <table cellpadding="4" cellspacing="0">
            <tr><td colspan="11"><b>EASTERN CONFERENCE</b></td></tr>
            <tr><td>Atlantic Division</td><td>W-L-OT</td></tr>
            <tr>
              <td><a href="/team/bos">Boston</a></td>
              <td>41-31-10</td>
              <!-- hidden -->
              <td> 25 </td>
            </tr>
          </table>
          <table cellpadding="4" cellspacing="0"><tr><td>Second</td></tr></table>
        </body></html>
    "#;

    #[test]
    fn reads_the_first_matching_table_in_order() {
        let tokens = table_tokens(PAGE, &TableLocator::default()).unwrap();
        let text: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect();

        assert_eq!(
            text,
            [
                "EASTERN CONFERENCE",
                "Atlantic Division",
                "W-L-OT",
                "Boston",
                "41-31-10",
                "25"
            ]
        );
        assert!(tokens.iter().all(|t| t.trim() == t));
    }

    #[test]
    fn missing_table_is_an_error() {
        let html = "<html><body><table><tr><td>Nothing</td></tr></table></body></html>";
        let err = table_tokens(html, &TableLocator::default()).unwrap_err();
        assert!(matches!(err, StandingsError::TableNotFound { .. }));
    }

    #[test]
    fn custom_locator_is_honoured() {
        let locator = TableLocator {
            attributes: vec![("cellpadding".to_string(), "2".to_string())],
        };
        let tokens = table_tokens(PAGE, &locator).unwrap();
        assert_eq!(tokens, ["Menu"]);
    }
}
