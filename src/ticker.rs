//! Ticker Layout
//!
//! The headline strip scrolls a doubled list so the CSS loop has no seam.

/// One rendered ticker item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerEntry {
    pub text: String,
    /// Second copy: hidden from assistive technology
    pub hidden: bool,
}

/// Headlines twice back-to-back, second copy marked hidden.
pub fn ticker_entries(headlines: &[String]) -> Vec<TickerEntry> {
    [false, true]
        .into_iter()
        .flat_map(|hidden| {
            headlines.iter().map(move |text| TickerEntry {
                text: text.clone(),
                hidden,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headlines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_doubles_in_order() {
        let entries = ticker_entries(&headlines(&["A", "B"]));
        let texts: Vec<_> = entries.iter().map(|e| e.text.as_str()).collect();
        let hidden: Vec<_> = entries.iter().map(|e| e.hidden).collect();

        assert_eq!(texts, vec!["A", "B", "A", "B"]);
        assert_eq!(hidden, vec![false, false, true, true]);
    }

    #[test]
    fn test_halves_match() {
        let input = headlines(&["JUURI NYT", "UUTINEN", "TEKNOLOGIA", "UUTINEN"]);
        let entries = ticker_entries(&input);
        let (first, second) = entries.split_at(input.len());

        assert_eq!(entries.len(), input.len() * 2);
        assert!(first.iter().zip(second).all(|(a, b)| a.text == b.text));
    }

    #[test]
    fn test_empty_input() {
        assert!(ticker_entries(&[]).is_empty());
    }
}
