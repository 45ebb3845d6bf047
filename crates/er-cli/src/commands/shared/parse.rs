use anyhow::bail;
use er_valuation::parse_amount;

/// Parse a pounds amount from the command line. An empty value means unset.
pub fn parse_amount_arg(raw: &str, field: &str, allow_negative: bool) -> anyhow::Result<Option<f64>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let Some(amount) = parse_amount(raw) else {
        bail!("invalid {field} '{raw}': expected an amount such as 1,250,000 or £350000");
    };
    if amount < 0.0 && !allow_negative {
        bail!("invalid {field} '{raw}': must not be negative");
    }
    Ok(Some(amount))
}

/// Resolve a sector or lifecycle id. `none` and empty values clear the selection.
pub fn parse_selection(raw: &str, known: &[String], kind: &str) -> anyhow::Result<Option<String>> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    if known.iter().any(|id| id == raw) {
        return Ok(Some(raw.to_string()));
    }
    if known.is_empty() {
        bail!("this questionnaire defines no {kind} benchmarks");
    }
    bail!("unknown {kind} '{raw}'; expected one of: {}", known.join(", "))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", None)]
    #[case("  ", None)]
    #[case("£1,250,000", Some(1_250_000.0))]
    #[case("350 000", Some(350_000.0))]
    fn amounts(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_amount_arg(raw, "turnover", false).expect("should parse"), expected);
    }

    #[test]
    fn negative_amount_only_where_allowed() {
        assert_eq!(parse_amount_arg("-40000", "ebitda", true).expect("ebitda"), Some(-40_000.0));
        let err = parse_amount_arg("-40000", "debt", false).expect_err("debt should fail");
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn garbage_amount_is_rejected() {
        let err = parse_amount_arg("lots", "turnover", false).expect_err("should fail");
        assert!(err.to_string().contains("invalid turnover 'lots'"));
    }

    #[test]
    fn selection_accepts_known_and_clears_on_none() {
        let known = vec!["technology".to_string(), "manufacturing".to_string()];
        assert_eq!(
            parse_selection("technology", &known, "sector").expect("known"),
            Some("technology".to_string())
        );
        assert_eq!(parse_selection("NONE", &known, "sector").expect("none"), None);
        assert_eq!(parse_selection("", &known, "sector").expect("empty"), None);
    }

    #[test]
    fn unknown_selection_lists_choices() {
        let known = vec!["technology".to_string()];
        let err = parse_selection("retail", &known, "sector").expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "unknown sector 'retail'; expected one of: technology"
        );
    }
}
