use crate::domain::model::{NegotiationResult, NegotiationStatus};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative_finite, validate_positive_finite};

/// A quote at or below this share of the estimate is accepted as is.
pub const ACCEPT_RATIO: f64 = 0.95;
/// Above this share of the estimate the quote is rejected as overpriced.
pub const COUNTER_RATIO: f64 = 1.25;

/// Classifies `quote` against `estimate`. Both bounds are inclusive on the lower band:
/// exactly `estimate * ACCEPT_RATIO` accepts and exactly `estimate * COUNTER_RATIO` counters.
pub fn negotiate(estimate: f64, quote: f64) -> Result<NegotiationResult> {
    validate_positive_finite("estimate", estimate)?;
    validate_non_negative_finite("quote", quote)?;

    let accept_line = estimate * ACCEPT_RATIO;
    let counter_line = estimate * COUNTER_RATIO;

    let (status, suggested_price) = if quote <= accept_line {
        (NegotiationStatus::Accept, quote)
    } else if quote <= counter_line {
        // 取報價與下方最近錨點的中間值
        let anchor = if quote > estimate { estimate } else { accept_line };
        (NegotiationStatus::Counter, (anchor + quote) / 2.0)
    } else {
        (NegotiationStatus::Reject, counter_line)
    };

    tracing::debug!(
        "Quote {:.2} vs estimate {:.2}: {:?}, suggest {:.2}",
        quote,
        estimate,
        status,
        suggested_price
    );

    Ok(NegotiationResult {
        status,
        estimate,
        quote,
        suggested_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_below_accept_line_is_accepted() {
        let result = negotiate(10_000.0, 9_000.0).unwrap();
        assert_eq!(result.status, NegotiationStatus::Accept);
        assert_eq!(result.suggested_price, 9_000.0);
    }

    #[test]
    fn test_quote_slightly_above_estimate_gets_counter_between() {
        let result = negotiate(10_000.0, 10_500.0).unwrap();
        assert_eq!(result.status, NegotiationStatus::Counter);
        assert!(result.suggested_price > 10_000.0 && result.suggested_price < 10_500.0);
        assert_eq!(result.suggested_price, 10_250.0);
    }

    #[test]
    fn test_steep_quote_is_rejected_with_cap() {
        let result = negotiate(10_000.0, 15_000.0).unwrap();
        assert_eq!(result.status, NegotiationStatus::Reject);
        assert_eq!(result.suggested_price, 12_500.0);
    }

    #[test]
    fn test_boundaries() {
        // 等於估價時是還價而不是接受
        let at_estimate = negotiate(10_000.0, 10_000.0).unwrap();
        assert_eq!(at_estimate.status, NegotiationStatus::Counter);
        assert!(at_estimate.suggested_price < 10_000.0);
        assert!(at_estimate.suggested_price > 9_500.0);

        assert_eq!(
            negotiate(10_000.0, 9_500.0).unwrap().status,
            NegotiationStatus::Accept
        );
        assert_eq!(
            negotiate(10_000.0, 12_500.0).unwrap().status,
            NegotiationStatus::Counter
        );
        assert_eq!(
            negotiate(10_000.0, 12_500.01).unwrap().status,
            NegotiationStatus::Reject
        );
    }

    #[test]
    fn test_invalid_inputs_are_validation_errors() {
        assert!(negotiate(0.0, 100.0).is_err());
        assert!(negotiate(10_000.0, -1.0).is_err());
        assert!(negotiate(10_000.0, f64::NAN).is_err());
        assert!(negotiate(10_000.0, 0.0).is_ok());
    }
}
