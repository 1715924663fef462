use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::payment::PaymentRequest;

static EXPIRY_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/([0-9]{2})$").expect("expiry date pattern is valid")
});

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub reason: String,
}

impl Violation {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Required,
    Alpha,
    CreditCard,
    ExpiryDate,
    Len(usize),
    Numeric,
}

impl Rule {
    fn accepts(self, value: &str) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::Alpha => value.chars().all(|c| c.is_ascii_alphabetic()),
            Rule::CreditCard => is_credit_card(value),
            Rule::ExpiryDate => EXPIRY_DATE.is_match(value),
            Rule::Len(n) => value.chars().count() == n,
            Rule::Numeric => value.chars().all(|c| c.is_ascii_digit()),
        }
    }

    fn reason(self) -> String {
        match self {
            Rule::Required => "is required".to_string(),
            Rule::Alpha => "must only contain alphabetic characters".to_string(),
            Rule::CreditCard => "must be a valid credit card number".to_string(),
            Rule::ExpiryDate => "must be in MM/YY format".to_string(),
            Rule::Len(n) => format!("must be exactly {} characters", n),
            Rule::Numeric => "must be numeric".to_string(),
        }
    }
}

const NAME_RULES: &[Rule] = &[Rule::Required, Rule::Alpha];
const CARD_NUMBER_RULES: &[Rule] = &[Rule::Required, Rule::CreditCard];
const EXPIRY_DATE_RULES: &[Rule] = &[Rule::Required, Rule::ExpiryDate];
const CURRENCY_CODE_RULES: &[Rule] = &[Rule::Required, Rule::Len(3), Rule::Alpha];
const CVV_RULES: &[Rule] = &[Rule::Required, Rule::Len(3), Rule::Numeric];

/// Checks every field of the request and collects one violation per failing
/// field. Within a field the first failing rule wins.
pub fn validate(request: &PaymentRequest) -> Result<(), Vec<Violation>> {
    let violations: Vec<Violation> = [
        check_text("firstName", &request.first_name, NAME_RULES),
        check_text("lastName", &request.last_name, NAME_RULES),
        check_text("cardNumber", &request.card_number, CARD_NUMBER_RULES),
        check_text("expiryDate", &request.expiry_date, EXPIRY_DATE_RULES),
        check_amount("amount", request.amount),
        check_text("currencyCode", &request.currency_code, CURRENCY_CODE_RULES),
        check_text("cvv", &request.cvv, CVV_RULES),
    ]
    .into_iter()
    .flatten()
    .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_text(field: &'static str, value: &str, rules: &[Rule]) -> Option<Violation> {
    rules
        .iter()
        .find(|rule| !rule.accepts(value))
        .map(|rule| Violation::new(field, rule.reason()))
}

fn check_amount(field: &'static str, amount: f64) -> Option<Violation> {
    if !amount.is_finite() {
        Some(Violation::new(field, "is invalid"))
    } else if amount == 0.0 {
        Some(Violation::new(field, Rule::Required.reason()))
    } else if amount < 0.0 {
        Some(Violation::new(field, "must be greater than 0"))
    } else {
        None
    }
}

/// Digit groups may be separated by single spaces; each group needs at least
/// three digits. The joined number must be 12 to 19 digits and pass Luhn.
fn is_credit_card(value: &str) -> bool {
    let mut digits = String::with_capacity(value.len());
    for segment in value.split(' ') {
        if segment.len() < 3 {
            return false;
        }
        digits.push_str(segment);
    }

    (12..=19).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit())
        && luhn::valid(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid_request() -> PaymentRequest {
        PaymentRequest {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            card_number: "4111111111111111".to_string(),
            expiry_date: "12/29".to_string(),
            amount: 500.0,
            currency_code: "GBP".to_string(),
            cvv: "123".to_string(),
        }
    }

    fn messages(request: &PaymentRequest) -> Vec<String> {
        validate(request)
            .unwrap_err()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_valid_request_passes() {
        assert_eq!(validate(&valid_request()), Ok(()));
    }

    #[test]
    fn test_empty_request_reports_every_field_once() {
        let violations = validate(&PaymentRequest::default()).unwrap_err();

        let fields: Vec<&str> = violations.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![
                "firstName",
                "lastName",
                "cardNumber",
                "expiryDate",
                "amount",
                "currencyCode",
                "cvv"
            ]
        );
        assert!(violations.iter().all(|v| v.reason == "is required"));
    }

    #[test]
    fn test_multiple_failures_are_aggregated() {
        let mut request = valid_request();
        request.first_name = "J0hn".to_string();
        request.amount = -100.0;
        request.cvv = "12a".to_string();

        assert_eq!(
            messages(&request),
            vec![
                "firstName must only contain alphabetic characters",
                "amount must be greater than 0",
                "cvv must be numeric",
            ]
        );
    }

    #[test]
    fn test_validation_is_deterministic() {
        let mut request = valid_request();
        request.last_name = String::new();
        request.expiry_date = "1/29".to_string();

        assert_eq!(validate(&request), validate(&request));
    }

    #[rstest]
    #[case("12/29", true)]
    #[case("01/00", true)]
    #[case("09/35", true)]
    #[case("13/29", false)]
    #[case("00/29", false)]
    #[case("1/29", false)]
    #[case("12/2029", false)]
    #[case("12-29", false)]
    #[case("ab/cd", false)]
    fn test_expiry_date_format(#[case] expiry_date: &str, #[case] ok: bool) {
        let mut request = valid_request();
        request.expiry_date = expiry_date.to_string();

        match validate(&request) {
            Ok(()) => assert!(ok, "{expiry_date} should be rejected"),
            Err(violations) => {
                assert!(!ok, "{expiry_date} should be accepted");
                assert_eq!(
                    violations,
                    vec![Violation::new("expiryDate", "must be in MM/YY format")]
                );
            }
        }
    }

    #[rstest]
    #[case("4111111111111111", true)]
    #[case("4658587360641032", true)]
    #[case("5555555555554444", true)]
    #[case("371449635398431", true)]
    #[case("4111 1111 1111 1111", true)]
    #[case("1234567890123456", false)]
    #[case("4111111111111112", false)]
    #[case("4111-1111-1111-1111", false)]
    #[case("41 11111111111111", false)]
    #[case("42424242", false)]
    #[case("abcdabcdabcdabcd", false)]
    fn test_card_number(#[case] card_number: &str, #[case] ok: bool) {
        assert_eq!(is_credit_card(card_number), ok, "{card_number}");
    }

    #[rstest]
    #[case(0.0, Some("amount is required"))]
    #[case(-1.0, Some("amount must be greater than 0"))]
    #[case(f64::NAN, Some("amount is invalid"))]
    #[case(f64::INFINITY, Some("amount is invalid"))]
    #[case(0.01, None)]
    #[case(1000.0, None)]
    fn test_amount(#[case] amount: f64, #[case] expected: Option<&str>) {
        let mut request = valid_request();
        request.amount = amount;

        let actual = validate(&request)
            .err()
            .map(|violations| violations[0].to_string());
        assert_eq!(actual.as_deref(), expected);
    }

    #[rstest]
    #[case("GB", "currencyCode must be exactly 3 characters")]
    #[case("GBPP", "currencyCode must be exactly 3 characters")]
    #[case("G8P", "currencyCode must only contain alphabetic characters")]
    fn test_currency_code(#[case] currency_code: &str, #[case] expected: &str) {
        let mut request = valid_request();
        request.currency_code = currency_code.to_string();

        assert_eq!(messages(&request), vec![expected]);
    }

    #[rstest]
    #[case("12", "cvv must be exactly 3 characters")]
    #[case("1234", "cvv must be exactly 3 characters")]
    #[case("1.3", "cvv must be numeric")]
    fn test_cvv(#[case] cvv: &str, #[case] expected: &str) {
        let mut request = valid_request();
        request.cvv = cvv.to_string();

        assert_eq!(messages(&request), vec![expected]);
    }

    #[test]
    fn test_non_ascii_names_are_rejected() {
        let mut request = valid_request();
        request.last_name = "Doé".to_string();

        assert_eq!(
            messages(&request),
            vec!["lastName must only contain alphabetic characters"]
        );
    }
}
