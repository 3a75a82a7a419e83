use chrono::NaiveDate;
use flightgw::refunds::{self, AIRLINES, CANCELLATION_REASONS};

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date should be YYYY-MM-DD")
}

#[test]
fn test_generate_row_count() {
    assert_eq!(refunds::generate(0, 42).len(), 0);
    assert_eq!(refunds::generate(10, 42).len(), 10);
    assert_eq!(refunds::generate(250, 42).len(), 250);
}

#[test]
fn test_generate_is_deterministic() {
    let a = refunds::generate(50, 7);
    let b = refunds::generate(50, 7);
    assert_eq!(a, b);

    // Different seeds should not reproduce the same dataset
    let c = refunds::generate(50, 8);
    assert_ne!(a, c);
}

#[test]
fn test_pnr_format() {
    for record in refunds::generate(100, 42) {
        assert_eq!(record.pnr.len(), 6);
        assert!(
            record
                .pnr
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
            "unexpected PNR: {}",
            record.pnr
        );
    }
}

#[test]
fn test_amount_invariants() {
    for record in refunds::generate(200, 1) {
        assert!(
            record.ticket_amount >= 400.0 && record.ticket_amount < 8000.0,
            "ticket amount out of range: {}",
            record.ticket_amount
        );

        if record.cancellation_reason == "Non-refundable bilet" {
            assert_eq!(record.refund_amount, 0.0);
        } else {
            // Refundable rows pay back 50-100% of the ticket amount
            assert!(record.refund_amount <= record.ticket_amount + 0.01);
            assert!(record.refund_amount >= record.ticket_amount * 0.5 - 0.01);
        }

        // Amounts are rounded to 2 decimals
        let cents = record.ticket_amount * 100.0;
        assert!((cents - cents.round()).abs() < 1e-6);
    }
}

#[test]
fn test_sampled_values_come_from_fixed_lists() {
    for record in refunds::generate(200, 3) {
        assert!(AIRLINES.contains(&record.airline.as_str()));
        assert!(CANCELLATION_REASONS.contains(&record.cancellation_reason.as_str()));
    }
}

#[test]
fn test_date_invariants() {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2027, 11, 30).unwrap();

    for record in refunds::generate(200, 5) {
        let refund_date = parse_date(&record.refund_date);
        let expiry = parse_date(&record.credit_expiry_date);

        assert!(refund_date >= start && refund_date <= end);

        // Credit expiry follows the refund date by at most a year
        let days = (expiry - refund_date).num_days();
        assert!((0..=365).contains(&days), "expiry offset {} days", days);
    }
}

#[test]
fn test_csv_headers_and_shape() {
    let records = refunds::generate(10, 42);
    let csv = refunds::to_csv(&records).expect("CSV encoding should succeed");
    let text = String::from_utf8(csv).expect("CSV should be valid UTF-8");

    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "pnr_kodu,havayolu,bilet_tutari_tl,iade_edilen_tutar_tl,iade_tarihi,iptal_nedeni,son_kullanim_tarihi"
    );
    assert_eq!(lines.count(), 10);
}
