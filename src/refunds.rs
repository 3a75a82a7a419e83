//! Synthetic airline refund dataset generator.
//!
//! Standalone sampling utility with no interface to the gateway: a seeded RNG
//! produces a fixed-shape tabular dataset of ticket refunds for demos and
//! testing. The same seed always yields the same dataset.

use chrono::{Duration, NaiveDate};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Res, types::RefundRecord};

/// Airlines sampled uniformly for each row.
pub const AIRLINES: [&str; 5] = [
    "Turkish Airlines",
    "Pegasus",
    "AnadoluJet",
    "SunExpress",
    "AJet",
];

/// Cancellation reasons. The first entry is reserved for non-refundable
/// tickets and never drawn for refundable ones.
pub const CANCELLATION_REASONS: [&str; 8] = [
    "Non-refundable bilet",
    "Yolcu isteği",
    "Sağlık sorunu",
    "Uçuş iptali",
    "Yanlış tarih seçimi",
    "Plan değişikliği",
    "Hava koşulları",
    "Vize sorunu",
];

const PNR_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const PNR_LEN: usize = 6;

/// Share of rows that are non-refundable (refund amount 0).
const NON_REFUNDABLE_RATE: f64 = 0.3;

/// Maximum days between the refund date and the credit expiry date.
const MAX_CREDIT_DAYS: i64 = 365;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn random_pnr(rng: &mut StdRng) -> String {
    (0..PNR_LEN)
        .map(|_| PNR_CHARSET[rng.random_range(0..PNR_CHARSET.len())] as char)
        .collect()
}

/// Generates `count` synthetic refund rows from the given seed.
///
/// Sampling rules:
/// - ticket amount uniform in 400.00..8000.00 TL, rounded to 2 decimals
/// - 30% of rows are non-refundable: refund 0.00 and a fixed reason
/// - otherwise the refund is 50-100% of the ticket amount and the reason is
///   drawn from the remaining reasons
/// - refund date uniform between 2023-01-01 and 2027-11-30
/// - credit expiry 0..=365 days after the refund date
///
/// The generator is fully deterministic: equal `count` and `seed` produce an
/// identical dataset.
pub fn generate(count: usize, seed: u64) -> Vec<RefundRecord> {
    let mut rng = StdRng::seed_from_u64(seed);

    let start_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let end_date = NaiveDate::from_ymd_opt(2027, 11, 30).unwrap();
    let date_span = (end_date - start_date).num_days();

    (0..count)
        .map(|_| {
            let pnr = random_pnr(&mut rng);
            let airline = AIRLINES[rng.random_range(0..AIRLINES.len())].to_string();
            let ticket_amount = round2(rng.random_range(400.0..8000.0));

            let (refund_amount, cancellation_reason) = if rng.random_bool(NON_REFUNDABLE_RATE) {
                (0.0, CANCELLATION_REASONS[0].to_string())
            } else {
                let share = rng.random_range(0.5..=1.0);
                let reason_idx = rng.random_range(1..CANCELLATION_REASONS.len());
                (
                    round2(ticket_amount * share),
                    CANCELLATION_REASONS[reason_idx].to_string(),
                )
            };

            let refund_date = start_date + Duration::days(rng.random_range(0..=date_span));
            let credit_expiry = refund_date + Duration::days(rng.random_range(0..=MAX_CREDIT_DAYS));

            RefundRecord {
                pnr,
                airline,
                ticket_amount,
                refund_amount,
                refund_date: refund_date.format("%Y-%m-%d").to_string(),
                cancellation_reason,
                credit_expiry_date: credit_expiry.format("%Y-%m-%d").to_string(),
            }
        })
        .collect()
}

/// Encodes records as CSV with the original dataset's column headers.
pub fn to_csv(records: &[RefundRecord]) -> Res<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    Ok(writer.into_inner()?)
}
