use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const DEPOSIT_LABEL: &str = "Zaliczka (50%)";
pub const BALANCE_LABEL: &str = "Pozostała kwota (50%)";

/// Days from plan generation until the deposit is due.
pub const DEPOSIT_DUE_AFTER_DAYS: u64 = 7;
/// Days before the trip start when the remaining balance is due.
pub const BALANCE_DUE_BEFORE_START_DAYS: u64 = 14;

/// One recorded payment as seen by the calculator. `payment_date` is kept for
/// reporting and never influences the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub amount_cents: Option<i64>,
    pub payment_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub total_paid: i64,
    pub total_due: i64,
    pub balance: i64,
    pub is_overpaid: bool,
    pub is_fully_paid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPlanInstallment {
    pub due_date: NaiveDate,
    pub amount_cents: i64,
    pub label: String,
}

/// Totals up the payments recorded against a trip price.
///
/// A missing price and missing payment amounts count as zero, so this never
/// fails. A negative `balance` means the booking is overpaid.
///
/// Totals are accumulated in `i128`; the flags compare the exact values and
/// only the reported amounts are clamped to the `i64` range.
pub fn calculate_balance(trip_price_cents: Option<i64>, payments: &[PaymentRecord]) -> PaymentSummary {
    let total_due = i128::from(trip_price_cents.unwrap_or(0));
    let total_paid: i128 = payments
        .iter()
        .map(|payment| i128::from(payment.amount_cents.unwrap_or(0)))
        .sum();

    PaymentSummary {
        total_paid: clamp_to_i64(total_paid),
        total_due: clamp_to_i64(total_due),
        balance: clamp_to_i64(total_due - total_paid),
        is_overpaid: total_paid > total_due,
        is_fully_paid: total_paid >= total_due,
    }
}

fn clamp_to_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value.is_negative() { i64::MIN } else { i64::MAX })
}

/// Builds the 50/50 deposit and balance schedule, dated from today's UTC date.
pub fn generate_payment_plan(
    trip_price_cents: Option<i64>,
    trip_start_date: Option<NaiveDate>,
) -> Vec<PaymentPlanInstallment> {
    generate_payment_plan_on(trip_price_cents, trip_start_date, Utc::now().date_naive())
}

/// Same as [`generate_payment_plan`] with an explicit generation date.
///
/// The balance due date is not checked against the deposit due date: a trip
/// starting in less than three weeks (or already started) yields a balance
/// installment due on or before the deposit.
pub fn generate_payment_plan_on(
    trip_price_cents: Option<i64>,
    trip_start_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<PaymentPlanInstallment> {
    let price = match trip_price_cents {
        Some(price) if price != 0 => price,
        _ => return Vec::new(),
    };

    // Half rounded up, remainder takes the rest so both sum to the price.
    let deposit_amount = price.div_euclid(2) + price.rem_euclid(2);
    let remainder_amount = price - deposit_amount;

    let deposit_due = shift_forward(today, DEPOSIT_DUE_AFTER_DAYS);
    let balance_due = trip_start_date
        .map(|start| shift_back(start, BALANCE_DUE_BEFORE_START_DAYS))
        .unwrap_or(deposit_due);

    vec![
        PaymentPlanInstallment {
            due_date: deposit_due,
            amount_cents: deposit_amount,
            label: DEPOSIT_LABEL.to_string(),
        },
        PaymentPlanInstallment {
            due_date: balance_due,
            amount_cents: remainder_amount,
            label: BALANCE_LABEL.to_string(),
        },
    ]
}

// chrono only returns None at the edges of its supported range.
fn shift_forward(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

fn shift_back(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn payment(amount_cents: Option<i64>, payment_date: NaiveDate) -> PaymentRecord {
        PaymentRecord {
            amount_cents,
            payment_date,
        }
    }

    #[test]
    fn empty_booking_without_price_is_fully_paid() {
        let summary = calculate_balance(Some(0), &[]);

        assert_eq!(
            summary,
            PaymentSummary {
                total_paid: 0,
                total_due: 0,
                balance: 0,
                is_overpaid: false,
                is_fully_paid: true,
            }
        );
    }

    #[test]
    fn missing_price_counts_as_zero() {
        let summary = calculate_balance(None, &[payment(Some(500), date(2025, 1, 1))]);

        assert_eq!(summary.total_due, 0);
        assert_eq!(summary.balance, -500);
        assert!(summary.is_overpaid);
    }

    #[test]
    fn two_payments_settle_the_price_exactly() {
        let payments = vec![
            payment(Some(4000), date(2025, 1, 1)),
            payment(Some(6000), date(2025, 1, 15)),
        ];

        let summary = calculate_balance(Some(10000), &payments);

        assert_eq!(
            summary,
            PaymentSummary {
                total_paid: 10000,
                total_due: 10000,
                balance: 0,
                is_overpaid: false,
                is_fully_paid: true,
            }
        );
    }

    #[test]
    fn overpayment_yields_negative_balance() {
        let summary = calculate_balance(Some(10000), &[payment(Some(12000), date(2025, 1, 1))]);

        assert_eq!(summary.balance, -2000);
        assert!(summary.is_overpaid);
        assert!(summary.is_fully_paid);
    }

    #[test]
    fn partial_payment_leaves_outstanding_balance() {
        let summary = calculate_balance(Some(10000), &[payment(Some(2500), date(2025, 3, 1))]);

        assert_eq!(summary.total_paid, 2500);
        assert_eq!(summary.balance, 7500);
        assert!(!summary.is_overpaid);
        assert!(!summary.is_fully_paid);
    }

    #[test]
    fn missing_amounts_are_skipped() {
        let payments = vec![
            payment(None, date(2025, 1, 1)),
            payment(Some(3000), date(2025, 1, 2)),
            payment(None, date(2025, 1, 3)),
        ];

        let summary = calculate_balance(Some(3000), &payments);

        assert_eq!(summary.total_paid, 3000);
        assert!(summary.is_fully_paid);
        assert!(!summary.is_overpaid);
    }

    #[test]
    fn payment_order_and_dates_do_not_matter() {
        let forward = vec![
            payment(Some(100), date(2025, 1, 1)),
            payment(Some(250), date(2024, 6, 1)),
            payment(Some(7), date(2026, 2, 2)),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();
        for record in &mut reversed {
            record.payment_date = date(2000, 1, 1);
        }

        assert_eq!(
            calculate_balance(Some(1000), &forward),
            calculate_balance(Some(1000), &reversed)
        );
    }

    #[test]
    fn summary_invariants_hold_across_inputs() {
        let prices = [None, Some(0), Some(1), Some(9999), Some(10000), Some(10001)];
        let amounts = [0_i64, 1, 5000, 10000, 12000];

        for price in prices {
            for first in amounts {
                for second in amounts {
                    let payments = vec![
                        payment(Some(first), date(2025, 1, 1)),
                        payment(Some(second), date(2025, 2, 1)),
                    ];
                    let summary = calculate_balance(price, &payments);

                    assert_eq!(summary.total_paid, first + second);
                    assert_eq!(summary.balance, summary.total_due - summary.total_paid);
                    assert_eq!(summary.is_fully_paid, summary.total_paid >= summary.total_due);
                    assert_eq!(summary.is_overpaid, summary.total_paid > summary.total_due);
                    if summary.is_overpaid {
                        assert!(summary.is_fully_paid);
                    }
                    if summary.is_fully_paid {
                        assert!(summary.balance <= 0);
                    }
                }
            }
        }
    }

    #[test]
    fn huge_payment_totals_do_not_overflow() {
        let payments = vec![
            payment(Some(i64::MAX), date(2025, 1, 1)),
            payment(Some(1), date(2025, 1, 2)),
        ];

        let summary = calculate_balance(Some(0), &payments);

        assert_eq!(summary.total_paid, i64::MAX);
        assert_eq!(summary.balance, i64::MIN);
        assert!(summary.is_overpaid);
        assert!(summary.is_fully_paid);
    }

    #[test]
    fn largest_price_compares_exactly() {
        let summary = calculate_balance(Some(i64::MAX), &[payment(Some(i64::MAX), date(2025, 1, 1))]);
        assert_eq!(summary.balance, 0);
        assert!(summary.is_fully_paid);
        assert!(!summary.is_overpaid);

        let unpaid = calculate_balance(Some(i64::MAX), &[]);
        assert_eq!(unpaid.balance, i64::MAX);
        assert!(!unpaid.is_fully_paid);
    }

    #[test]
    fn free_or_unpriced_trip_has_no_plan() {
        assert!(generate_payment_plan(Some(0), Some(date(2026, 6, 1))).is_empty());
        assert!(generate_payment_plan(None, Some(date(2026, 6, 1))).is_empty());
    }

    #[test]
    fn plan_without_start_date_shares_the_deposit_due_date() {
        let today = date(2026, 3, 10);

        let plan = generate_payment_plan_on(Some(10000), None, today);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].due_date, date(2026, 3, 17));
        assert_eq!(plan[1].due_date, date(2026, 3, 17));
        assert_eq!(plan[0].amount_cents, 5000);
        assert_eq!(plan[1].amount_cents, 5000);
        assert_eq!(plan[0].label, DEPOSIT_LABEL);
        assert_eq!(plan[1].label, BALANCE_LABEL);
    }

    #[test]
    fn odd_price_keeps_the_extra_grosz_in_the_deposit() {
        let today = date(2026, 3, 10);

        let plan = generate_payment_plan_on(Some(10001), Some(date(2026, 6, 1)), today);

        assert_eq!(plan[0].amount_cents, 5001);
        assert_eq!(plan[1].amount_cents, 5000);
        assert_eq!(plan.iter().map(|i| i.amount_cents).sum::<i64>(), 10001);
        assert_eq!(plan[0].due_date, date(2026, 3, 17));
        assert_eq!(plan[1].due_date, date(2026, 5, 18));
    }

    #[test]
    fn largest_price_splits_without_overflow() {
        let plan = generate_payment_plan_on(Some(i64::MAX), None, date(2026, 3, 10));

        assert_eq!(plan[0].amount_cents, i64::MAX / 2 + 1);
        assert_eq!(plan[1].amount_cents, i64::MAX / 2);
        assert_eq!(
            i128::from(plan[0].amount_cents) + i128::from(plan[1].amount_cents),
            i128::from(i64::MAX)
        );
    }

    #[test]
    fn plan_is_dated_from_the_current_day() {
        let before = Utc::now().date_naive();
        let plan = generate_payment_plan(Some(10001), Some(date(2026, 6, 1)));
        let after = Utc::now().date_naive();

        let deposit_due = plan[0].due_date;
        assert!(deposit_due == before + Days::new(7) || deposit_due == after + Days::new(7));
        assert_eq!(plan[1].due_date, date(2026, 5, 18));
        assert_eq!(plan[0].amount_cents + plan[1].amount_cents, 10001);
    }

    #[test]
    fn imminent_trip_balance_is_due_before_the_deposit() {
        let today = date(2026, 5, 25);

        let plan = generate_payment_plan_on(Some(8000), Some(date(2026, 6, 1)), today);

        assert_eq!(plan[0].due_date, date(2026, 6, 1));
        assert_eq!(plan[1].due_date, date(2026, 5, 18));
        assert!(plan[1].due_date < plan[0].due_date);
    }

    #[test]
    fn installments_serialize_with_plain_calendar_dates() {
        let plan = generate_payment_plan_on(Some(300), None, date(2026, 1, 1));

        let json = serde_json::to_value(&plan[0]).unwrap();

        assert_eq!(json["due_date"], "2026-01-08");
        assert_eq!(json["amount_cents"], 150);
        assert_eq!(json["label"], DEPOSIT_LABEL);
    }
}
