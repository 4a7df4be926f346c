use crate::domain::models::event::{AdjustableParameter, BaselineEvent, CustomizedEvent};

/// Total price of a customization, as the sum of per-parameter deltas against
/// the baseline times the parameter's unit price, floored at zero.
///
/// Pure and deterministic. Callers recompute on every read; the result is the
/// single source of truth for both displayed and charged price. Videography
/// and added features do not contribute (observed product behaviour).
pub fn compute_total_price(baseline: &BaselineEvent, customized: &CustomizedEvent) -> i64 {
    let total: i64 = AdjustableParameter::ALL
        .iter()
        .map(|p| (customized.parameter(*p) - baseline.parameter(*p)) * p.unit_price())
        .sum();
    total.max(0)
}

/// Applies an externally resolved coupon discount. The result never drops
/// below zero and never exceeds the undiscounted total.
pub fn apply_discount(total_price: i64, discount_amount: i64) -> i64 {
    (total_price - discount_amount).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> BaselineEvent {
        BaselineEvent {
            id: "ev1".to_string(),
            package_name: "Wedding Classic".to_string(),
            category: "Wedding".to_string(),
            cart_image: "https://img.example/wedding.jpg".to_string(),
            images: vec![],
            photography_team_size: 2,
            duration_hours: 4,
            expected_attendance: 100,
            staff_team_size: 3,
            videography: true,
            features: vec!["Live Streaming".to_string()],
        }
    }

    #[test]
    fn test_unchanged_customization_costs_nothing() {
        let base = baseline();
        let custom = CustomizedEvent::from(&base);
        assert_eq!(compute_total_price(&base, &custom), 0);
    }

    #[test]
    fn test_duration_increment_prices_at_unit_rate() {
        let base = baseline();
        let mut custom = CustomizedEvent::from(&base);
        custom.duration_hours += 2;
        assert_eq!(compute_total_price(&base, &custom), 2000);
    }

    #[test]
    fn test_reset_returns_delta_to_zero() {
        let base = baseline();
        let mut custom = CustomizedEvent::from(&base);
        custom.duration_hours += 2;
        assert_eq!(compute_total_price(&base, &custom), 2000);

        custom.duration_hours = base.duration_hours;
        assert_eq!(compute_total_price(&base, &custom), 0);
    }

    #[test]
    fn test_deltas_sum_across_parameters() {
        let base = baseline();
        let mut custom = CustomizedEvent::from(&base);
        custom.photography_team_size += 1; // +300
        custom.expected_attendance += 10; // +500
        custom.staff_team_size += 2; // +1000
        assert_eq!(compute_total_price(&base, &custom), 1800);
    }

    #[test]
    fn test_total_never_negative() {
        let base = baseline();
        let mut custom = CustomizedEvent::from(&base);
        custom.photography_team_size = 1;
        custom.duration_hours = 1;
        custom.expected_attendance = 1;
        custom.staff_team_size = 1;
        assert_eq!(compute_total_price(&base, &custom), 0);
    }

    #[test]
    fn test_pricing_is_pure() {
        let base = baseline();
        let mut custom = CustomizedEvent::from(&base);
        custom.staff_team_size += 4;
        let first = compute_total_price(&base, &custom);
        let second = compute_total_price(&base, &custom);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pricing_monotonic_in_each_parameter() {
        let base = baseline();
        for param in AdjustableParameter::ALL {
            let mut lower = CustomizedEvent::from(&base);
            let mut higher = CustomizedEvent::from(&base);
            lower.set_parameter(param, base.parameter(param) + 1);
            higher.set_parameter(param, base.parameter(param) + 2);
            assert!(
                compute_total_price(&base, &lower) < compute_total_price(&base, &higher),
                "expected strictly increasing price for {}",
                param.name()
            );
        }
    }

    #[test]
    fn test_videography_and_features_do_not_price() {
        let base = baseline();
        let mut custom = CustomizedEvent::from(&base);
        custom.videography = !custom.videography;
        custom.features.push("Drone Coverage".to_string());
        assert_eq!(compute_total_price(&base, &custom), 0);
    }

    #[test]
    fn test_discount_applies() {
        assert_eq!(apply_discount(5000, 1200), 3800);
    }

    #[test]
    fn test_discount_floors_at_zero() {
        assert_eq!(apply_discount(1000, 2500), 0);
        assert_eq!(apply_discount(0, 0), 0);
    }

    #[test]
    fn test_zero_discount_is_identity() {
        assert_eq!(apply_discount(4200, 0), 4200);
    }
}
