/// Length of sandwich that makes up one serving.
pub const SERVING_INCHES: f64 = 3.0;

/// Cost per serving reported when there are no servings to divide by.
pub const NO_SERVINGS_SENTINEL: f64 = -1.0;

/// Whole servings in `inches`, or the partial serving when there is less than one.
pub fn servings(inches: f64) -> f64 {
    let s = inches / SERVING_INCHES;
    if s < 1.0 {
        s
    } else {
        s.floor()
    }
}

pub fn cost_per_serving(servings: f64, total_cost: f64) -> f64 {
    if servings == 0.0 {
        return NO_SERVINGS_SENTINEL;
    }
    total_cost / servings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_servings_floor_from_three_inches() {
        assert_eq!(servings(3.0), 1.0);
        assert_eq!(servings(9.0), 3.0);
        assert_eq!(servings(10.0), 3.0);
        assert_eq!(servings(11.9), 3.0);
        assert_eq!(servings(12.0), 4.0);
    }

    #[test]
    fn test_servings_keeps_partial_serving() {
        assert_eq!(servings(0.0), 0.0);
        assert_eq!(servings(1.5), 0.5);
        assert_eq!(servings(2.0), 2.0 / 3.0);
    }

    #[test]
    fn test_cost_per_serving() {
        assert_eq!(cost_per_serving(0.0, 12.0), NO_SERVINGS_SENTINEL);
        assert_eq!(cost_per_serving(3.0, 10.0), 10.0 / 3.0);
        assert_eq!(cost_per_serving(0.5, 2.0), 4.0);
        assert_eq!(cost_per_serving(2.0, -4.0), -2.0);
    }
}
