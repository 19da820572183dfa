pub fn mean(data: &[f64]) -> Option<f64> {
    match data.len() {
        0 => None,
        count => Some(data.iter().sum::<f64>() / count as f64),
    }
}

/// Population standard deviation (divides by `n`, not `n - 1`).
pub fn std_dev(data: &[f64]) -> Option<f64> {
    let data_mean = mean(data)?;
    let variance = data
        .iter()
        .map(|value| {
            let diff = data_mean - *value;

            diff * diff
        })
        .sum::<f64>()
        / data.len() as f64;

    Some(variance.sqrt())
}

/// Formats a score the way every score label shows it: two decimals and a
/// percent sign, or `--` when there is nothing to show.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v),
        None => String::from("--"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[100., 100., 100.]), Some(100.0));
        assert_eq!(mean(&[90., 110., 95., 105.]), Some(100.0));
    }

    #[test]
    fn test_mean_empty_slice() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_std_dev_is_population() {
        // sample std dev would be ~1.29, population is ~1.118
        let result = std_dev(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((result - 1.118033988749895).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_identical_radii() {
        assert_eq!(std_dev(&[42.0, 42.0, 42.0]), Some(0.0));
    }

    #[test]
    fn test_std_dev_empty_slice() {
        assert_eq!(std_dev(&[]), None);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(100.0)), "100.00%");
        assert_eq!(format_percent(Some(0.0)), "0.00%");
        assert_eq!(format_percent(Some(45.004)), "45.00%");
        assert_eq!(format_percent(Some(72.345678)), "72.35%");
        assert_eq!(format_percent(None), "--");
    }
}
