pub struct Statistics;

impl Statistics {
    pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
        let first = *values.first()?;
        let mut min = first;
        let mut max = first;
        for &v in values.iter().skip(1) {
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::Statistics;

    #[test]
    fn min_max_single_value() {
        assert_eq!(Statistics::min_max(&[7.0]), Some((7.0, 7.0)));
        assert_eq!(Statistics::min_max(&[]), None);
    }
}
