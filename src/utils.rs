/// Index and value of the largest element. Ties go to the first
/// occurrence, and NaN never wins over a number already seen.
pub fn argmax<I>(data: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = f64>,
{
    data.into_iter().enumerate().fold(None, |acc, (index, value)| {
        match acc {
            None => Some((index, value)),
            Some((_, max_val)) if value > max_val || max_val.is_nan() => Some((index, value)),
            _ => acc
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_basic() {
        let data = vec![1.0, 2.0, 5.0, 3.0, 4.0];
        assert_eq!(argmax(data), Some((2, 5.0)));
    }

    #[test]
    fn test_argmax_empty() {
        let data: Vec<f64> = Vec::new();
        assert_eq!(argmax(data), None);
    }

    #[test]
    fn test_argmax_negatives() {
        let data = vec![-5.0, -4.0, -3.0, -2.0, -1.0];
        assert_eq!(argmax(data), Some((4, -1.0)));
    }

    #[test]
    fn test_argmax_all_same() {
        let data = vec![2.0, 2.0, 2.0, 2.0];
        assert_eq!(argmax(data), Some((0, 2.0))); // It should return the first occurrence
    }

    #[test]
    fn test_argmax_tie_after_start() {
        let data = [1.0, 7.0, 3.0, 7.0];
        assert_eq!(argmax(data.iter().copied()), Some((1, 7.0)));
    }

    #[test]
    fn test_argmax_leading_nan() {
        let data = [f64::NAN, 1.0, 0.5];
        assert_eq!(argmax(data), Some((1, 1.0)));
    }
}
