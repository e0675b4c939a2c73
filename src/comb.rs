pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut result = 1;
    // result stays exact: after i steps it equals C(n, i), and
    // C(n, i) * (n - i) is always divisible by i + 1.
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(1, 0), 1);
        assert_eq!(binomial(1, 1), 1);
        assert_eq!(binomial(4, 2), 6);
        assert_eq!(binomial(4, 4), 1);
        assert_eq!(binomial(2, 3), 0);
        assert_eq!(binomial(52, 5), 2_598_960);
    }
}
