/// Unit-height Gaussian bump centered at `center` with width parameter
/// `width` acting as the standard deviation.
pub fn gaussian(x: f64, center: f64, width: f64) -> f64 {
    let offset = x - center;
    (-(offset * offset) / (2.0 * width * width)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_peaks_at_center() {
        assert_eq!(gaussian(300.0, 300.0, 100.0), 1.0);
    }

    #[test]
    fn gaussian_is_symmetric() {
        let left = gaussian(250.0, 300.0, 100.0);
        let right = gaussian(350.0, 300.0, 100.0);
        assert!((left - right).abs() < 1e-12);
        assert!(left < 1.0);
    }
}
