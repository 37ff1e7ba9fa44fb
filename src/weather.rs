//! Weather Pick
//!
//! One reading chosen at random when the header mounts.

use nummi_content::WeatherReading;
use rand::seq::SliceRandom;
use rand::Rng;

pub fn pick<'a>(readings: &'a [WeatherReading], rng: &mut impl Rng) -> Option<&'a WeatherReading> {
    readings.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nummi_content::default_readings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_comes_from_list() {
        let readings = default_readings();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let reading = pick(&readings, &mut rng).unwrap();
            assert!(readings.contains(reading));
        }
    }

    #[test]
    fn test_pick_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick(&[], &mut rng).is_none());
    }
}
