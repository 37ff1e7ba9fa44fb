//! Intro Splash Layout
//!
//! Logo reveal timing and the decorative droplets. Both are computed once
//! when the splash mounts.

use rand::Rng;

/// Delay before the first logo character appears
const REVEAL_START_S: f64 = 0.5;
/// Extra delay per character, counted across both words
const REVEAL_STEP_S: f64 = 0.1;

/// Which brand word a glyph belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoWord {
    First,
    Second,
}

impl LogoWord {
    pub fn css_class(self) -> &'static str {
        match self {
            LogoWord::First => "nummi-char",
            LogoWord::Second => "news-char",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogoGlyph {
    pub ch: char,
    pub word: LogoWord,
    pub delay_s: f64,
}

/// Glyphs of both words with one continuous delay sequence.
pub fn logo_glyphs(first: &str, second: &str) -> Vec<LogoGlyph> {
    let first = first.chars().map(|ch| (ch, LogoWord::First));
    let second = second.chars().map(|ch| (ch, LogoWord::Second));
    first
        .chain(second)
        .enumerate()
        .map(|(k, (ch, word))| LogoGlyph {
            ch,
            word,
            delay_s: REVEAL_START_S + k as f64 * REVEAL_STEP_S,
        })
        .collect()
}

/// A decorative droplet with its frozen placement and timing
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Percent of viewport width
    pub left: f64,
    /// Percent of viewport height
    pub top: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Particle {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            delay_s: rng.gen_range(1.5..2.5),
            duration_s: rng.gen_range(0.5..1.0),
        }
    }

    pub fn scatter(count: usize, rng: &mut impl Rng) -> Vec<Self> {
        (0..count).map(|_| Self::random(&mut *rng)).collect()
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; animation-delay: {:.3}s; animation-duration: {:.3}s",
            self.left, self.top, self.delay_s, self.duration_s
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_delays_continue_across_words() {
        let glyphs = logo_glyphs("Nummi", "News");

        assert_eq!(glyphs.len(), 9);
        assert_eq!(glyphs[0].ch, 'N');
        assert_eq!(glyphs[4].word, LogoWord::First);
        assert_eq!(glyphs[5].ch, 'N');
        assert_eq!(glyphs[5].word, LogoWord::Second);
        assert!((glyphs[0].delay_s - 0.5).abs() < 1e-9);
        assert!((glyphs[5].delay_s - 1.0).abs() < 1e-9);
        assert!((glyphs[8].delay_s - 1.3).abs() < 1e-9);
        assert!(glyphs.windows(2).all(|w| w[1].delay_s > w[0].delay_s));
    }

    #[test]
    fn test_particles_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = Particle::scatter(50, &mut rng);

        assert_eq!(particles.len(), 50);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((1.5..2.5).contains(&p.delay_s));
            assert!((0.5..1.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn test_particle_style() {
        let p = Particle {
            left: 12.5,
            top: 80.0,
            delay_s: 2.0,
            duration_s: 0.75,
        };
        assert_eq!(
            p.style(),
            "left: 12.500%; top: 80.000%; animation-delay: 2.000s; animation-duration: 0.750s"
        );
    }
}
