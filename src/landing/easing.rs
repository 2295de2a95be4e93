use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    In,
    Out,
    InOut,
}

/// Easing curves, named after the ones the page was designed with
/// (`power4.out`, `sine.inOut`, `elastic.out(1, 0.5)`...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    Sine(Direction),
    /// `power0` is linear, `power1` quadratic up to `power4` quintic.
    Power(u8, Direction),
    BackOut(f64),
    ElasticOut { amplitude: f64, period: f64 },
}

impl Default for Ease {
    fn default() -> Self {
        // gsap's default
        Ease::Power(1, Direction::Out)
    }
}

impl Ease {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Ease::Linear => t,
            Ease::Sine(dir) => match dir {
                Direction::In => 1.0 - (t * PI / 2.0).cos(),
                Direction::Out => (t * PI / 2.0).sin(),
                Direction::InOut => -((PI * t).cos() - 1.0) / 2.0,
            },
            Ease::Power(power, dir) => {
                let exp = power as i32 + 1;
                match dir {
                    Direction::In => t.powi(exp),
                    Direction::Out => 1.0 - (1.0 - t).powi(exp),
                    Direction::InOut => {
                        if t < 0.5 {
                            (2.0 * t).powi(exp) / 2.0
                        } else {
                            1.0 - (2.0 * (1.0 - t)).powi(exp) / 2.0
                        }
                    }
                }
            }
            Ease::BackOut(overshoot) => {
                let t = t - 1.0;
                t * t * ((overshoot + 1.0) * t + overshoot) + 1.0
            }
            Ease::ElasticOut { amplitude, period } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let amplitude = amplitude.max(1.0);
                let shift = period / (2.0 * PI) * (1.0 / amplitude).asin();
                amplitude * 2f64.powf(-10.0 * t) * ((t - shift) * (2.0 * PI) / period).sin() + 1.0
            }
        }
    }

    pub const fn sine_in_out() -> Self {
        Ease::Sine(Direction::InOut)
    }

    pub const fn power_in(power: u8) -> Self {
        Ease::Power(power, Direction::In)
    }

    pub const fn power_out(power: u8) -> Self {
        Ease::Power(power, Direction::Out)
    }

    pub const fn power_in_out(power: u8) -> Self {
        Ease::Power(power, Direction::InOut)
    }
}
