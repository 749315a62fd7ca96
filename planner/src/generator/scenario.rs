use crate::workflow::config::ScenarioConfig;
use dilemmacore::params::ParamField;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for drawing random in-range scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 100,
            seed: 0,
        }
    }
}

fn draw(rng: &mut StdRng, field: ParamField) -> f64 {
    let (min, max) = field.range();
    let value: f64 = rng.gen_range(min..=max);
    // entries carry two decimals at most
    ((value * 100.0).round() / 100.0).clamp(min, max)
}

pub fn build_scenarios(config: &GeneratorConfig) -> Vec<ScenarioConfig> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.count)
        .map(|index| ScenarioConfig {
            name: Some(format!("random-{}", index + 1)),
            distance: draw(&mut rng, ParamField::Distance),
            length: draw(&mut rng, ParamField::Length),
            max_acceleration: draw(&mut rng, ParamField::MaxAcceleration),
            min_acceleration: draw(&mut rng, ParamField::MinAcceleration),
            yellow_duration: draw(&mut rng, ParamField::YellowDuration),
            current_speed: draw(&mut rng, ParamField::CurrentSpeed),
            speed_limit: draw(&mut rng, ParamField::SpeedLimit),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_builds_requested_count_in_range() {
        let scenarios = build_scenarios(&GeneratorConfig {
            count: 50,
            seed: 7,
        });
        assert_eq!(scenarios.len(), 50);
        for scenario in &scenarios {
            assert!(scenario.to_params().is_ok(), "{:?}", scenario);
        }
    }

    #[test]
    fn generator_is_deterministic_per_seed() {
        let config = GeneratorConfig { count: 5, seed: 42 };
        assert_eq!(build_scenarios(&config), build_scenarios(&config));
        let other = GeneratorConfig { count: 5, seed: 43 };
        assert_ne!(build_scenarios(&config), build_scenarios(&other));
    }
}
