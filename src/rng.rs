extern crate rand;

use self::rand::rngs::SmallRng;
use self::rand::{Rng, SeedableRng};

/// Per-task RNG stream. Renders are deterministic: each row (or task index)
/// seeds its own stream, so the image does not depend on thread scheduling.
pub struct RNG {
    rng: SmallRng
}

impl RNG {
    pub fn new(task_idx: usize) -> RNG {
        RNG { rng: SmallRng::seed_from_u64(task_idx as u64) }
    }

    pub fn random_float(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    pub fn random_uint(&mut self) -> usize {
        self.rng.gen::<u64>() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_is_deterministic_per_task_index() {
        let mut a = RNG::new(7);
        let mut b = RNG::new(7);
        assert_eq!(a.random_float(), b.random_float());
        assert_eq!(a.random_uint(), b.random_uint());
    }

    #[test]
    fn different_task_indices_diverge() {
        let mut a = RNG::new(1);
        let mut b = RNG::new(2);
        assert!(a.random_float() != b.random_float());
    }
}
