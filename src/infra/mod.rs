//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для `engine::RandomSource`.

pub mod rng;

pub use rng::{DeterministicRng, SystemRng};
