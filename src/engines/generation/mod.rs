pub mod alphabet;
pub mod sampling;
pub mod synthesis;
pub mod crossover;
pub mod mutation;
pub mod state;
pub mod fields;
pub mod controller;

pub use alphabet::{contains_vowel, CONSONANTS, VOWELS};
pub use synthesis::WordSynthesizer;
pub use crossover::{CrossoverEngine, CrossoverPlan};
pub use mutation::MutationEngine;
pub use state::{GenerationState, Phase};
pub use fields::{FieldRegistry, FieldValue};
pub use controller::GenerationCycleController;
