use crate::config::GeneratorConfig;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No population has been generated yet.
    Empty,
    /// A population exists; survivors may still be empty.
    Active,
}

/// Everything one session breeds with. Owned by the cycle controller.
#[derive(Debug, Clone, Default)]
pub struct GenerationState {
    pub population: Vec<String>,
    /// Words chosen to breed; may hold duplicates.
    pub survived: Vec<String>,
    pub params: GeneratorConfig,
    /// 1-based; 0 until the first population exists.
    pub generation: usize,
}

impl GenerationState {
    pub fn new(params: GeneratorConfig) -> Self {
        Self {
            population: Vec::new(),
            survived: Vec::new(),
            params,
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.population.is_empty() {
            Phase::Empty
        } else {
            Phase::Active
        }
    }

    /// `0. word` lines in population order.
    pub fn population_list(&self) -> String {
        self.population
            .iter()
            .enumerate()
            .map(|(i, word)| format!("{}. {}", i, word))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
