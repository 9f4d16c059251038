use crate::config::AppConfig;
use crate::engines::generation::{
    crossover::CrossoverEngine,
    fields::{FieldRegistry, FieldValue},
    mutation::MutationEngine,
    state::{GenerationState, Phase},
    synthesis::WordSynthesizer,
};
use crate::error::{NameGenError, Result};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Drives a breeding session: owns the state, the engines and the random
/// source every random decision is drawn from.
pub struct GenerationCycleController<R: Rng = StdRng> {
    state: GenerationState,
    fields: FieldRegistry,
    synthesizer: WordSynthesizer,
    crossover: CrossoverEngine,
    mutation: MutationEngine,
    rng: R,
}

impl GenerationCycleController<StdRng> {
    /// Seeded from `session.seed` when set, from entropy otherwise.
    pub fn from_config(config: &AppConfig) -> Self {
        let rng = match config.session.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GenerationCycleController<R> {
    pub fn with_rng(config: &AppConfig, rng: R) -> Self {
        let session = &config.session;
        Self {
            state: GenerationState::new(config.generator.clone()),
            fields: FieldRegistry::new(),
            synthesizer: WordSynthesizer::new(session.max_consonant_run, session.max_attempts),
            crossover: CrossoverEngine::new(session.max_attempts),
            mutation: MutationEngine::new(session.max_attempts),
            rng,
        }
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    pub fn fields(&self) -> &FieldRegistry {
        &self.fields
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Fresh random population; survivors are cleared.
    pub fn initialize_population(&mut self) -> Result<()> {
        let params = &self.state.params;
        let population = (0..params.population_size)
            .map(|_| {
                self.synthesizer
                    .synthesize(params.min_length, params.max_length, &mut self.rng)
            })
            .collect::<Result<Vec<_>>>()?;

        self.state.population = population;
        self.state.survived.clear();
        self.state.generation = 1;
        log::info!("Generation 1 synthesized ({} words)", self.state.population.len());
        Ok(())
    }

    /// New population plus `random_selection` survivors drawn from it with
    /// replacement, so the first `nextgen` can breed straight away.
    pub fn start_session(&mut self) -> Result<()> {
        self.initialize_population()?;
        for _ in 0..self.state.params.random_selection {
            let index = self.rng.gen_range(0..self.state.population.len());
            let word = self.state.population[index].clone();
            self.state.survived.push(word);
        }
        log::debug!("Session seeded with survivors {:?}", self.state.survived);
        Ok(())
    }

    /// Marks a word as a survivor, by exact text or by population index.
    pub fn select(&mut self, token: &str) -> Result<String> {
        let chosen = if self.state.population.iter().any(|word| word == token) {
            token.to_string()
        } else {
            token
                .parse::<usize>()
                .ok()
                .and_then(|index| self.state.population.get(index).cloned())
                .ok_or_else(|| NameGenError::Selection(token.to_string()))?
        };

        self.state.survived.push(chosen.clone());
        log::debug!("Selected \"{}\" ({} survivors)", chosen, self.state.survived.len());
        Ok(chosen)
    }

    /// Breeds the next generation from the survivors.
    ///
    /// With fewer than 2 survivors, random words are moved out of the
    /// population into the survivors until there are `random_selection` of
    /// them. Only the trigger is fixed at 2; the fill target is the
    /// parameter. On failure the population and survivors are restored to
    /// what they were before the call.
    pub fn advance_generation(&mut self) -> Result<()> {
        let population = self.state.population.clone();
        let survived = self.state.survived.clone();

        if let Err(e) = self.fill_and_populate() {
            self.state.population = population;
            self.state.survived = survived;
            return Err(e);
        }

        self.state.generation += 1;
        log::info!(
            "Generation {} bred from {} survivors",
            self.state.generation,
            self.state.survived.len()
        );
        Ok(())
    }

    fn fill_and_populate(&mut self) -> Result<()> {
        if self.state.survived.len() < 2 {
            while self.state.survived.len() < self.state.params.random_selection {
                if self.state.population.is_empty() {
                    return Err(NameGenError::InsufficientSurvivors {
                        available: self.state.survived.len(),
                    });
                }
                let index = self.rng.gen_range(0..self.state.population.len());
                let word = self.state.population.remove(index);
                log::debug!("Randomly kept \"{}\"", word);
                self.state.survived.push(word);
            }
        }

        self.populate()
    }

    /// Replaces the population with `population_size` mutated crossovers of
    /// survivor pairs. If breeding fails, the old population and the survivor
    /// order are kept.
    pub fn populate(&mut self) -> Result<()> {
        if self.state.survived.len() < 2 {
            return Err(NameGenError::InsufficientSurvivors {
                available: self.state.survived.len(),
            });
        }

        let survived = self.state.survived.clone();
        let mut next = Vec::new();
        for _ in 0..self.state.params.population_size {
            let first_index = self.rng.gen_range(0..self.state.survived.len());
            let first = self.state.survived.remove(first_index);
            let second_index = self.rng.gen_range(0..self.state.survived.len());
            let second = self.state.survived[second_index].clone();

            let child = self.breed(&first, &second);
            self.state.survived.push(first);
            match child {
                Ok(child) => next.push(child),
                Err(e) => {
                    self.state.survived = survived;
                    return Err(e);
                }
            }
        }

        self.state.population = next;
        Ok(())
    }

    fn breed(&mut self, first: &str, second: &str) -> Result<String> {
        let params = &self.state.params;
        let child = self.crossover.crossover(
            first,
            second,
            params.min_length,
            params.max_length,
            &mut self.rng,
        )?;
        self.mutation.mutate(
            &child,
            params.mutation_rate,
            params.min_length,
            params.max_length,
            &mut self.rng,
        )
    }

    /// Rebreeds the current generation from the unchanged survivors.
    pub fn redo(&mut self) -> Result<()> {
        self.populate()?;
        log::info!("Generation {} rebred", self.state.generation);
        Ok(())
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<FieldValue> {
        self.fields.set(&mut self.state, name, value)
    }

    pub fn get_field(&self, name: &str) -> Result<FieldValue> {
        self.fields.get(&self.state, name)
    }

    pub fn list_population(&self) -> String {
        self.state.population_list()
    }
}
