use crate::config::ConfigSection;
use crate::engines::generation::state::GenerationState;
use crate::error::{NameGenError, Result};
use std::collections::HashMap;
use std::fmt;

/// Typed getter/setter pair for one state field. `set: None` is read-only.
#[derive(Clone, Copy)]
pub enum Accessor {
    Integer {
        get: fn(&GenerationState) -> usize,
        set: Option<fn(&mut GenerationState, usize)>,
    },
    Float {
        get: fn(&GenerationState) -> f64,
        set: Option<fn(&mut GenerationState, f64)>,
    },
    Words {
        get: fn(&GenerationState) -> &[String],
    },
}

impl Accessor {
    fn integer(get: fn(&GenerationState) -> usize, set: fn(&mut GenerationState, usize)) -> Self {
        Accessor::Integer { get, set: Some(set) }
    }

    fn float(get: fn(&GenerationState) -> f64, set: fn(&mut GenerationState, f64)) -> Self {
        Accessor::Float { get, set: Some(set) }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Accessor::Integer { .. } => "integer",
            Accessor::Float { .. } => "float",
            Accessor::Words { .. } => "word list",
        }
    }

    pub fn is_writable(&self) -> bool {
        match self {
            Accessor::Integer { set, .. } => set.is_some(),
            Accessor::Float { set, .. } => set.is_some(),
            Accessor::Words { .. } => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(usize),
    Float(f64),
    Words(Vec<String>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Float(value) => write!(f, "{}", value),
            FieldValue::Words(words) => write!(f, "[{}]", words.join(", ")),
        }
    }
}

pub struct FieldEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub accessor: Accessor,
}

/// Name-addressed view of `GenerationState` used by `set` and `print`.
pub struct FieldRegistry {
    entries: Vec<FieldEntry>,
    index: HashMap<&'static str, usize>,
}

fn population(state: &GenerationState) -> &[String] {
    &state.population
}

fn survived(state: &GenerationState) -> &[String] {
    &state.survived
}

impl FieldRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        registry.register_parameters();
        registry.register_session_fields();
        registry
    }

    fn register(&mut self, entry: FieldEntry) {
        let position = self.entries.len();
        for key in std::iter::once(entry.name).chain(entry.aliases.iter().copied()) {
            let previous = self.index.insert(key, position);
            assert!(previous.is_none(), "field name {} registered twice", key);
        }
        self.entries.push(entry);
    }

    fn register_parameters(&mut self) {
        self.register(FieldEntry {
            name: "min_length",
            aliases: &["minLength"],
            description: "Shortest word length",
            accessor: Accessor::integer(|s| s.params.min_length, |s, v| s.params.min_length = v),
        });
        self.register(FieldEntry {
            name: "max_length",
            aliases: &["maxLength"],
            description: "Longest word length",
            accessor: Accessor::integer(|s| s.params.max_length, |s, v| s.params.max_length = v),
        });
        self.register(FieldEntry {
            name: "mutation_rate",
            aliases: &["mutationRate"],
            description: "Per-letter mutation probability, 0 to 1",
            accessor: Accessor::float(
                |s| s.params.mutation_rate,
                |s, v| s.params.mutation_rate = v,
            ),
        });
        self.register(FieldEntry {
            name: "population_size",
            aliases: &["populationSize"],
            description: "Words per generation",
            accessor: Accessor::integer(
                |s| s.params.population_size,
                |s, v| s.params.population_size = v,
            ),
        });
        self.register(FieldEntry {
            name: "random_selection",
            aliases: &["randomSelectionCount", "random_selection_count"],
            description: "Survivors drawn at random when fewer than 2 were selected",
            accessor: Accessor::integer(
                |s| s.params.random_selection,
                |s, v| s.params.random_selection = v,
            ),
        });
    }

    fn register_session_fields(&mut self) {
        self.register(FieldEntry {
            name: "generation",
            aliases: &[],
            description: "Current generation number (read-only)",
            accessor: Accessor::Integer {
                get: |s| s.generation,
                set: None,
            },
        });
        self.register(FieldEntry {
            name: "population",
            aliases: &[],
            description: "Current generation (read-only)",
            accessor: Accessor::Words { get: population },
        });
        self.register(FieldEntry {
            name: "survived",
            aliases: &["survivors"],
            description: "Words selected to breed (read-only)",
            accessor: Accessor::Words { get: survived },
        });
    }

    pub fn lookup(&self, name: &str) -> Result<&FieldEntry> {
        self.index
            .get(name)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| NameGenError::UnknownField(name.to_string()))
    }

    pub fn entries(&self) -> impl Iterator<Item = &FieldEntry> {
        self.entries.iter()
    }

    pub fn get(&self, state: &GenerationState, name: &str) -> Result<FieldValue> {
        let entry = self.lookup(name)?;
        Ok(match entry.accessor {
            Accessor::Integer { get, .. } => FieldValue::Integer(get(state)),
            Accessor::Float { get, .. } => FieldValue::Float(get(state)),
            Accessor::Words { get } => FieldValue::Words(get(state).to_vec()),
        })
    }

    /// Coerces `raw` to the field's type and stores it. Parameter changes
    /// that leave the parameters invalid are rolled back.
    pub fn set(&self, state: &mut GenerationState, name: &str, raw: &str) -> Result<FieldValue> {
        let entry = self.lookup(name)?;
        let previous = state.params.clone();

        let value = match entry.accessor {
            Accessor::Integer { set: Some(set), .. } => {
                let value = raw.trim().parse::<usize>().map_err(|_| {
                    NameGenError::InvalidArgument(format!(
                        "{} expects a whole number, got \"{}\"",
                        entry.name, raw
                    ))
                })?;
                set(state, value);
                FieldValue::Integer(value)
            }
            Accessor::Float { set: Some(set), .. } => {
                let value = raw.trim().parse::<f64>().map_err(|_| {
                    NameGenError::InvalidArgument(format!(
                        "{} expects a number, got \"{}\"",
                        entry.name, raw
                    ))
                })?;
                set(state, value);
                FieldValue::Float(value)
            }
            _ => {
                return Err(NameGenError::InvalidArgument(format!(
                    "{} is read-only",
                    entry.name
                )))
            }
        };

        if let Err(e) = state.params.validate() {
            state.params = previous;
            return Err(e);
        }

        log::debug!("{} set to {}", entry.name, value);
        Ok(value)
    }

    /// One line per field with its current value, for `help set`.
    pub fn describe(&self, state: &GenerationState) -> String {
        self.entries
            .iter()
            .map(|entry| {
                let aliases = if entry.aliases.is_empty() {
                    String::new()
                } else {
                    format!(" (also {})", entry.aliases.join(", "))
                };
                let current = match entry.accessor {
                    Accessor::Words { get } => format!("{} words", get(state).len()),
                    _ => self
                        .get(state, entry.name)
                        .map(|value| value.to_string())
                        .unwrap_or_default(),
                };
                format!(
                    "{}{} [{}] = {} - {}",
                    entry.name,
                    aliases,
                    entry.accessor.type_name(),
                    current,
                    entry.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}
