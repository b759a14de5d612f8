use bevy::prelude::*;
use rand::Rng;

/// Word pools for place-name synthesis.
const PREFIXES: &[&str] = &[
    "Man", "Tan", "Golden", "Black", "Iron", "Redbay", "New", "Old", "monkeys", "West", "North",
    "South", "Port", "East", "Fort", "Mount", "Ducker", "Tucker", "Goosey", "Autumn", "Manatee",
    "Diamond", "Topaz", "Lanez", "Claw", "Raven", "Pearl", "Tory",
];

const SUFFIXES: &[&str] = &[
    "City", "Valley", "Crown", "Hill", "Lewis", "Fjord", "Land", "thorne", "Copter", "Marsh",
    "Woody", "Thunder", "Gill",
];

const ADJECTIVES: &[&str] = &[
    "Happy", "Loud", "Memorable", "Dull", "Glory", "Chilly", "Meepy", "Moop", "Galary", "Kalos",
    "Pallet", "Kanto", "Omnivore", "Joyous", "Youth", "Chill", "Dark", "low", "ashen", "Shining",
    "Yeemcy", "Kimchi", "Galar", "Pika", "Leafy", "Poki", "Mane", "Tomas", "Init", "Python",
    "Dry", "Lord", "Lady", "Lamp", "Stormy", "Beast", "Monarch", "Shadow", "Dragon",
    "Destruction", "Eepy",
];

const PLACES: &[&str] = &["Ridge", "Valley", "Atoll", "Shore", "Peak"];

const NAMES: &[&str] = &[
    "Hill", "Crown", "Edge", "Bridges", "Natural", "Monica", "Cruz", "Clara",
];

/// The four concatenation patterns, chosen uniformly per name.
///
/// Word pairs join with no separator; the adjective pattern takes a
/// single space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameTemplate {
    PrefixSuffix,
    PrefixName,
    AdjectivePlace,
    NameSuffix,
}

impl NameTemplate {
    /// Returns all templates.
    pub fn all() -> &'static [NameTemplate] {
        &[
            Self::PrefixSuffix,
            Self::PrefixName,
            Self::AdjectivePlace,
            Self::NameSuffix,
        ]
    }
}

/// Pick one entry from a pool with a uniform draw.
fn pick<'a>(pool: &[&'a str], rng: &mut impl Rng) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Procedural place-name generator over fixed word pools.
///
/// Names are throwaway flavor: no memoization and no uniqueness guarantee,
/// so duplicates across calls are expected. The RNG is supplied by the
/// caller, keeping the name stream independent of the terrain seed — maps
/// reproduce, names need not.
#[derive(Resource)]
pub struct NameGenerator {
    prefixes: &'static [&'static str],
    suffixes: &'static [&'static str],
    adjectives: &'static [&'static str],
    places: &'static [&'static str],
    names: &'static [&'static str],
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self {
            prefixes: PREFIXES,
            suffixes: SUFFIXES,
            adjectives: ADJECTIVES,
            places: PLACES,
            names: NAMES,
        }
    }
}

impl NameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick one of the four templates uniformly.
    pub fn pick_template(&self, rng: &mut impl Rng) -> NameTemplate {
        let templates = NameTemplate::all();
        templates[rng.gen_range(0..templates.len())]
    }

    /// Generate one place name.
    pub fn generate(&self, rng: &mut impl Rng) -> String {
        let template = self.pick_template(rng);
        self.apply(template, rng)
    }

    /// Fill one template with two independent uniform pool picks.
    pub fn apply(&self, template: NameTemplate, rng: &mut impl Rng) -> String {
        match template {
            NameTemplate::PrefixSuffix => {
                format!("{}{}", pick(self.prefixes, rng), pick(self.suffixes, rng))
            }
            NameTemplate::PrefixName => {
                format!("{}{}", pick(self.prefixes, rng), pick(self.names, rng))
            }
            NameTemplate::AdjectivePlace => {
                format!("{} {}", pick(self.adjectives, rng), pick(self.places, rng))
            }
            NameTemplate::NameSuffix => {
                format!("{}{}", pick(self.names, rng), pick(self.suffixes, rng))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// True when `name` splits into one token from `left` followed by one
    /// token from `right`.
    fn splits_into(name: &str, left: &[&str], right: &[&str], separator: &str) -> bool {
        left.iter().any(|a| {
            let Some(rest) = name.strip_prefix(a) else {
                return false;
            };
            let Some(rest) = rest.strip_prefix(separator) else {
                return false;
            };
            right.contains(&rest)
        })
    }

    #[test]
    fn names_decompose_into_pool_tokens() {
        let generator = NameGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..10_000 {
            let template = generator.pick_template(&mut rng);
            let name = generator.apply(template, &mut rng);
            let ok = match template {
                NameTemplate::PrefixSuffix => splits_into(&name, PREFIXES, SUFFIXES, ""),
                NameTemplate::PrefixName => splits_into(&name, PREFIXES, NAMES, ""),
                NameTemplate::AdjectivePlace => splits_into(&name, ADJECTIVES, PLACES, " "),
                NameTemplate::NameSuffix => splits_into(&name, NAMES, SUFFIXES, ""),
            };
            assert!(ok, "name {:?} does not decompose for {:?}", name, template);
        }
    }

    #[test]
    fn template_choice_is_roughly_uniform() {
        let generator = NameGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut counts = std::collections::HashMap::new();

        let draws = 20_000usize;
        for _ in 0..draws {
            *counts.entry(generator.pick_template(&mut rng)).or_insert(0usize) += 1;
        }

        for template in NameTemplate::all() {
            let fraction = counts[template] as f64 / draws as f64;
            assert!(
                (fraction - 0.25).abs() < 0.05,
                "template {:?} drawn {:.3} of the time",
                template,
                fraction
            );
        }
    }

    #[test]
    fn adjective_names_take_one_space() {
        let generator = NameGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let name = generator.apply(NameTemplate::AdjectivePlace, &mut rng);
            assert_eq!(name.matches(' ').count(), 1, "name {:?}", name);
        }
    }

    #[test]
    fn generate_produces_nonempty_names() {
        let generator = NameGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..100 {
            assert!(!generator.generate(&mut rng).is_empty());
        }
    }
}
