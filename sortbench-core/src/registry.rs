//! Ordered registry of named sort algorithms.
//!
//! The display name is data held next to the sort function, so reports never
//! depend on how an algorithm is dispatched.

use std::fmt;

use crate::algorithms::{self, AlgorithmTraits, SortFn};
use crate::error::{SortBenchError, SortBenchResult};
use crate::rng::RandomSource;

/// A named sort function with its structural traits.
#[derive(Clone)]
pub struct AlgorithmDescriptor {
    name: String,
    traits: AlgorithmTraits,
    sort_fn: SortFn,
}

impl AlgorithmDescriptor {
    /// Create a new descriptor.
    pub fn new(name: impl Into<String>, traits: AlgorithmTraits, sort_fn: SortFn) -> Self {
        Self {
            name: name.into(),
            traits,
            sort_fn,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn traits(&self) -> AlgorithmTraits {
        self.traits
    }

    /// Sort `data` ascending in place.
    pub fn sort(&self, data: &mut [u32], value_bound: u32, rng: &mut RandomSource) {
        (self.sort_fn)(data, value_bound, rng);
    }
}

impl fmt::Debug for AlgorithmDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmDescriptor")
            .field("name", &self.name)
            .field("traits", &self.traits)
            .finish_non_exhaustive()
    }
}

/// Fixed, ordered list of algorithms supplied to the runner.
#[derive(Debug, Clone, Default)]
pub struct AlgorithmRegistry {
    algorithms: Vec<AlgorithmDescriptor>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// The four built-in algorithms in benchmark order.
    pub fn standard() -> Self {
        let algorithms = vec![
            AlgorithmDescriptor::new(
                "MergeSort",
                AlgorithmTraits {
                    stable: true,
                    in_place: false,
                    bound_sensitive: false,
                },
                algorithms::merge_sort_u32,
            ),
            AlgorithmDescriptor::new(
                "RandomizedQuickSort",
                AlgorithmTraits {
                    stable: false,
                    in_place: true,
                    bound_sensitive: false,
                },
                algorithms::randomized_quick_sort_u32,
            ),
            AlgorithmDescriptor::new(
                "CountingSort",
                AlgorithmTraits {
                    stable: true,
                    in_place: false,
                    bound_sensitive: true,
                },
                algorithms::counting_sort_u32,
            ),
            AlgorithmDescriptor::new(
                "HeapSort",
                AlgorithmTraits {
                    stable: false,
                    in_place: true,
                    bound_sensitive: false,
                },
                algorithms::heap_sort_u32,
            ),
        ];
        Self { algorithms }
    }

    /// Register an algorithm at the end of the list.
    /// Fails fast if the name is already taken.
    pub fn register(&mut self, descriptor: AlgorithmDescriptor) -> SortBenchResult<()> {
        if self.contains(descriptor.name()) {
            return Err(SortBenchError::AlgorithmAlreadyRegistered(
                descriptor.name().to_string(),
            ));
        }

        self.algorithms.push(descriptor);
        Ok(())
    }

    /// Look up an algorithm by name, case-insensitively.
    pub fn get(&self, name: &str) -> SortBenchResult<&AlgorithmDescriptor> {
        self.algorithms
            .iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SortBenchError::AlgorithmNotFound(name.to_string()))
    }

    /// Check if an algorithm exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// Build a registry holding only the named algorithms, in registry order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> SortBenchResult<Self> {
        for name in names {
            self.get(name.as_ref())?;
        }

        let algorithms = self
            .algorithms
            .iter()
            .filter(|a| {
                names
                    .iter()
                    .any(|n| a.name().eq_ignore_ascii_case(n.as_ref()))
            })
            .cloned()
            .collect();
        Ok(Self { algorithms })
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmDescriptor> {
        self.algorithms.iter()
    }

    /// Get the names of all algorithms, in order.
    pub fn names(&self) -> Vec<&str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    /// Get the number of registered algorithms.
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn std_sort(data: &mut [u32], _bound: u32, _rng: &mut RandomSource) {
        data.sort();
    }

    fn std_traits() -> AlgorithmTraits {
        AlgorithmTraits {
            stable: true,
            in_place: false,
            bound_sensitive: false,
        }
    }

    #[test]
    fn test_standard_order() {
        let registry = AlgorithmRegistry::standard();
        assert_eq!(
            registry.names(),
            vec!["MergeSort", "RandomizedQuickSort", "CountingSort", "HeapSort"]
        );
        assert_eq!(registry.len(), 4);
        assert!(registry.get("CountingSort").unwrap().traits().bound_sensitive);
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = AlgorithmRegistry::new();
        assert!(registry.is_empty());

        registry
            .register(AlgorithmDescriptor::new("StdSort", std_traits(), std_sort))
            .unwrap();
        assert!(registry.contains("stdsort"));

        let mut rng = RandomSource::seeded(1);
        let mut data = vec![3, 1, 2];
        registry.get("StdSort").unwrap().sort(&mut data, 3, &mut rng);
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = AlgorithmRegistry::standard();
        let result = registry.register(AlgorithmDescriptor::new(
            "HeapSort",
            std_traits(),
            std_sort,
        ));
        assert!(matches!(
            result,
            Err(SortBenchError::AlgorithmAlreadyRegistered(_))
        ));
    }

    #[test]
    fn test_select_keeps_registry_order() {
        let registry = AlgorithmRegistry::standard();
        let subset = registry.select(&["heapsort", "MergeSort"]).unwrap();
        assert_eq!(subset.names(), vec!["MergeSort", "HeapSort"]);
    }

    #[test]
    fn test_select_unknown() {
        let registry = AlgorithmRegistry::standard();
        let result = registry.select(&["BogoSort"]);
        assert!(matches!(result, Err(SortBenchError::AlgorithmNotFound(_))));
    }
}
