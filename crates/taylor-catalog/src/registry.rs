//! Function catalog registry
//!
//! Provides lookup of catalog entries by identifier. Entries are `'static`
//! so the registry only stores references and an index map.

use crate::definition::FunctionDefinition;
use crate::error::CatalogError;
use crate::functions;
use std::collections::HashMap;

/// Registry of every function the engine can expand
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Identifier to position in `functions`
    id_to_index: HashMap<&'static str, usize>,
    /// Entries in registration order
    functions: Vec<&'static FunctionDefinition>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            id_to_index: HashMap::new(),
            functions: Vec::new(),
        }
    }

    /// Catalog holding the reference set: `e^x`, `1/(1-x)`, `sin(x)`,
    /// `cos(x)` and `ln(1+x)`
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for definition in functions::STANDARD {
            let registered = catalog.register(definition);
            debug_assert!(registered.is_ok(), "duplicate id in the standard catalog: {}", definition.id);
        }
        catalog
    }

    /// Register an entry
    ///
    /// Fails with `DuplicateId` if the identifier is taken; the catalog is
    /// left unchanged in that case.
    pub fn register(&mut self, definition: &'static FunctionDefinition) -> Result<(), CatalogError> {
        let id = definition.id.as_str();
        if self.id_to_index.contains_key(id) {
            return Err(CatalogError::DuplicateId { id: id.to_string() });
        }

        self.id_to_index.insert(id, self.functions.len());
        self.functions.push(definition);
        Ok(())
    }

    /// Look up an entry by identifier
    pub fn get(&self, id: &str) -> Result<&'static FunctionDefinition, CatalogError> {
        self.id_to_index
            .get(id)
            .map(|&index| self.functions[index])
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.id_to_index.contains_key(id)
    }

    /// Identifiers in registration order
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.iter().map(|f| f.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static FunctionDefinition> + '_ {
        self.functions.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
