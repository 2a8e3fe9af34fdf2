use std::collections::HashMap;

/// Interned identifiers plus the literal constants pool.
///
/// Constants are append-only and never deduplicated: the same literal text
/// appearing twice yields two distinct indices. Identifiers are interned
/// with dense ids in first-seen order, so `identifier_name(id)` is a plain
/// index.
#[derive(Debug, Default)]
pub struct SymbolTable {
    constants: Vec<String>,
    identifiers: HashMap<String, usize>,
    names: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text to the constants pool and return its index.
    pub fn add_constant(&mut self, text: impl Into<String>) -> usize {
        self.constants.push(text.into());
        self.constants.len() - 1
    }

    /// Id for `name`, interning it on first sight.
    pub fn get_identifier(&mut self, name: &str) -> usize {
        if let Some(&id) = self.identifiers.get(name) {
            return id;
        }
        let id = self.names.len();
        self.identifiers.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    pub fn constant(&self, index: usize) -> Option<&str> {
        self.constants.get(index).map(|s| s.as_str())
    }

    pub fn constants(&self) -> &[String] {
        &self.constants
    }

    pub fn identifier_name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(|s| s.as_str())
    }

    /// Interned identifiers in first-seen order.
    pub fn identifiers(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().enumerate().map(|(id, name)| (id, name.as_str()))
    }

    pub fn identifier_count(&self) -> usize {
        self.names.len()
    }
}
