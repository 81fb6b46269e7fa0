//! Symbol definitions and uniform draws

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A drawable icon value used to populate a roll's results
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Display glyph (e.g. "🍒")
    pub icon: String,
}

impl Symbol {
    /// Create a symbol from its glyph
    pub fn new(icon: impl Into<String>) -> Self {
        Self { icon: icon.into() }
    }
}

/// Fixed set of glyphs a machine draws from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolSet {
    /// Symbols in draw order (order only matters for display)
    pub symbols: Vec<Symbol>,
}

impl SymbolSet {
    /// Create a set from explicit symbols
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Standard fruit-machine glyph set
    pub fn standard() -> Self {
        Self::new(
            ["🍒", "🍋", "🍊", "🍉", "🔔", "⭐"]
                .into_iter()
                .map(Symbol::new)
                .collect(),
        )
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get symbol by index
    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    /// Draw one symbol uniformly at random.
    ///
    /// An empty set yields a blank symbol; `MachineConfig::validate` rejects
    /// empty sets before a machine is built.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Symbol {
        if self.symbols.is_empty() {
            return Symbol::new("");
        }
        self.symbols[rng.random_range(0..self.symbols.len())].clone()
    }

    /// Draw `count` independent uniform symbols
    pub fn draw_line<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<Symbol> {
        (0..count).map(|_| self.draw(rng)).collect()
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_standard_set() {
        let set = SymbolSet::standard();
        assert!(!set.is_empty());
        assert_eq!(set.len(), 6);
        assert_eq!(set.get(0), Some(&Symbol::new("🍒")));
    }

    #[test]
    fn test_draw_is_member() {
        let set = SymbolSet::standard();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let symbol = set.draw(&mut rng);
            assert!(set.symbols.contains(&symbol));
        }
    }

    #[test]
    fn test_draw_line_count() {
        let set = SymbolSet::standard();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(set.draw_line(&mut rng, 3).len(), 3);
        assert!(set.draw_line(&mut rng, 0).is_empty());
    }

    #[test]
    fn test_seeded_draws_repeat() {
        let set = SymbolSet::standard();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(set.draw_line(&mut a, 10), set.draw_line(&mut b, 10));
    }

    #[test]
    fn test_empty_set_draws_blank() {
        let set = SymbolSet::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(set.draw(&mut rng), Symbol::new(""));
    }
}
