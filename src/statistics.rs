use crate::algorithms::Algorithm;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    pub algorithm: Algorithm,
    pub expansions: usize,
    /// Steps on the reconstructed path, `None` when no path was found.
    pub path_length: Option<usize>,
    pub optimal_path_length: Option<usize>,
    pub elapsed: Duration,
}

impl SearchStatistics {
    pub fn found(&self) -> bool {
        self.path_length.is_some()
    }

    /// Path length relative to the optimum; 1.0 is a shortest path.
    pub fn efficiency(&self) -> Option<f64> {
        match (self.path_length, self.optimal_path_length) {
            (Some(0), Some(0)) => Some(1.0),
            (Some(len), Some(opt)) if opt > 0 => Some(len as f64 / opt as f64),
            _ => None,
        }
    }

    /// Steps beyond the optimum.
    pub fn extra_steps(&self) -> Option<usize> {
        Some(self.path_length?.saturating_sub(self.optimal_path_length?))
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Cells expanded: {}", self.expansions)?;
        match self.path_length {
            Some(len) => writeln!(f, "Path length: {}", len)?,
            None => writeln!(f, "Path length: no path found")?,
        }
        match self.optimal_path_length {
            Some(len) => writeln!(f, "Optimal path length: {}", len)?,
            None => writeln!(f, "Optimal path length: unreachable")?,
        }
        if let Some(efficiency) = self.efficiency() {
            writeln!(f, "Route efficiency: {:.3}", efficiency)?;
        }
        writeln!(f, "Search time: {:.2?}", self.elapsed)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(path_length: Option<usize>, optimal: Option<usize>) -> SearchStatistics {
        SearchStatistics {
            algorithm: Algorithm::Dfs,
            expansions: 10,
            path_length,
            optimal_path_length: optimal,
            elapsed: Duration::from_micros(5),
        }
    }

    #[test]
    fn efficiency_and_extra_steps() {
        let s = stats(Some(12), Some(8));
        assert_eq!(s.efficiency(), Some(1.5));
        assert_eq!(s.extra_steps(), Some(4));
        assert!(s.found());

        let trivial = stats(Some(0), Some(0));
        assert_eq!(trivial.efficiency(), Some(1.0));

        let missing = stats(None, None);
        assert_eq!(missing.efficiency(), None);
        assert_eq!(missing.extra_steps(), None);
        assert!(!missing.found());
    }

    #[test]
    fn display_mentions_missing_path() {
        let text = stats(None, Some(3)).to_string();
        assert!(text.contains("no path found"));
        assert!(text.contains("Optimal path length: 3"));
    }
}
