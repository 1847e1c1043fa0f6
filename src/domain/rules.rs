use super::CellState;

/// Trait for cellular automaton rules
/// Enables different rulesets beyond Conway's Game of Life
///
/// Every rule shipped here maps a live cell with zero live neighbors to
/// Dead. The sparse engine depends on that: a live cell with no live
/// neighbors never enters the frontier count map, so it can only die.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: CellState, neighbors: u8) -> CellState;
}

/// Conway's Game of Life (B3/S23)
/// The classic cellular automaton rules
#[derive(Clone, Copy)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn evolve(&self, current: CellState, neighbors: u8) -> CellState {
        match (current, neighbors) {
            (CellState::Live, 2 | 3) => CellState::Live,
            (CellState::Dead, 3) => CellState::Live,
            _ => CellState::Dead,
        }
    }
}

/// HighLife (B36/S23)
/// Like Conway's Life but cells with 6 neighbors are born
/// Creates replicators - patterns that create copies of themselves
#[derive(Clone, Copy)]
pub struct HighLifeRule;

impl Rule for HighLifeRule {
    fn name(&self) -> &'static str {
        "HighLife"
    }

    fn description(&self) -> &'static str {
        "B36/S23 - Replicators"
    }

    fn evolve(&self, current: CellState, neighbors: u8) -> CellState {
        match (current, neighbors) {
            (CellState::Live, 2 | 3) => CellState::Live,
            (CellState::Dead, 3 | 6) => CellState::Live,
            _ => CellState::Dead,
        }
    }
}

/// Seeds (B2/S)
/// Every cell dies each generation
/// Creates expanding patterns
#[derive(Clone, Copy)]
pub struct SeedsRule;

impl Rule for SeedsRule {
    fn name(&self) -> &'static str {
        "Seeds"
    }

    fn description(&self) -> &'static str {
        "B2/S - Exploding"
    }

    fn evolve(&self, current: CellState, neighbors: u8) -> CellState {
        match (current, neighbors) {
            (CellState::Dead, 2) => CellState::Live,
            _ => CellState::Dead,
        }
    }
}

/// Day & Night (B3678/S34678)
/// Symmetric rule - inverse of a pattern follows same rules
#[derive(Clone, Copy)]
pub struct DayAndNightRule;

impl Rule for DayAndNightRule {
    fn name(&self) -> &'static str {
        "Day&Night"
    }

    fn description(&self) -> &'static str {
        "B3678/S34678"
    }

    fn evolve(&self, current: CellState, neighbors: u8) -> CellState {
        match (current, neighbors) {
            (CellState::Live, 3 | 4 | 6 | 7 | 8) => CellState::Live,
            (CellState::Dead, 3 | 6 | 7 | 8) => CellState::Live,
            _ => CellState::Dead,
        }
    }
}

/// Get all available rules
pub fn all_rules() -> Vec<(&'static str, Box<dyn Rule>)> {
    vec![
        ("Conway", Box::new(ConwayRule) as Box<dyn Rule>),
        ("HighLife", Box::new(HighLifeRule)),
        ("Seeds", Box::new(SeedsRule)),
        ("Day&Night", Box::new(DayAndNightRule)),
    ]
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_rules() {
        let rule = ConwayRule;

        // Underpopulation
        assert_eq!(rule.evolve(CellState::Live, 0), CellState::Dead);
        assert_eq!(rule.evolve(CellState::Live, 1), CellState::Dead);

        // Survival
        assert_eq!(rule.evolve(CellState::Live, 2), CellState::Live);
        assert_eq!(rule.evolve(CellState::Live, 3), CellState::Live);

        // Overcrowding
        assert_eq!(rule.evolve(CellState::Live, 4), CellState::Dead);
        assert_eq!(rule.evolve(CellState::Live, 8), CellState::Dead);

        // Birth
        assert_eq!(rule.evolve(CellState::Dead, 3), CellState::Live);
        assert_eq!(rule.evolve(CellState::Dead, 2), CellState::Dead);
    }

    #[test]
    fn test_highlife_reproduction() {
        let rule = HighLifeRule;

        // HighLife specific: birth with 6 neighbors
        assert_eq!(rule.evolve(CellState::Dead, 6), CellState::Live);
        assert_eq!(rule.evolve(CellState::Dead, 3), CellState::Live);
    }

    #[test]
    fn test_seeds_always_dies() {
        let rule = SeedsRule;

        assert_eq!(rule.evolve(CellState::Live, 0), CellState::Dead);
        assert_eq!(rule.evolve(CellState::Live, 2), CellState::Dead);
        assert_eq!(rule.evolve(CellState::Dead, 2), CellState::Live);
        assert_eq!(rule.evolve(CellState::Dead, 3), CellState::Dead);
    }

    #[test]
    fn test_every_rule_kills_isolated_cells() {
        for (_, rule) in all_rules() {
            assert_eq!(rule.evolve(CellState::Live, 0), CellState::Dead);
        }
    }
}
