use serde::{Deserialize, Serialize};

/// One step of the sequence. `Complete` is terminal with zero duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Void,
    Gravity,
    Synthesis,
    Assembly,
    Crystallization,
    Invention,
    Complete,
}

impl Phase {
    pub const ORDER: [Phase; 7] = [
        Phase::Void,
        Phase::Gravity,
        Phase::Synthesis,
        Phase::Assembly,
        Phase::Crystallization,
        Phase::Invention,
        Phase::Complete,
    ];

    /// Non-terminal phases, one indicator segment each.
    pub const ACTS: usize = Self::ORDER.len() - 1;

    pub fn duration_sec(self) -> f32 {
        match self {
            Phase::Void => 10.0,
            Phase::Complete => 0.0,
            _ => 15.0,
        }
    }

    pub fn next(self) -> Option<Phase> {
        let idx = self.index();
        Self::ORDER.get(idx + 1).copied()
    }

    pub fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|&p| p == self)
            .unwrap_or(Self::ORDER.len() - 1)
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Complete
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Void => "void",
            Phase::Gravity => "gravity",
            Phase::Synthesis => "synthesis",
            Phase::Assembly => "assembly",
            Phase::Crystallization => "crystallization",
            Phase::Invention => "invention",
            Phase::Complete => "complete",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::Phase;

    #[test]
    fn order_walks_to_terminal() {
        let mut phase = Phase::Void;
        let mut steps = 0;
        while let Some(next) = phase.next() {
            phase = next;
            steps += 1;
        }
        assert_eq!(phase, Phase::Complete);
        assert_eq!(steps, Phase::ORDER.len() - 1);
    }

    #[test]
    fn durations_are_nonnegative_and_complete_is_zero() {
        for phase in Phase::ORDER {
            assert!(phase.duration_sec() >= 0.0);
        }
        assert_eq!(Phase::Complete.duration_sec(), 0.0);
        assert_eq!(Phase::Void.duration_sec(), 10.0);
        assert_eq!(Phase::Gravity.duration_sec(), 15.0);
    }

    #[test]
    fn index_matches_order() {
        for (i, phase) in Phase::ORDER.iter().enumerate() {
            assert_eq!(phase.index(), i);
        }
    }
}
