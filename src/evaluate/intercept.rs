use crate::config::{FakeDiceConfig, UserRole};
use crate::error::ParseError;
use crate::parse::Predicate;

use super::roll::{rewrite, RewriteSummary, RolledDice};

/// What happened to a roll that went through `intercept()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interception {
    /// The module is switched off.
    Disabled,
    /// A player rolled and player modification is off.
    NotPermitted,
    /// No target is configured.
    NoTarget,
    /// The configured target could not be parsed, the roll was left alone.
    InvalidTarget(ParseError),
    Rewritten(RewriteSummary),
}

impl Interception {
    pub fn was_rewritten(&self) -> bool {
        matches!(self, Interception::Rewritten(_))
    }
}

/// Runs one roll through the module: checks whether `role` may have its roll
/// changed, parses the configured target once and rewrites every die.
pub fn intercept(
    config: &FakeDiceConfig,
    role: UserRole,
    rolled: &mut RolledDice,
    unit: &mut impl FnMut() -> f64,
) -> Interception {
    if !config.enabled {
        return Interception::Disabled;
    }
    if !config.should_modify(role) {
        tracing::debug!("Leaving {role:?} roll alone, player modification is off");
        return Interception::NotPermitted;
    }

    let target = config.target.trim();
    if target.is_empty() {
        return Interception::NoTarget;
    }

    let predicate = match Predicate::parse(target) {
        Ok(predicate) => predicate,
        Err(err) => {
            tracing::warn!("Not modifying roll: {err}");
            return Interception::InvalidTarget(err);
        }
    };

    tracing::debug!("Modifying {role:?} roll {rolled} to {predicate}");
    Interception::Rewritten(rewrite(rolled, &predicate, unit))
}

#[cfg(test)]
mod tests {
    use crate::evaluate::roll::RolledDie;

    use super::*;

    fn two_d20() -> RolledDice {
        RolledDice::new(vec![RolledDie::new(20, vec![2, 3])], 1)
    }

    fn config(enabled: bool, player_enabled: bool, target: &str) -> FakeDiceConfig {
        FakeDiceConfig {
            enabled,
            player_enabled,
            target: target.to_string(),
        }
    }

    #[test]
    fn test_disabled() {
        let mut rolled = two_d20();
        let res = intercept(&config(false, true, ">=10"), UserRole::Gm, &mut rolled, &mut || 0.0);

        assert_eq!(res, Interception::Disabled);
        assert_eq!(rolled, two_d20());
    }

    #[test]
    fn test_player_not_permitted() {
        let mut rolled = two_d20();
        let res = intercept(&config(true, false, ">=10"), UserRole::Player, &mut rolled, &mut || 0.0);

        assert_eq!(res, Interception::NotPermitted);
        assert_eq!(rolled, two_d20());
    }

    #[test]
    fn test_player_permitted() {
        let mut rolled = two_d20();
        let res = intercept(&config(true, true, ">=10"), UserRole::Player, &mut rolled, &mut || 0.0);

        assert!(res.was_rewritten());
        assert_eq!(rolled.values(), vec![10, 10]);
        assert_eq!(rolled.total(), 21);
    }

    #[test]
    fn test_gm() {
        let mut rolled = two_d20();
        let res = intercept(&config(true, false, "=20"), UserRole::Gm, &mut rolled, &mut || 0.4);

        assert_eq!(
            res,
            Interception::Rewritten(RewriteSummary {
                rewritten: 2,
                infeasible: 0
            })
        );
        assert_eq!(rolled.values(), vec![20, 20]);
        assert_eq!(rolled.total(), 41);
    }

    #[test]
    fn test_target_is_trimmed() {
        let mut rolled = two_d20();
        let res = intercept(&config(true, false, "  <=1 "), UserRole::Gm, &mut rolled, &mut || 0.0);

        assert!(res.was_rewritten());
        assert_eq!(rolled.values(), vec![1, 1]);
    }

    #[test]
    fn test_empty_target() {
        let mut rolled = two_d20();
        let res = intercept(&config(true, false, "   "), UserRole::Gm, &mut rolled, &mut || 0.0);

        assert_eq!(res, Interception::NoTarget);
        assert_eq!(rolled, two_d20());
    }

    #[test]
    fn test_invalid_target() {
        let mut rolled = two_d20();
        let res = intercept(&config(true, false, "==10"), UserRole::Gm, &mut rolled, &mut || 0.0);

        let Interception::InvalidTarget(err) = res else {
            panic!()
        };
        assert_eq!(err.input(), "==10");
        assert_eq!(rolled, two_d20());
    }

    #[test]
    fn test_infeasible_target_still_recomputes() {
        let mut rolled = two_d20();
        rolled.total = 0;
        let res = intercept(&config(true, false, ">=21"), UserRole::Gm, &mut rolled, &mut || 0.0);

        assert_eq!(
            res,
            Interception::Rewritten(RewriteSummary {
                rewritten: 0,
                infeasible: 2
            })
        );
        assert_eq!(rolled.values(), vec![2, 3]);
        assert_eq!(rolled.total(), 6);
    }
}
