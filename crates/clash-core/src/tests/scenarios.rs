//! End-to-end battle scenarios.

use critter::{Action, Affinity, Attributes, Combatant};

use crate::chart::Effectiveness;
use crate::config::{GameMode, MatchConfig};
use crate::controller::{Match, Opponent};
use crate::error::{BattleError, InvalidTurnReason};
use crate::session::{BattleSession, Side};

use super::helpers::{sample_roster, surf_user};

fn half_accuracy_surfer(name: &str) -> Combatant {
    Combatant::new(
        name,
        vec![Affinity::Water],
        Attributes {
            health: 150,
            attack: 100,
            defense: 50,
            ..Attributes::default()
        },
        vec![Action::new("surf", 90, 50, Affinity::Water)],
    )
    .unwrap()
}

// =============================================================================
// Canonical damage scenarios
// =============================================================================

#[test]
fn super_effective_hit_knocks_out() {
    let mut session = BattleSession::new(
        surf_user("blastoise", Affinity::Water),
        surf_user("arcanine", Affinity::Fire),
    );
    let outcome = session.resolve_action(Side::First, 0).unwrap();

    assert_eq!(outcome.effectiveness, Effectiveness::SuperEffective);
    assert_eq!(outcome.damage, 162);
    assert_eq!(session.fighter(Side::Second).health(), 0);
    assert!(session.is_over());
    assert_eq!(session.winner(), Some(Side::First));
}

#[test]
fn resisted_hit_leaves_target_standing() {
    let mut session = BattleSession::new(
        surf_user("blastoise", Affinity::Water),
        surf_user("lapras", Affinity::Water),
    );
    let outcome = session.resolve_action(Side::First, 0).unwrap();

    assert_eq!(outcome.effectiveness, Effectiveness::Resisted);
    assert_eq!(outcome.damage, 40);
    assert_eq!(session.fighter(Side::Second).health(), 110);
    assert!(!session.is_over());
    assert_eq!(session.turn_owner(), Side::Second);
}

#[test]
fn half_accuracy_halves_damage() {
    let mut session = BattleSession::new(
        half_accuracy_surfer("blastoise"),
        surf_user("arcanine", Affinity::Fire),
    );
    let outcome = session.resolve_action(Side::First, 0).unwrap();

    assert_eq!(outcome.damage, 81);
    assert_eq!(session.fighter(Side::Second).health(), 69);
    assert!(!session.is_over());
}

// =============================================================================
// Full battles
// =============================================================================

#[test]
fn battle_runs_to_completion_with_alternating_turns() {
    let mut session = BattleSession::new(
        surf_user("blastoise", Affinity::Water),
        surf_user("lapras", Affinity::Water),
    );

    // 40 per hit against 150 health: the fourth hit lands the knockout.
    let mut turns = 0;
    while !session.is_over() {
        let actor = session.turn_owner();
        session.resolve_action(actor, 0).unwrap();
        turns += 1;
    }

    assert_eq!(turns, 7);
    assert_eq!(session.winner(), Some(Side::First));
    assert_eq!(session.log().len(), 14);
    assert_eq!(session.fighter(Side::First).health(), 30);
    assert_eq!(session.log().last().unwrap(), "It dealt 40 damage to lapras!");
}

#[test]
fn game_over_rejects_further_actions() {
    let mut session = BattleSession::new(
        surf_user("blastoise", Affinity::Water),
        surf_user("arcanine", Affinity::Fire),
    );
    session.resolve_action(Side::First, 0).unwrap();

    let err = session.resolve_action(Side::First, 0).unwrap_err();
    assert_eq!(
        err,
        BattleError::InvalidTurn {
            side: Side::First,
            reason: InvalidTurnReason::BattleOver
        }
    );
    assert_eq!(err.to_string(), "first side cannot act: the battle is already over");
}

#[tokio::test]
async fn pve_match_from_roster_finishes() {
    let roster = sample_roster(Some(21));
    let mut game = Match::start(
        &roster,
        7,
        Opponent::Random,
        MatchConfig::headless(GameMode::HumanVsComputer).with_seed(21),
    )
    .await
    .unwrap();

    let mut rounds = 0;
    while game.winner().is_none() {
        let outcomes = game.submit(Side::First, 0).await.unwrap();
        assert!(!outcomes.is_empty() && outcomes.len() <= 2);
        assert_eq!(outcomes[0].actor, Side::First);
        rounds += 1;
        assert!(rounds < 100, "battle did not terminate");
    }

    let session = game.session();
    assert!(session.is_over());
    let loser = game.winner().unwrap().opponent();
    assert!(session.fighter(loser).is_knocked_out());
    assert_eq!(session.log().len() % 2, 0);
}

#[tokio::test]
async fn pvp_match_by_id() {
    let roster = sample_roster(Some(2));
    let mut game = Match::start(
        &roster,
        7,
        Opponent::ById(4),
        MatchConfig::headless(GameMode::HumanVsHuman),
    )
    .await
    .unwrap();

    // water on fire: floor(0.44 * 40 + 2) * 2 = 38
    let outcomes = game.submit(Side::First, 0).await.unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].damage, 38);
    assert_eq!(game.session().fighter(Side::Second).health(), 22);

    // fire on water: floor(19 * 0.5) = 9
    let outcomes = game.submit(Side::Second, 0).await.unwrap();
    assert_eq!(outcomes[0].damage, 9);

    game.submit(Side::First, 0).await.unwrap();
    assert_eq!(game.winner(), Some(Side::First));
}
