mod utils;
use utils::{RoundBuilder, TestSetupBuilder, TotalsAssertion};

use golf_points::{accumulate, RunningTotals, ScoreRepository, ScoringError};

#[tokio::test]
async fn host_exemption_scenario_settles_and_persists() {
    let setup = TestSetupBuilder::new()
        .with_players(vec!["host", "alice", "bob"])
        .build();

    let round = RoundBuilder::new()
        .player("host", 80, 10)
        .player("alice", 90, 10)
        .player("bob", 110, 10)
        .rate("500")
        .course("Test Links")
        .play(&setup)
        .await
        .expect("round should score");

    assert_eq!(round.course, "Test Links");
    assert_eq!(round.result_for("host").unwrap().change, 20000);
    assert_eq!(round.result_for("alice").unwrap().change, 5500);
    assert_eq!(round.result_for("bob").unwrap().change, -25500);

    TotalsAssertion::for_setup(&setup)
        .has_total("host", 20000)
        .await
        .has_total("bob", -25500)
        .await
        .balances()
        .await
        .has_rounds(1)
        .await;
}

#[tokio::test]
async fn four_player_round_with_near_pin_stays_balanced() {
    let setup = TestSetupBuilder::new().with_four_players().build();

    // nets: host 72, alice 75, bob 75, carol 81
    let round = RoundBuilder::new()
        .player("host", 80, 8)
        .player("alice", 90, 15)
        .near_pin()
        .player("bob", 85, 10)
        .player("carol", 100, 19)
        .play(&setup)
        .await
        .unwrap();

    // host: +1500 +1500 +4500, no uma, pays 1000 near-pin
    assert_eq!(round.result_for("host").unwrap().change, 6500);
    // alice: -1500, tie with bob, +3000 +500 from carol, +3000 near-pin
    assert_eq!(round.result_for("alice").unwrap().change, 5000);
    // bob: -1500, tie, +3500 from carol, -1000 near-pin
    assert_eq!(round.result_for("bob").unwrap().change, 1000);
    assert_eq!(round.result_for("carol").unwrap().change, -12500);
    assert_eq!(round.change_sum(), 0);
}

#[tokio::test]
async fn typed_noise_is_normalized_not_rejected() {
    let setup = TestSetupBuilder::new()
        .with_players(vec!["host", "alice", "bob"])
        .build();

    let round = RoundBuilder::new()
        .typed("host", "85", "")
        .typed("alice", "", "12")
        .typed("bob", "90", "abc")
        .rate("not a number")
        .play(&setup)
        .await
        .unwrap();

    assert_eq!(round.rate, 500);
    assert_eq!(round.player_results.len(), 2);
    assert!(round.result_for("alice").is_none());
    // heads-up between host and bob still gets uma
    assert_eq!(round.result_for("host").unwrap().change, 3000);
}

#[tokio::test]
async fn insufficient_players_leaves_store_untouched() {
    let setup = TestSetupBuilder::new().with_four_players().build();

    let result = RoundBuilder::new()
        .player("host", 85, 0)
        .typed("alice", "DNF", "0")
        .play(&setup)
        .await;

    assert_eq!(result, Err(ScoringError::InsufficientPlayers { found: 1 }));
    TotalsAssertion::for_setup(&setup).has_rounds(0).await;
    assert!(setup.repository.get_totals().await.unwrap().is_empty());
}

#[tokio::test]
async fn renamed_players_keep_their_name_in_history() {
    let mut setup = TestSetupBuilder::new()
        .with_players(vec!["host", "alice"])
        .build();

    RoundBuilder::new()
        .player("host", 80, 0)
        .player("alice", 82, 0)
        .play(&setup)
        .await
        .unwrap();

    setup.roster = golf_points::Roster::new(vec![
        golf_points::Player::new("host", "Renamed Host").as_host(),
    ]);

    let history = setup.service.history().await.unwrap();
    assert_eq!(history[0].result_for("host").unwrap().name, "HOST");
    assert_eq!(history[0].result_for("alice").unwrap().name, "ALICE");

    // alice left the roster but her total survives
    TotalsAssertion::for_setup(&setup)
        .has_total("alice", -1500)
        .await
        .balances()
        .await;
}

#[tokio::test]
async fn stored_totals_match_replaying_history() {
    let setup = TestSetupBuilder::new().with_four_players().build();

    let rounds = vec![
        RoundBuilder::new()
            .player("host", 80, 0)
            .player("alice", 84, 0)
            .player("bob", 90, 2),
        RoundBuilder::new()
            .player("alice", 77, 0)
            .near_pin()
            .player("carol", 79, 0),
        RoundBuilder::new()
            .player("host", 95, 10)
            .player("bob", 88, 0)
            .near_pin()
            .player("carol", 101, 12)
            .rate("1000"),
    ];

    for round in &rounds {
        round.play(&setup).await.unwrap();
    }

    let history = setup.service.history().await.unwrap();
    let replayed = history
        .iter()
        .rev()
        .try_fold(RunningTotals::new(), |totals, round| {
            accumulate(totals, &round.player_results)
        })
        .expect("replay should not overflow");

    assert_eq!(replayed, setup.service.totals().await.unwrap());
    TotalsAssertion::for_setup(&setup)
        .balances()
        .await
        .has_rounds(3)
        .await;
}
