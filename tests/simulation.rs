use hexstead::game::{Game, GameConfig, GameEvent, NullSink};
use hexstead::players::RandomStrategy;
use hexstead::types::{BuildingKind, Resource};

fn default_strategies() -> Vec<RandomStrategy> {
    vec![RandomStrategy; 4]
}

#[test]
fn test_resource_conservation_across_full_game() {
    let mut game = Game::new(GameConfig::default());
    game.play(&default_strategies(), &mut NullSink).unwrap();

    for resource in Resource::ALL {
        let in_bank = game.state.bank.remaining(resource) as u32;
        let held: u32 = game
            .state
            .players
            .iter()
            .map(|p| p.resources.get(resource) as u32)
            .sum();
        assert_eq!(in_bank + held, 19, "{resource} leaked");
    }
}

#[test]
fn test_round_limit_of_one_halts_after_one_round() {
    let config = GameConfig {
        max_rounds: 1,
        ..GameConfig::default()
    };
    let mut game = Game::new(config);
    let summary = game.play(&default_strategies(), &mut NullSink).unwrap();

    assert_eq!(summary.rounds_played, 1);
    assert_eq!(summary.winner, None);
    assert!(game.state.finished());
}

#[test]
fn test_identical_seeds_reproduce_identical_runs() {
    let config = GameConfig {
        seed: 7,
        ..GameConfig::default()
    };

    let mut first_events: Vec<(u32, GameEvent)> = Vec::new();
    let mut second_events: Vec<(u32, GameEvent)> = Vec::new();

    let mut first = Game::new(config.clone());
    let first_summary = first.play(&default_strategies(), &mut first_events).unwrap();
    let mut second = Game::new(config);
    let second_summary = second
        .play(&default_strategies(), &mut second_events)
        .unwrap();

    assert_eq!(first_summary, second_summary);
    assert_eq!(first_events, second_events);
}

#[test]
fn test_summary_is_consistent_with_final_state() {
    let mut game = Game::new(GameConfig::default());
    let summary = game.play(&default_strategies(), &mut NullSink).unwrap();

    assert_eq!(summary.players.len(), 4);
    for player in &summary.players {
        assert_eq!(
            player.victory_points,
            game.state.victory_points(player.color)
        );
    }
    if let Some(winner) = summary.winner {
        assert!(game.state.victory_points(winner) >= 10);
        assert!(summary.rounds_played <= game.state.config.max_rounds);
    } else {
        assert_eq!(summary.rounds_played, game.state.config.max_rounds);
    }
    if let Some((_, length)) = summary.longest_road {
        assert!(length >= 5);
    }
}

#[test]
fn test_piece_counters_match_board_occupancy() {
    let mut game = Game::new(GameConfig {
        seed: 99,
        ..GameConfig::default()
    });
    game.play(&default_strategies(), &mut NullSink).unwrap();

    for player in &game.state.players {
        let settlements = game
            .state
            .board
            .nodes()
            .iter()
            .filter(|n| {
                n.building
                    .is_some_and(|b| b.owner == player.color && b.kind == BuildingKind::Settlement)
            })
            .count() as u8;
        let cities = game
            .state
            .board
            .nodes()
            .iter()
            .filter(|n| {
                n.building
                    .is_some_and(|b| b.owner == player.color && b.kind == BuildingKind::City)
            })
            .count() as u8;
        let roads = game
            .state
            .board
            .edges()
            .iter()
            .filter(|e| e.road.is_some_and(|r| r.owner == player.color))
            .count() as u8;

        assert_eq!(settlements, 5 - player.settlements_left);
        assert_eq!(cities, 4 - player.cities_left);
        assert_eq!(roads, 15 - player.roads_left);
        assert!(settlements <= 5);
        assert!(cities <= 4);
        assert!(roads <= 15);
    }
}

#[test]
fn test_transcript_round_numbers_are_bounded() {
    let mut events: Vec<(u32, GameEvent)> = Vec::new();
    let mut game = Game::new(GameConfig {
        seed: 3,
        ..GameConfig::default()
    });
    let summary = game.play(&default_strategies(), &mut events).unwrap();

    // setup events land in round 0, everything else within the rounds played
    assert!(events.iter().any(|(round, _)| *round == 0));
    for (round, _) in &events {
        assert!(*round <= summary.rounds_played);
    }
    let rolls = events
        .iter()
        .filter(|(_, e)| matches!(e, GameEvent::DiceRolled { .. }))
        .count() as u32;
    assert_eq!(rolls, summary.rounds_played);
}
