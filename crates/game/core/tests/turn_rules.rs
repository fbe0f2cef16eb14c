use board_core::{
    GameConfig, GameFlow, Heading, NullGameFlow, Player, PlayerId, PlayerStats, Position,
    TurnState,
};

#[derive(Default)]
struct GameOverCounter(u32);

impl GameFlow for GameOverCounter {
    fn game_over(&mut self, _fame: i32) {
        self.0 += 1;
    }
}

fn player() -> Player {
    Player::new(
        PlayerId::FIRST,
        &GameConfig::default(),
        Position::ORIGIN,
        Heading::Right,
    )
}

#[test]
fn death_then_forced_skip_revives() {
    let mut player = player();
    let mut flow = NullGameFlow;
    let mut turn = player.turn(&mut flow);

    turn.apply_damage(25);
    assert_eq!(turn.stats().health, 0);
    assert!(!turn.stats().was_dead);

    turn.run_death_check();
    assert!(turn.stats().was_dead);
    assert_eq!(turn.stats().turn_skip_count, 0);

    for expected_count in 1..=3 {
        assert!(!turn.consume_turn_skip());
        assert_eq!(turn.stats().turn_skip_count, expected_count);
        assert_eq!(turn.stats().health, 0);
    }

    assert!(turn.consume_turn_skip());
    assert_eq!(turn.stats().health, 20);
    assert!(!turn.stats().was_dead);
}

#[test]
fn consume_turn_skip_respects_configured_cap() {
    for cap in [0, 1, 3, 5] {
        let config = GameConfig::default().with_turn_skip_cap(cap);
        let mut stats = PlayerStats::from_starting(&config.starting);
        stats.turn_skip_count = 0;
        let mut flow = NullGameFlow;
        let mut turn = TurnState::new(&mut stats, &mut flow);

        let results: Vec<bool> = (0..=cap).map(|_| turn.consume_turn_skip()).collect();

        let granted = results.iter().filter(|skipped| !**skipped).count();
        assert_eq!(granted, cap as usize, "cap {cap}");
        assert_eq!(results.last(), Some(&true), "cap {cap}");
    }
}

#[test]
fn fame_loss_past_zero_signals_game_over_once() {
    let mut player = player();
    let mut flow = GameOverCounter::default();

    player.turn(&mut flow).change_fame(-250);

    assert_eq!(player.stats.fame, -50);
    assert_eq!(flow.0, 1);
}

#[test]
fn lost_combat_costs_fame_and_life() {
    let mut player = player();
    let mut flow = GameOverCounter::default();
    {
        let mut turn = player.turn(&mut flow);
        turn.apply_damage(30);
        turn.handle_combat_death(-250);
    }

    assert_eq!(player.stats.health, 0);
    assert!(player.stats.was_dead);
    assert_eq!(player.stats.turn_skip_count, 0);
    assert_eq!(flow.0, 1);
}

#[test]
fn health_always_within_bounds() {
    let mut player = player();
    let mut flow = NullGameFlow;
    let mut turn = player.turn(&mut flow);

    for delta in [-1000, 1000, i32::MIN, i32::MAX, -19, 7] {
        turn.change_health(delta);
        let stats = turn.stats();
        assert!((0..=stats.max_health).contains(&stats.health), "delta {delta}");
    }
    for amount in [1000, i32::MIN, i32::MAX, -3] {
        turn.apply_damage(amount);
        let stats = turn.stats();
        assert!((0..=stats.max_health).contains(&stats.health), "amount {amount}");
    }
}

#[test]
fn villain_and_monster_skip_flags() {
    let mut player = player();
    let mut flow = NullGameFlow;
    {
        let mut turn = player.turn(&mut flow);
        turn.set_villain(true);
        turn.set_skip_monster(true);
    }

    assert!(player.stats.is_villain);
    assert!(player.stats.skip_monster);
}
