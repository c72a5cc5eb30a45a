use std::collections::BTreeSet;

use quartet_core::content::{PLAYER_START, TOGGLE_PLATE, reference_walls};
use quartet_core::state::WallSegment;
use quartet_core::{
    ActionError, Board, Direction, DoorId, Enemy, Game, GameState, Pos, RulesConfig, RunOutcome,
    SkillId, WallOrientation,
};

fn open_board() -> Board {
    let walls: BTreeSet<WallSegment> = reference_walls()
        .into_iter()
        .filter(|wall| match wall.orientation {
            WallOrientation::Horizontal => wall.y == 1 || wall.y == 9,
            WallOrientation::Vertical => wall.x == 1 || wall.x == 9,
        })
        .collect();
    Board {
        walls,
        one_way: Vec::new(),
        doors: Vec::new(),
        toggle_plate: Pos::new(1, 8),
        sensed_plates: Vec::new(),
        goal: Pos::new(8, 8),
    }
}

fn open_game(player: Pos, enemies: Vec<Enemy>) -> Game {
    let rules = RulesConfig::default();
    let state = GameState::on_board(&rules, open_board(), player, enemies);
    Game::from_state(rules, state)
}

#[test]
fn three_steps_right_then_three_undos() {
    let mut game = open_game(PLAYER_START, vec![]);
    for _ in 0..3 {
        game.move_intent(1, 0).expect("open row should allow the move");
    }
    assert_eq!(game.state().player.pos, Pos::new(5, 2));
    assert_eq!(game.state().player.moves_left, 3);
    for _ in 0..3 {
        game.undo().expect("each move left a snapshot");
    }
    assert_eq!(game.state().player.pos, PLAYER_START);
    assert_eq!(game.state().player.moves_left, 6);
}

#[test]
fn toggle_plate_opens_then_closes_the_yellow_doors() {
    let mut game = Game::default();
    let yellow = [DoorId::Yellow1, DoorId::Yellow2, DoorId::Yellow3];
    game.move_player(Direction::Left).unwrap();
    game.move_player(Direction::Up).unwrap();
    assert_eq!(game.state().player.pos, TOGGLE_PLATE);
    assert!(yellow.iter().all(|&id| game.state().door_open(id)));
    game.move_player(Direction::Down).unwrap();
    game.move_player(Direction::Up).unwrap();
    assert!(yellow.iter().all(|&id| !game.state().door_open(id)));
}

#[test]
fn ending_the_last_turn_loses_without_enemy_motion() {
    let mut game = Game::new(RulesConfig { max_turns: 4, ..RulesConfig::default() });
    for _ in 0..3 {
        game.end_turn().unwrap();
    }
    assert_eq!(game.state().turn.number, game.state().turn.max_turns);
    let before = game.state().enemies.clone();
    game.end_turn().unwrap();
    assert!(game.state().is_lost());
    assert_eq!(game.outcome(), Some(RunOutcome::Defeat));
    assert_eq!(game.state().enemies, before);
}

#[test]
fn freeze_skips_one_enemy_phase_then_movement_resumes() {
    let walker = Enemy::new(Pos::new(2, 5), Direction::Right);
    let mut game = open_game(PLAYER_START, vec![walker]);
    game.select_skill(SkillId::Freeze).unwrap();
    game.click_cell(Pos::new(3, 6)).unwrap();

    game.end_turn().unwrap();
    assert_eq!(game.state().enemies[0].pos, Pos::new(2, 5));
    game.end_turn().unwrap();
    assert_eq!(game.state().enemies[0].pos, Pos::new(6, 5));
}

#[test]
fn empty_freeze_keeps_the_charge() {
    let mut game = Game::default();
    assert_eq!(
        game.use_freeze(Pos::new(6, 2)),
        Err(ActionError::NoEnemiesInArea(Pos::new(6, 2)))
    );
    let freeze = game.state().skills.freeze;
    assert_eq!(freeze.uses_remaining, 3);
    assert!(!freeze.used_this_turn);
}

#[test]
fn enemy_rewind_waits_for_the_first_enemy_phase() {
    let mut game = Game::default();
    assert_eq!(game.use_rewind_on_enemy(0), Err(ActionError::RewindNotAvailableYet));
    game.end_turn().unwrap();
    assert_eq!(game.use_rewind_on_enemy(0), Ok(Pos::new(1, 8)));
}

#[test]
fn path_search_respects_movement_rules() {
    let game = Game::default();
    for cell in [Pos::new(1, 1), Pos::new(8, 8), PLAYER_START] {
        assert_eq!(game.find_path(cell, cell), Some(vec![]));
    }
    let path = game.find_path(PLAYER_START, Pos::new(1, 1)).expect("start pocket is open");
    let mut at = PLAYER_START;
    for direction in path {
        let next = at.step(direction);
        assert!(game.state().board.can_move(at, next));
        at = next;
    }
    assert_eq!(at, Pos::new(1, 1));
}
