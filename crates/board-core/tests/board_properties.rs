//! Integration tests for the board controller
//!
//! Exercises refresh, sort and toggle together through the public API,
//! over many seeded boards.

use std::collections::HashSet;

use board_core::prelude::*;
use board_core::logging::init_logging;
use board_core::{BoardConfig, Comment, IconSet, LogConfig};

fn board(seed: u64) -> BoardController {
    let generator = DataGenerator::seeded(GeneratorConfig::default(), seed);
    BoardController::new(generator, IconSet::default())
}

fn ids(comments: &[Comment]) -> Vec<u64> {
    comments.iter().map(|c| c.id).collect()
}

#[test]
fn test_every_refresh_stays_in_bounds() {
    let mut board = board(11);

    let config = GeneratorConfig::default();

    for _ in 0..30 {
        let summary = board.refresh();

        assert!(config.users.contains(summary.users as u32));
        assert!(config.comments.contains(summary.comments as u32));

        let user_ids: HashSet<u64> = board.users().iter().map(|u| u.id).collect();
        assert!(board
            .comments()
            .iter()
            .all(|c| user_ids.contains(&c.author_id())));
    }
}

#[test]
fn test_ids_never_repeat_across_refreshes() {
    let mut board = board(12);
    let mut last_user = 0;
    let mut last_comment = 0;

    for _ in 0..10 {
        board.refresh();

        for user in board.users() {
            assert!(user.id > last_user);
            last_user = user.id;
        }
        for id in ids(board.comments()) {
            assert!(id > last_comment);
            last_comment = id;
        }
    }
}

#[test]
fn test_sort_orders() {
    let mut board = board(13);
    board.refresh();

    board.sort_by(SortCriterion::Likes);
    assert!(board.comments().windows(2).all(|w| w[0].likes >= w[1].likes));

    board.sort_by(SortCriterion::Dislikes);
    assert!(board.comments().windows(2).all(|w| w[0].dislikes >= w[1].dislikes));

    board.sort_by(SortCriterion::Newest);
    assert!(board.comments().windows(2).all(|w| w[0].created_at >= w[1].created_at));

    board.sort_by(SortCriterion::Oldest);
    assert!(board.comments().windows(2).all(|w| w[0].created_at <= w[1].created_at));

    board.sort_by(SortCriterion::Default);
    assert!(board.comments().windows(2).all(|w| w[0].id <= w[1].id));
}

#[test]
fn test_equal_keys_ordered_by_id() {
    let mut board = board(14);
    board.refresh();
    board.sort_by(SortCriterion::Newest);

    for pair in board.comments().windows(2) {
        if pair[0].created_at == pair[1].created_at {
            assert!(pair[0].id < pair[1].id);
        }
    }
}

#[test]
fn test_like_dislike_scenario_through_controller() {
    let mut board = board(15);
    board.refresh();
    let id = board.rows()[0].comment_id();
    let (likes, dislikes) = {
        let row = board.row(id).unwrap();
        (row.likes(), row.dislikes())
    };

    let change = board.toggle_like(id).unwrap();
    assert_eq!((change.likes, change.dislikes), (likes + 1, dislikes));
    assert_eq!(change.after, Reaction::Liked);

    let change = board.toggle_dislike(id).unwrap();
    assert_eq!((change.likes, change.dislikes), (likes, dislikes + 1));
    assert_eq!(change.after, Reaction::Disliked);

    let change = board.toggle_dislike(id).unwrap();
    assert_eq!((change.likes, change.dislikes), (likes, dislikes));
    assert_eq!(change.after, Reaction::None);

    let row = board.row(id).unwrap();
    assert!(!row.has_liked());
    assert!(!row.has_disliked());
}

#[test]
fn test_sort_keeps_counters_and_reactions() {
    let mut board = board(16);
    board.refresh();
    let id = board.rows()[5].comment_id();
    board.toggle_like(id).unwrap();
    let likes = board.row(id).unwrap().likes();

    for criterion in SortCriterion::ALL {
        board.sort_by(criterion);
        let row = board.row(id).unwrap();
        assert_eq!(row.likes(), likes);
        assert!(row.has_liked());
    }
}

#[test]
#[serial_test::serial]
fn test_config_from_environment() {
    std::env::set_var("BOARD_SEED", "1234");
    std::env::set_var("BOARD_ASSETS_DIR", "/tmp/board-assets");

    let mut config = BoardConfig::default();
    let result = config.apply_env();

    std::env::remove_var("BOARD_SEED");
    std::env::remove_var("BOARD_ASSETS_DIR");

    result.unwrap();
    assert_eq!(config.seed, Some(1234));
    assert_eq!(config.assets_dir, std::path::PathBuf::from("/tmp/board-assets"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_logging_installs_once_per_process() {
    let config = LogConfig::test();

    assert!(init_logging(&config).is_ok());
    assert!(init_logging(&config).is_err());

    let mut board = board(17);
    board.refresh();
}
