use super::*;
use crate::eval::{evaluate, MaterialEvaluator};
use crate::test_tree::{reference_minimax, GameTree, NodeScore};
use chess_core::Game;

fn game(fen: &str) -> Game {
    Game::from_fen(fen).unwrap()
}

#[test]
fn test_depth_zero_returns_static_eval() {
    let mut pos = game("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    let eval = MaterialEvaluator::default();
    for (alpha, beta) in [(-INFINITY, INFINITY), (-3, 3), (0, 0), (-100, -50)] {
        for maximizing in [true, false] {
            let result = search(&mut pos, &eval, 0, alpha, beta, maximizing);
            assert_eq!(result, SearchResult::leaf(evaluate(&pos)));
        }
    }
}

#[test]
fn test_terminal_position_short_circuits() {
    let eval = MaterialEvaluator::default();
    let fens = [
        // Fool's mate, White is mated
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        // Stalemate
        "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1",
    ];
    for fen in fens {
        let mut pos = game(fen);
        for depth in 1..=4 {
            for maximizing in [true, false] {
                let mut searcher = Searcher::new(&eval);
                let result = searcher.search(&mut pos, depth, -INFINITY, INFINITY, maximizing);
                assert_eq!(result, SearchResult::leaf(evaluate(&pos)), "{fen} at depth {depth}");
                assert_eq!(searcher.nodes(), 1);
            }
        }
    }
}

#[test]
fn test_start_position_ties_go_to_first_move() {
    let mut pos = Game::new();
    let first = pos.legal_moves()[0];
    for depth in 1..=2 {
        let result = search(&mut pos, &MaterialEvaluator::default(), depth, -INFINITY, INFINITY, true);
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, Some(first));
    }
}

#[test]
fn test_white_takes_hanging_queen() {
    let mut pos = game("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    let eval = MaterialEvaluator::default();
    for depth in 1..=3 {
        let result = search(&mut pos, &eval, depth, -INFINITY, INFINITY, true);
        assert_eq!(result.best_move, Some("e4d5".parse().unwrap()), "depth {depth}");
        assert_eq!(result.score, 1);
    }
}

#[test]
fn test_black_takes_hanging_queen() {
    let mut pos = game("4k3/8/8/4p3/3Q4/8/8/4K3 b - - 0 1");
    let result = search(&mut pos, &MaterialEvaluator::default(), 2, -INFINITY, INFINITY, false);
    assert_eq!(result.best_move, Some("e5d4".parse().unwrap()));
    assert_eq!(result.score, -1);
}

#[test]
fn test_search_leaves_board_unchanged() {
    let mut pos = game("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let before = pos.clone();
    search(&mut pos, &MaterialEvaluator::default(), 3, -INFINITY, INFINITY, true);
    assert_eq!(pos, before);
}

#[test]
fn test_ties_keep_first_move_when_maximizing() {
    let mut tree = GameTree::new(0);
    tree.add_child(0, 2);
    tree.add_child(0, 5);
    tree.add_child(0, 5);

    let result = search(&mut tree, &NodeScore, 1, -INFINITY, INFINITY, true);
    assert_eq!(result.score, 5);
    assert_eq!(result.best_move, Some(GameTree::child_move(1)));
}

#[test]
fn test_ties_keep_first_move_when_minimizing() {
    let mut tree = GameTree::new(0);
    tree.add_child(0, 3);
    tree.add_child(0, -1);
    tree.add_child(0, 4);
    tree.add_child(0, -1);

    let result = search(&mut tree, &NodeScore, 1, -INFINITY, INFINITY, false);
    assert_eq!(result.score, -1);
    assert_eq!(result.best_move, Some(GameTree::child_move(1)));
}

#[test]
fn test_pruned_subtree_never_displaces_earlier_best() {
    // Root maximizes. The first reply line guarantees 3; the second child's
    // first grandchild is also 3, which cuts it off with an upper bound of 3.
    let mut tree = GameTree::new(0);
    let a = tree.add_child(0, 0);
    tree.add_child(a, 3);
    tree.add_child(a, 7);
    let b = tree.add_child(0, 0);
    tree.add_child(b, 3);
    tree.add_child(b, -10);

    let eval = NodeScore;
    let mut searcher = Searcher::new(&eval);
    let result = searcher.search(&mut tree, 2, -INFINITY, INFINITY, true);
    assert_eq!(result.score, 3);
    assert_eq!(result.best_move, Some(GameTree::child_move(0)));
    // root, a, a's two leaves, b, b's first leaf
    assert_eq!(searcher.nodes(), 6);
}

#[test]
fn test_leaf_inside_depth_is_scored_directly() {
    let mut tree = GameTree::new(0);
    tree.add_child(0, -4);
    let deep = tree.add_child(0, 100);
    tree.add_child(deep, 1);

    let result = search(&mut tree, &NodeScore, 3, -INFINITY, INFINITY, true);
    assert_eq!(result.score, 1);
    assert_eq!(result.best_move, Some(GameTree::child_move(1)));
}

#[test]
fn test_alpha_beta_matches_plain_minimax_on_random_trees() {
    for seed in 0..300 {
        let mut tree = GameTree::random(seed, 5, 4);
        for depth in 0..=5 {
            for maximizing in [true, false] {
                let expected = reference_minimax(&mut tree, depth, maximizing);
                let got = search(&mut tree, &NodeScore, depth, -INFINITY, INFINITY, maximizing);
                assert_eq!(
                    (got.score, got.best_move),
                    expected,
                    "seed {seed}, depth {depth}, maximizing {maximizing}"
                );
                assert!(tree.at_root());
                assert_eq!(tree.applies, tree.undos);
            }
        }
    }
}

#[test]
fn test_pruning_visits_no_more_nodes_than_minimax() {
    let eval = NodeScore;
    let mut total_pruned = 0;
    let mut total_full = 0;
    for seed in 0..50 {
        let mut tree = GameTree::random(seed, 6, 5);
        let mut searcher = Searcher::new(&eval);
        searcher.search(&mut tree, 6, -INFINITY, INFINITY, true);
        let pruned = tree.applies;

        tree.applies = 0;
        tree.undos = 0;
        reference_minimax(&mut tree, 6, true);
        let full = tree.applies;

        assert!(pruned <= full, "seed {seed}: {pruned} > {full}");
        total_pruned += pruned;
        total_full += full;
    }
    assert!(total_pruned < total_full);
}
