//! Synthetic game trees for exercising the search without chess rules.
//!
//! Move `i` from any node leads to that node's `i`-th child and is encoded
//! as `a1 -> square i`. Leaves (nodes without children) are terminal.

use chess_core::{Color, Move, Piece, RulesEngine, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Evaluator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub score: i32,
    pub children: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTree {
    nodes: Vec<Node>,
    path: Vec<usize>,
    root_side: Color,
    pub applies: u64,
    pub undos: u64,
}

impl GameTree {
    pub fn new(root_score: i32) -> Self {
        Self {
            nodes: vec![Node {
                score: root_score,
                children: Vec::new(),
            }],
            path: vec![0],
            root_side: Color::White,
            applies: 0,
            undos: 0,
        }
    }

    pub fn with_root_side(mut self, side: Color) -> Self {
        self.root_side = side;
        self
    }

    pub fn add_child(&mut self, parent: usize, score: i32) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node {
            score,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Random tree up to `depth` plies deep with up to `branching` children
    /// per node. Scores are drawn from a narrow range so ties are common.
    pub fn random(seed: u64, depth: u8, branching: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tree = GameTree::new(rng.gen_range(-5..=5));
        let mut frontier = vec![(0usize, depth)];
        while let Some((node, remaining)) = frontier.pop() {
            if remaining == 0 {
                continue;
            }
            let count = rng.gen_range(0..=branching);
            for _ in 0..count {
                let child = tree.add_child(node, rng.gen_range(-5..=5));
                frontier.push((child, remaining - 1));
            }
        }
        tree
    }

    pub fn current(&self) -> usize {
        *self.path.last().expect("path always holds the root")
    }

    pub fn at_root(&self) -> bool {
        self.path.len() == 1
    }

    pub fn child_move(i: usize) -> Move {
        Move::new(
            Square::from_index(0).unwrap(),
            Square::from_index(i as u8).unwrap(),
        )
    }
}

impl RulesEngine for GameTree {
    fn legal_moves_into(&self, out: &mut Vec<Move>) {
        out.clear();
        let count = self.nodes[self.current()].children.len();
        out.extend((0..count).map(GameTree::child_move));
    }

    fn apply(&mut self, mv: Move) {
        let child = self.nodes[self.current()].children[mv.to.index() as usize];
        self.path.push(child);
        self.applies += 1;
    }

    fn undo(&mut self) {
        assert!(!self.at_root(), "undo at root");
        self.path.pop();
        self.undos += 1;
    }

    fn is_terminal(&self) -> bool {
        self.nodes[self.current()].children.is_empty()
    }

    fn side_to_move(&self) -> Color {
        if self.path.len() % 2 == 1 {
            self.root_side
        } else {
            self.root_side.other()
        }
    }

    fn piece_at(&self, _sq: Square) -> Option<Piece> {
        None
    }
}

/// Reads the score stored on the current node.
pub struct NodeScore;

impl Evaluator<GameTree> for NodeScore {
    fn evaluate(&self, board: &GameTree) -> i32 {
        board.nodes[board.current()].score
    }
}

/// Plain minimax without pruning, same tie-breaking as the searcher.
pub fn reference_minimax(tree: &mut GameTree, depth: u8, maximizing: bool) -> (i32, Option<Move>) {
    if depth == 0 || tree.is_terminal() {
        return (NodeScore.evaluate(tree), None);
    }
    let mut best: Option<(i32, Move)> = None;
    for mv in tree.legal_moves() {
        tree.apply(mv);
        let (score, _) = reference_minimax(tree, depth - 1, !maximizing);
        tree.undo();
        let better = match best {
            None => true,
            Some((b, _)) => {
                if maximizing {
                    score > b
                } else {
                    score < b
                }
            }
        };
        if better {
            best = Some((score, mv));
        }
    }
    match best {
        Some((score, mv)) => (score, Some(mv)),
        None => (NodeScore.evaluate(tree), None),
    }
}
