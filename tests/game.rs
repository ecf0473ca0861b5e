//! Game integration tests.

use std::collections::HashSet;

use concentration::{
    Card, CardId, Color, DECK_SIZE, DealError, Deck, Drawable, Game, GameEvent, GameOptions,
    Point, Rect, Stage, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Snapshots the remaining cards as (id, center, identity) triples.
fn board_snapshot(game: &Game) -> Vec<(CardId, Point, Card)> {
    game.board()
        .cards()
        .map(|(id, placed)| (id, placed.position(), placed.card()))
        .collect()
}

/// Finds the click centers of the first two cards on the board that form a
/// pair, and of the first two that do not.
fn find_pair(cards: &[(CardId, Point, Card)], matching: bool) -> Option<(Point, Point)> {
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            if cards[i].2.is_match(&cards[j].2) == matching {
                return Some((cards[i].1, cards[j].1));
            }
        }
    }
    None
}

#[test]
fn match_requires_equal_rank_and_color() {
    // Same rank, same color, different suit: a pair.
    assert!(card(Suit::Spades, 1).is_match(&card(Suit::Clubs, 1)));
    assert!(card(Suit::Hearts, 7).is_match(&card(Suit::Diamonds, 7)));

    // Same rank, different color: not a pair.
    assert!(!card(Suit::Spades, 1).is_match(&card(Suit::Hearts, 1)));

    // Different rank: not a pair.
    assert!(!card(Suit::Spades, 1).is_match(&card(Suit::Clubs, 3)));

    // Rank 0 matches nothing, itself included.
    let zero = card(Suit::Clubs, 0);
    assert!(!zero.is_match(&zero));
    assert!(!zero.is_match(&card(Suit::Spades, 0)));
    assert!(!card(Suit::Spades, 1).is_match(&card(Suit::Spades, 0)));
}

#[test]
fn same_card_is_reflexive_and_symmetric() {
    let ace = card(Suit::Spades, 1);
    let other_ace = card(Suit::Clubs, 1);

    assert!(ace.same_card(&ace));
    assert!(ace.same_card(&card(Suit::Spades, 1)));
    assert!(!ace.same_card(&other_ace));
    assert!(!other_ace.same_card(&ace));
}

#[test]
fn suit_colors_and_labels() {
    assert_eq!(Suit::Clubs.color(), Color::Black);
    assert_eq!(Suit::Spades.color(), Color::Black);
    assert_eq!(Suit::Diamonds.color(), Color::Red);
    assert_eq!(Suit::Hearts.color(), Color::Red);

    assert_eq!(card(Suit::Spades, 1).rank_label(), "A");
    assert_eq!(card(Suit::Spades, 11).rank_label(), "J");
    assert_eq!(card(Suit::Hearts, 12).rank_label(), "Q");
    assert_eq!(card(Suit::Clubs, 13).rank_label(), "K");
    assert_eq!(card(Suit::Clubs, 3).rank_label(), "3");

    assert_eq!(card(Suit::Spades, 1).label(), "A of \u{2660}");
    assert_eq!(card(Suit::Hearts, 12).label(), "Q of \u{2665}");
}

#[test]
fn fresh_deck_is_canonical_and_complete() {
    let deck = Deck::new(1);
    assert_eq!(deck.len(), DECK_SIZE);

    // Rank ascending, suits cycling clubs, diamonds, hearts, spades.
    assert_eq!(deck.cards()[0], card(Suit::Clubs, 1));
    assert_eq!(deck.cards()[1], card(Suit::Diamonds, 1));
    assert_eq!(deck.cards()[2], card(Suit::Hearts, 1));
    assert_eq!(deck.cards()[3], card(Suit::Spades, 1));
    assert_eq!(deck.cards()[20], card(Suit::Clubs, 6));
    assert_eq!(deck.cards()[51], card(Suit::Spades, 13));

    let distinct: HashSet<(u8, Suit)> = deck.cards().iter().map(|c| (c.rank, c.suit)).collect();
    assert_eq!(distinct.len(), DECK_SIZE);

    for rank in 1..=13 {
        assert_eq!(deck.cards().iter().filter(|c| c.rank == rank).count(), 4);
    }
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let mut first = Deck::new(8);
    let mut second = Deck::new(8);
    first.shuffle();
    second.shuffle();
    assert_eq!(first.cards(), second.cards());

    let mut other = Deck::new(9);
    other.shuffle();
    assert_ne!(first.cards(), other.cards());
}

#[test]
fn draw_consumes_from_the_front_and_runs_dry() {
    let mut deck = Deck::new(1);

    assert_eq!(deck.draw(), Some(card(Suit::Clubs, 1)));
    assert_eq!(deck.draw(), Some(card(Suit::Diamonds, 1)));
    assert_eq!(deck.len(), DECK_SIZE - 2);

    while deck.draw().is_some() {}
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), None);
}

#[test]
fn rect_containment_is_half_open() {
    let rect = Rect::from_center(Point::new(97, 112), 75, 105);
    assert_eq!(rect.left, 60);
    assert_eq!(rect.top, 60);

    // Center and left/top edges are inside.
    assert!(rect.contains(Point::new(97, 112)));
    assert!(rect.contains(Point::new(60, 60)));

    // Right/bottom edges are outside.
    assert!(!rect.contains(Point::new(135, 112)));
    assert!(!rect.contains(Point::new(97, 165)));
    assert!(!rect.contains(Point::new(59, 112)));
}

#[test]
fn deal_assigns_grid_cell_centers() {
    let options = GameOptions::default();
    let mut deck = Deck::new(1);
    let board = concentration::Board::deal(&mut deck, options).unwrap();

    assert_eq!(board.remaining(), 52);
    assert!(deck.is_empty());

    let positions: Vec<Point> = board.cards().map(|(_, placed)| placed.position()).collect();
    assert_eq!(positions[0], Point::new(97, 112));
    assert_eq!(positions[30], Point::new(477, 362));
    assert_eq!(positions[51], Point::new(1237, 487));
    assert_eq!(positions[0], options.cell_center(0, 0));
    assert_eq!(positions[51], options.cell_center(3, 12));
}

#[test]
fn deal_rejects_degenerate_grids() {
    let mut deck = Deck::new(1);
    assert_eq!(
        concentration::Board::deal(&mut deck, GameOptions::default().with_rows(0)).unwrap_err(),
        DealError::EmptyGrid
    );
    assert_eq!(
        concentration::Board::deal(&mut deck, GameOptions::default().with_rows(1)).unwrap_err(),
        DealError::OddCellCount
    );
    assert_eq!(
        concentration::Board::deal(&mut deck, GameOptions::default().with_rows(8).with_cols(8))
            .unwrap_err(),
        DealError::NotEnoughCards
    );
}

#[test]
fn every_card_center_hits_its_own_card() {
    let mut deck = Deck::new(4);
    deck.shuffle();
    let board = concentration::Board::deal(&mut deck, GameOptions::default()).unwrap();

    for (id, placed) in board.cards() {
        assert_eq!(board.find_clicked(placed.position()), Some(id));
    }

    assert_eq!(board.find_clicked(Point::new(1_000_000, 1_000_000)), None);
}

#[test]
fn remove_vacates_a_slot_and_repeats_are_noops() {
    let mut deck = Deck::new(1);
    let mut board = concentration::Board::deal(&mut deck, GameOptions::default()).unwrap();

    let (id, pos) = {
        let (id, placed) = board.cards().next().unwrap();
        (id, placed.position())
    };

    board.remove(id);
    assert_eq!(board.remaining(), 51);
    assert_eq!(board.get(id), None);
    assert_eq!(board.card(id), None);
    assert_eq!(board.find_clicked(pos), None);

    board.remove(id);
    assert_eq!(board.remaining(), 51);

    // Flipping a removed card is also a no-op.
    board.flip(id);
    assert_eq!(board.get(id), None);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_rows(2)
        .with_cols(6)
        .with_scale(2)
        .with_spacing(10);

    assert_eq!(options.rows, 2);
    assert_eq!(options.cols, 6);
    assert_eq!(options.card_width(), 50);
    assert_eq!(options.card_height(), 70);
    assert_eq!(options.edge_offset(), 20);
    assert_eq!(options.cell_count(), 12);
    assert_eq!(options.pair_count(), 6);
}

#[test]
fn default_layout_matches_hit_test_geometry() {
    let options = GameOptions::default();
    assert_eq!(options.card_width(), 75);
    assert_eq!(options.card_height(), 105);
    assert_eq!(options.edge_offset(), 60);
    assert_eq!(options.scene_width(), 1355);
    assert_eq!(options.scene_height(), 935);
    assert_eq!(options.cell_center(0, 0), Point::new(97, 112));
}

#[test]
fn new_game_is_deterministic_per_seed() {
    let first = Game::new(GameOptions::default(), 7).unwrap();
    let second = Game::new(GameOptions::default(), 7).unwrap();

    let first_cards: Vec<Card> = first.board().cards().map(|(_, p)| p.card()).collect();
    let second_cards: Vec<Card> = second.board().cards().map(|(_, p)| p.card()).collect();
    assert_eq!(first_cards, second_cards);

    let other = Game::new(GameOptions::default(), 8).unwrap();
    let other_cards: Vec<Card> = other.board().cards().map(|(_, p)| p.card()).collect();
    assert_ne!(first_cards, other_cards);
}

#[test]
fn first_pick_flips_and_advances_and_repicking_is_ignored() {
    let options = GameOptions::default();
    let mut game = Game::new(options, 42).unwrap();
    assert_eq!(game.stage(), Stage::PickingFirst);
    assert_eq!(game.remaining_pairs(), 26);

    let center = options.cell_center(0, 0);
    assert_eq!(game.point_clicked(center), None);

    assert_eq!(game.stage(), Stage::PickingSecond);
    let (pick1, pick2) = game.picks();
    let picked = pick1.unwrap();
    assert_eq!(pick2, None);
    assert!(game.board().get(picked).unwrap().is_face_up());

    // Re-clicking the same physical card is ignored.
    assert_eq!(game.point_clicked(center), None);
    assert_eq!(game.stage(), Stage::PickingSecond);
    assert_eq!(game.picks().1, None);
}

#[test]
fn clicking_empty_space_changes_nothing() {
    let mut game = Game::new(GameOptions::default(), 42).unwrap();

    assert_eq!(game.point_clicked(Point::new(1_000_000, 1_000_000)), None);
    assert_eq!(game.stage(), Stage::PickingFirst);
    assert_eq!(game.picks(), (None, None));
}

#[test]
fn matched_pair_is_removed_on_resolution() {
    let mut game = Game::new(GameOptions::default(), 5).unwrap();
    let cards = board_snapshot(&game);
    let (first, second) = find_pair(&cards, true).unwrap();

    assert_eq!(game.point_clicked(first), None);
    assert_eq!(game.point_clicked(second), None);
    assert_eq!(game.stage(), Stage::ShowingResult);
    assert!(game.matched());

    let (pick1, pick2) = game.picks();

    // Any click resolves the shown result; position is ignored.
    assert_eq!(game.point_clicked(Point::new(-50, -50)), None);
    assert_eq!(game.stage(), Stage::PickingFirst);
    assert_eq!(game.remaining_pairs(), 25);
    assert_eq!(game.board().remaining(), 50);
    assert_eq!(game.board().get(pick1.unwrap()), None);
    assert_eq!(game.board().get(pick2.unwrap()), None);
}

#[test]
fn unmatched_pair_flips_back_on_resolution() {
    let mut game = Game::new(GameOptions::default(), 5).unwrap();
    let cards = board_snapshot(&game);
    let (first, second) = find_pair(&cards, false).unwrap();

    assert_eq!(game.point_clicked(first), None);
    assert_eq!(game.point_clicked(second), None);
    assert_eq!(game.stage(), Stage::ShowingResult);
    assert!(!game.matched());

    let (pick1, pick2) = game.picks();

    assert_eq!(game.point_clicked(Point::new(0, 0)), None);
    assert_eq!(game.stage(), Stage::PickingFirst);
    assert_eq!(game.remaining_pairs(), 26);
    assert_eq!(game.board().remaining(), 52);
    assert!(!game.board().get(pick1.unwrap()).unwrap().is_face_up());
    assert!(!game.board().get(pick2.unwrap()).unwrap().is_face_up());
}

#[test]
fn result_stage_overlays_a_banner() {
    let mut game = Game::new(GameOptions::default(), 5).unwrap();

    let scene = game.current_scene();
    assert_eq!(scene.items.len(), 52);
    assert!(
        scene
            .items
            .iter()
            .all(|item| matches!(item.drawable, Drawable::CardBack { .. }))
    );

    let cards = board_snapshot(&game);
    let (first, second) = find_pair(&cards, false).unwrap();
    assert_eq!(game.point_clicked(first), None);

    let scene = game.current_scene();
    let faces = scene
        .items
        .iter()
        .filter(|item| matches!(item.drawable, Drawable::CardFace { .. }))
        .count();
    assert_eq!(faces, 1);

    assert_eq!(game.point_clicked(second), None);
    let scene = game.current_scene();
    assert_eq!(scene.items.len(), 53);
    let banner = &scene.items[52];
    match &banner.drawable {
        Drawable::Banner { heading, .. } => assert_eq!(heading, "No Match!"),
        other => panic!("expected banner, got {other:?}"),
    }
    assert_eq!(
        banner.pos,
        Point::new(
            game.options().scene_width() / 2,
            game.options().scene_height() - 2 * game.options().card_height()
        )
    );
}

#[test]
fn reset_deals_a_fresh_board() {
    let mut game = Game::new(GameOptions::default(), 13).unwrap();
    let before: Vec<Card> = game.board().cards().map(|(_, p)| p.card()).collect();

    let cards = board_snapshot(&game);
    let (first, second) = find_pair(&cards, true).unwrap();
    assert_eq!(game.point_clicked(first), None);
    assert_eq!(game.point_clicked(second), None);
    assert_eq!(game.point_clicked(Point::new(0, 0)), None);
    assert_eq!(game.remaining_pairs(), 25);

    game.reset().unwrap();

    assert_eq!(game.stage(), Stage::PickingFirst);
    assert_eq!(game.picks(), (None, None));
    assert_eq!(game.remaining_pairs(), 26);
    assert_eq!(game.board().remaining(), 52);
    assert!(game.board().cards().all(|(_, p)| !p.is_face_up()));

    // The reset board is reshuffled, not a replay of the first deal.
    let after: Vec<Card> = game.board().cards().map(|(_, p)| p.card()).collect();
    assert_ne!(before, after);
}

#[test]
fn new_game_rejects_degenerate_grids() {
    assert_eq!(
        Game::new(GameOptions::default().with_cols(0), 1).unwrap_err(),
        DealError::EmptyGrid
    );
    assert_eq!(
        Game::new(GameOptions::default().with_rows(3).with_cols(3), 1).unwrap_err(),
        DealError::OddCellCount
    );
    assert_eq!(
        Game::new(GameOptions::default().with_rows(6).with_cols(10), 1).unwrap_err(),
        DealError::NotEnoughCards
    );
}

#[test]
fn clearing_the_board_wins_exactly_once() {
    let mut game = Game::new(GameOptions::default(), 3).unwrap();
    let mut wins = 0;

    while game.board().remaining() > 0 {
        let cards = board_snapshot(&game);
        let (first, second) = find_pair(&cards, true).expect("a full deck always pairs up");

        assert_eq!(game.point_clicked(first), None);
        assert_eq!(game.point_clicked(second), None);
        assert!(game.matched());

        if let Some(GameEvent::Won { message }) = game.point_clicked(Point::new(0, 0)) {
            assert_eq!(message, "You Win!");
            wins += 1;
        }
    }

    assert_eq!(wins, 1);
    assert_eq!(game.remaining_pairs(), 0);
    assert!(game.board().is_cleared());

    // The win screen replaces the board scene.
    let scene = game.current_scene();
    assert_eq!(scene.items.len(), 1);
    assert!(matches!(scene.items[0].drawable, Drawable::Banner { .. }));

    // Further clicks are no-ops and never re-fire the win.
    assert_eq!(game.point_clicked(Point::new(97, 112)), None);
    assert_eq!(game.stage(), Stage::PickingFirst);
}
