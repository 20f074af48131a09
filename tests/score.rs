//! Scoring function tests.

#![allow(clippy::std_instead_of_alloc)]

use std::collections::BTreeSet;

use dicers::Category;
use dicers::score::{balut_score, category_score, greed_score};

fn indices<const N: usize>(values: [usize; N]) -> BTreeSet<usize> {
    values.into_iter().collect()
}

#[test]
fn greed_full_straight_scores_1500() {
    let roll = greed_score(&[1, 2, 3, 4, 5, 6]);
    assert_eq!(roll.points, 1500);
    assert_eq!(roll.scoring, indices([0, 1, 2, 3, 4, 5]));
}

#[test]
fn greed_six_of_a_kind_scores_3000() {
    let roll = greed_score(&[4, 4, 4, 4, 4, 4]);
    assert_eq!(roll.points, 3000);
    assert_eq!(roll.scoring.len(), 6);
}

#[test]
fn greed_five_of_a_kind_claims_every_die() {
    // The non-matching straggler is claimed along with the five.
    let roll = greed_score(&[3, 3, 3, 3, 3, 2]);
    assert_eq!(roll.points, 2000);
    assert_eq!(roll.scoring, indices([0, 1, 2, 3, 4, 5]));
}

#[test]
fn greed_three_pairs_scores_1500() {
    let roll = greed_score(&[2, 2, 4, 4, 6, 6]);
    assert_eq!(roll.points, 1500);
    assert_eq!(roll.scoring.len(), 6);
}

#[test]
fn greed_triple_scores_face_rate() {
    let roll = greed_score(&[2, 2, 2, 4, 6, 3]);
    assert_eq!(roll.points, 200);
    assert_eq!(roll.scoring, indices([0, 1, 2]));
}

#[test]
fn greed_triple_ones_score_1000() {
    let roll = greed_score(&[1, 1, 1, 2, 3, 4]);
    assert_eq!(roll.points, 1000);
    assert_eq!(roll.scoring, indices([0, 1, 2]));
}

#[test]
fn greed_fourth_one_scores_single_rate() {
    let roll = greed_score(&[1, 1, 1, 1, 2, 3]);
    assert_eq!(roll.points, 1100);
    assert_eq!(roll.scoring, indices([0, 1, 2, 3]));
}

#[test]
fn greed_loose_ones_and_fives_score_singles() {
    let roll = greed_score(&[1, 5, 5, 2, 3, 6]);
    assert_eq!(roll.points, 200);
    assert_eq!(roll.scoring, indices([0, 1, 2]));
}

#[test]
fn greed_partial_reroll_scores_singles() {
    let roll = greed_score(&[5, 5, 2]);
    assert_eq!(roll.points, 100);
    assert_eq!(roll.scoring, indices([0, 1]));
}

#[test]
fn greed_no_scoring_dice_is_bust() {
    let roll = greed_score(&[2, 2, 3, 3, 4, 6]);
    assert_eq!(roll.points, 0);
    assert!(roll.scoring.is_empty());
    assert!(roll.is_bust());
}

#[test]
fn greed_scoring_indices_stay_in_range() {
    let rolls: [&[u8]; 6] = [
        &[1, 2, 3, 4, 5, 6],
        &[5, 5, 5, 5, 5, 5],
        &[1, 1, 1, 1, 1, 2],
        &[5, 5, 2],
        &[2, 3, 4],
        &[6, 6, 6, 1, 5, 5],
    ];
    for dice in rolls {
        let roll = greed_score(dice);
        assert!(
            roll.scoring.iter().all(|&index| index < dice.len()),
            "index out of range for {dice:?}"
        );
    }
}

#[test]
fn balut_five_of_a_kind_scores_50() {
    let roll = balut_score(&[4, 4, 4, 4, 4]);
    assert_eq!(roll.points, 50);
    assert_eq!(roll.scoring, indices([0, 1, 2, 3, 4]));
}

#[test]
fn balut_four_of_a_kind_claims_first_four_matches() {
    let roll = balut_score(&[2, 6, 2, 2, 2]);
    assert_eq!(roll.points, 40);
    assert_eq!(roll.scoring, indices([0, 2, 3, 4]));
}

#[test]
fn balut_full_house_scores_35() {
    let roll = balut_score(&[3, 3, 3, 2, 2]);
    assert_eq!(roll.points, 35);
    assert_eq!(roll.scoring.len(), 5);
}

#[test]
fn balut_large_straight_scores_40() {
    let roll = balut_score(&[2, 3, 4, 5, 6]);
    assert_eq!(roll.points, 40);
    assert_eq!(roll.scoring.len(), 5);
}

#[test]
fn balut_small_straight_found_anywhere() {
    // The run does not have to start at the lowest die.
    let roll = balut_score(&[1, 3, 4, 5, 6]);
    assert_eq!(roll.points, 30);

    let roll = balut_score(&[1, 2, 3, 4, 6]);
    assert_eq!(roll.points, 30);
}

#[test]
fn balut_unmatched_roll_is_bust() {
    let roll = balut_score(&[1, 3, 3, 4, 6]);
    assert_eq!(roll.points, 0);
    assert!(roll.scoring.is_empty());
}

#[test]
fn category_numbers_sum_matching_faces() {
    assert_eq!(category_score(&[1, 1, 2, 3, 1], Category::Ones), 3);
    assert_eq!(category_score(&[4, 4, 2, 4, 6], Category::Fours), 12);
    assert_eq!(category_score(&[2, 3, 4, 5, 6], Category::Ones), 0);
}

#[test]
fn category_combinations_pay_fixed_values() {
    assert_eq!(category_score(&[5, 5, 5, 5, 5], Category::FiveOfAKind), 50);
    assert_eq!(category_score(&[5, 5, 5, 5, 2], Category::FiveOfAKind), 0);
    assert_eq!(category_score(&[5, 5, 5, 5, 2], Category::FourOfAKind), 40);
    assert_eq!(category_score(&[3, 3, 3, 2, 2], Category::FullHouse), 35);
    assert_eq!(category_score(&[3, 3, 3, 2, 1], Category::FullHouse), 0);
    assert_eq!(category_score(&[1, 2, 3, 4, 6], Category::SmallStraight), 30);
    assert_eq!(category_score(&[1, 2, 3, 4, 5], Category::LargeStraight), 40);
    assert_eq!(category_score(&[2, 2, 3, 4, 5], Category::LargeStraight), 0);
}

#[test]
fn category_choice_sums_all_dice() {
    assert_eq!(category_score(&[6, 6, 5, 4, 3], Category::Choice), 24);
}

#[test]
fn category_set_is_canonical() {
    assert_eq!(Category::ALL.len(), 12);
    assert_eq!(Category::FiveOfAKind.name(), "Five of a Kind");
    assert_eq!(Category::Choice.to_string(), "Choice");
}
