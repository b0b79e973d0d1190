use itertools::Itertools;
use rstest::rstest;

use crate::stock_cutting::{calculate_optimized_stock_pieces, calculate_optimized_stock_pieces_with_kerf};

#[rstest]
#[case::single(vec![48.0])]
#[case::kerf_bound(vec![144.0, 144.0])]
#[case::mixed(vec![60.0, 150.0, 80.0, 200.0, 42.0])]
#[case::duplicates(vec![96.0, 96.0, 96.0, 42.5, 42.5, 42.5])]
#[case::oversized(vec![300.0, 12.0, 275.5])]
#[case::zero_lengths(vec![0.0, 0.0, 288.0])]
fn order_does_not_change_stock_pieces(#[case] cut_lengths: Vec<f64>) {
    // given
    let expected = calculate_optimized_stock_pieces(&cut_lengths, 288.0);

    // when
    let results = cut_lengths
        .iter()
        .copied()
        .permutations(cut_lengths.len())
        .map(|permutation| calculate_optimized_stock_pieces(&permutation, 288.0))
        .collect::<Vec<_>>();

    // then
    for result in results {
        assert_eq!(result.stock_pieces_needed, expected.stock_pieces_needed);
        assert_eq!(result.waste_percent, expected.waste_percent);
    }
}

#[rstest]
#[case(vec![1.0], 288.0, 0.125)]
#[case(vec![287.0, 1.0], 288.0, 0.125)]
#[case(vec![12.0; 50], 96.0, 0.25)]
#[case(vec![500.0, 500.0], 288.0, 0.0)]
#[case(vec![33.3, 66.6, 99.9, 133.2], 144.0, 0.125)]
fn non_empty_cuts_need_at_least_one_piece(
    #[case] cut_lengths: Vec<f64>,
    #[case] stock_length: f64,
    #[case] kerf_width: f64,
) {
    // when
    let result = calculate_optimized_stock_pieces_with_kerf(&cut_lengths, stock_length, kerf_width);

    // then
    assert!(result.stock_pieces_needed >= 1);
    assert_eq!(
        result.total_stock_length,
        f64::from(result.stock_pieces_needed) * stock_length
    );
    assert_eq!(
        result.waste_length,
        result.total_stock_length - cut_lengths.iter().sum::<f64>()
    );
    assert!(result.waste_percent <= 100.0);
}

#[rstest]
#[case(0.0)]
#[case(0.125)]
#[case(0.25)]
#[case(1.0)]
fn larger_kerf_never_needs_fewer_pieces_for_identical_cuts(#[case] kerf_width: f64) {
    let cut_lengths = vec![47.5; 24];

    let result = calculate_optimized_stock_pieces_with_kerf(&cut_lengths, 288.0, kerf_width);
    let wider = calculate_optimized_stock_pieces_with_kerf(&cut_lengths, 288.0, kerf_width + 0.5);

    assert!(wider.stock_pieces_needed >= result.stock_pieces_needed);
}

#[test]
fn each_oversized_cut_uses_its_own_piece() {
    let result = calculate_optimized_stock_pieces(&[300.0, 300.0, 300.0], 288.0);

    assert_eq!(result.stock_pieces_needed, 3);
}
