//! 1-D stock cutting.
//!
//! Estimates how many stock lengths (e.g. 288" extrusion bars) must be purchased to saw a set of cut pieces,
//! using the first-fit-decreasing heuristic.  A kerf (the material lost to the saw blade) is charged for every
//! cut after the first in a stock piece.
//!
//! The result is an estimate, FFD never re-opens or rebalances a stock piece once a cut has been placed.

use tracing::{debug, trace, Level};

pub const DEFAULT_KERF_WIDTH: f64 = 0.125;

/// Configuration parameters for stock cutting.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StockCuttingConfig {
    /// Material lost per cut joint, in the same units as the cut lengths.
    pub kerf_width: f64,
}

impl Default for StockCuttingConfig {
    fn default() -> Self {
        Self {
            kerf_width: DEFAULT_KERF_WIDTH,
        }
    }
}

impl StockCuttingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kerf_width(mut self, kerf_width: f64) -> Self {
        self.kerf_width = kerf_width;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct StockPackingResult {
    pub stock_pieces_needed: u32,
    /// `stock_pieces_needed * stock_length`
    pub total_stock_length: f64,
    /// `total_stock_length - sum(cuts)`
    pub waste_length: f64,
    /// Rounded to one decimal place.
    pub waste_percent: f64,
}

/// Packs the cuts using the default kerf width.
pub fn calculate_optimized_stock_pieces(cut_lengths: &[f64], stock_length: f64) -> StockPackingResult {
    calculate_optimized_stock_pieces_with_kerf(cut_lengths, stock_length, DEFAULT_KERF_WIDTH)
}

/// Packs the cuts into as few stock pieces as the first-fit-decreasing heuristic can find.
///
/// An empty cut list, or a stock length that is not positive, yields the all-zero result.
///
/// A cut that is longer than the stock length is not rejected, it consumes a stock piece of its own.
#[tracing::instrument(level = Level::TRACE, skip(cut_lengths), fields(cuts = cut_lengths.len()))]
pub fn calculate_optimized_stock_pieces_with_kerf(
    cut_lengths: &[f64],
    stock_length: f64,
    kerf_width: f64,
) -> StockPackingResult {
    // written this way round so that NaN is also rejected
    if cut_lengths.is_empty() || !(stock_length > 0.0) {
        return StockPackingResult::default();
    }

    // `sort_by` is stable, equal cuts keep their relative order.
    let mut sorted_cut_lengths = cut_lengths.to_vec();
    sorted_cut_lengths.sort_by(|a, b| b.total_cmp(a));

    let mut stock_pieces: Vec<StockPiece> = vec![];

    for cut_length in sorted_cut_lengths {
        match stock_pieces
            .iter_mut()
            .enumerate()
            .find(|(_, stock_piece)| stock_piece.fits(cut_length, kerf_width))
        {
            Some((index, stock_piece)) => {
                stock_piece.place(cut_length, kerf_width);
                trace!(
                    "Placed cut. cut: {}, stock_piece: {}, remaining: {}",
                    cut_length,
                    index,
                    stock_piece.remaining
                );
            }
            None => {
                let mut stock_piece = StockPiece::open(stock_length);
                stock_piece.place(cut_length, kerf_width);
                trace!(
                    "Opened stock piece. cut: {}, stock_piece: {}, remaining: {}",
                    cut_length,
                    stock_pieces.len(),
                    stock_piece.remaining
                );
                stock_pieces.push(stock_piece);
            }
        }
    }

    let stock_pieces_needed = u32::try_from(stock_pieces.len()).unwrap_or(u32::MAX);
    let total_stock_length = f64::from(stock_pieces_needed) * stock_length;
    let total_cut_length: f64 = cut_lengths.iter().sum();
    let waste_length = total_stock_length - total_cut_length;
    let waste_percent = if total_stock_length > 0.0 {
        round_to_one_decimal(waste_length / total_stock_length * 100.0)
    } else {
        0.0
    };

    debug!(
        "Packed cuts. cuts: {}, stock_length: {}, kerf_width: {}, stock_pieces: {}, waste_length: {}, waste_percent: {}",
        cut_lengths.len(),
        stock_length,
        kerf_width,
        stock_pieces_needed,
        waste_length,
        waste_percent
    );

    StockPackingResult {
        stock_pieces_needed,
        total_stock_length,
        waste_length,
        waste_percent,
    }
}

/// Halves round up, `12.25` becomes `12.3` and `-12.25` becomes `-12.2`.
fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

struct StockPiece {
    remaining: f64,
    cuts: usize,
}

impl StockPiece {
    fn open(stock_length: f64) -> Self {
        Self {
            remaining: stock_length,
            cuts: 0,
        }
    }

    /// The first cut in a stock piece needs no leading kerf.
    fn required(&self, cut_length: f64, kerf_width: f64) -> f64 {
        match self.cuts {
            0 => cut_length,
            _ => cut_length + kerf_width,
        }
    }

    fn fits(&self, cut_length: f64, kerf_width: f64) -> bool {
        self.remaining >= self.required(cut_length, kerf_width)
    }

    fn place(&mut self, cut_length: f64, kerf_width: f64) {
        self.remaining -= self.required(cut_length, kerf_width);
        self.cuts += 1;
    }
}
