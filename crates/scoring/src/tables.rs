use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Evaluates a piecewise-linear curve given by ascending `(knot, score)`
/// pairs. Values below the first knot score `floor`; values at or beyond
/// the last knot score the last knot's score; in between, the score is
/// interpolated linearly inside the band.
fn piecewise(value: Decimal, knots: &[(Decimal, Decimal)], floor: Decimal) -> Decimal {
    let Some(&(first_knot, _)) = knots.first() else {
        return floor;
    };
    if value < first_knot {
        return floor;
    }
    for pair in knots.windows(2) {
        let (lo_knot, lo_score) = pair[0];
        let (hi_knot, hi_score) = pair[1];
        if value < hi_knot {
            return lo_score + (value - lo_knot) / (hi_knot - lo_knot) * (hi_score - lo_score);
        }
    }
    match knots.last() {
        Some(&(_, last_score)) => last_score,
        None => floor,
    }
}

/// Shared curve for the average win/loss ratio and the profit factor.
/// A ratio of 2.6 or better is a perfect 100; below 1.8 the score floors
/// at a flat 20.
pub fn ratio_sub_score(value: Decimal) -> Decimal {
    piecewise(
        value,
        &[
            (dec!(1.8), dec!(50)),
            (dec!(1.9), dec!(60)),
            (dec!(2.0), dec!(70)),
            (dec!(2.2), dec!(80)),
            (dec!(2.4), dec!(90)),
            (dec!(2.6), dec!(100)),
        ],
        dec!(20),
    )
}

/// A 60% win rate is treated as perfect; higher rates still cap at 100.
pub fn win_percentage_sub_score(win_pct: Decimal) -> Decimal {
    (win_pct / dec!(60) * dec!(100)).min(dec!(100))
}

/// Zero drawdown scores 100; a 100% drawdown (or worse) scores 0.
pub fn drawdown_sub_score(drawdown_pct: Decimal) -> Decimal {
    (dec!(100) - drawdown_pct).max(Decimal::ZERO)
}

/// Recovery factor curve: 1.0 is the minimum worth any credit, 3.5 and
/// above is a perfect 100.
pub fn recovery_sub_score(value: Decimal) -> Decimal {
    piecewise(
        value,
        &[
            (dec!(1.0), dec!(0)),
            (dec!(1.5), dec!(20)),
            (dec!(2.0), dec!(40)),
            (dec!(2.5), dec!(60)),
            (dec!(3.0), dec!(80)),
            (dec!(3.5), dec!(100)),
        ],
        Decimal::ZERO,
    )
}

/// The consistency score is already expressed on the 0-100 scale.
pub fn consistency_sub_score(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, dec!(100))
}
