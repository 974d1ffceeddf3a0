use serde::Serialize;

/// The three sub-scores behind a confidence value, plus the final result.
///
/// Exposing the breakdown lets callers display or test the deterministic
/// terms (distance, ratings) independently of the schedule term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceBreakdown {
    /// 0–100, decays with planar degree distance between the parties.
    pub distance_score: f64,
    /// 0–100 on a 0–5 rating scale; the summed ratings scaled by 10.
    pub rating_score: f64,
    /// Schedule-compatibility term, [80, 100) from the shipping model.
    pub schedule_score: f64,
    /// Final confidence: the unweighted average of the three sub-scores,
    /// rounded and clamped to [0, 100].
    pub confidence: u8,
}
