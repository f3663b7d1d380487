// Scores are relative material units: a pawn is worth 10.
pub type Score = f32;

// Sentinels that seed the alpha-beta window.
pub const POS_INFINITY: Score = f32::INFINITY;
pub const NEG_INFINITY: Score = f32::NEG_INFINITY;

const CENTIPAWNS_PER_UNIT: f32 = 10.0;

/// Converts a score to centipawns for reporting.
pub fn to_centipawns(score: Score) -> i32 {
    (score * CENTIPAWNS_PER_UNIT).round() as i32
}
