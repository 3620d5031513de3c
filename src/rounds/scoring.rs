use crate::map::distance::{distance_meters, format_distance, rounded_meters};
use crate::map::models::LngLat;
use crate::rounds::consts::{LINE_COLOR, LINE_WIDTH, TARGET_MARKER_COLOR};
use crate::rounds::errors::ScoreError;
use serde::{Deserialize, Serialize};

/// Result of a round together with the overlays the client draws on the basemap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub distance_meters: u64,
    /// Rounded distance ready for display, e.g. `"1532m"`.
    pub display: String,
    pub target_marker: Marker,
    /// Straight line from the guess to the target.
    pub line: LineOverlay,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub position: LngLat,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineOverlay {
    /// GeoJSON `LineString` coordinates.
    pub coordinates: [[f64; 2]; 2],
    pub color: String,
    pub width: u32,
}

pub fn score(target: Option<LngLat>, guess: Option<LngLat>) -> Result<Score, ScoreError> {
    let (Some(target), Some(guess)) = (target, guess) else {
        return Err(ScoreError::NotComputable);
    };
    let meters = distance_meters(guess, target);
    Ok(Score {
        distance_meters: rounded_meters(meters),
        display: format_distance(meters),
        target_marker: Marker {
            position: target,
            color: TARGET_MARKER_COLOR.to_string(),
        },
        line: LineOverlay {
            coordinates: [guess.as_position(), target.as_position()],
            color: LINE_COLOR.to_string(),
            width: LINE_WIDTH,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::score;
    use crate::map::consts::TOKYO_LOCATIONS;
    use crate::map::models::LngLat;
    use crate::rounds::errors::ScoreError;

    #[test]
    fn test_exact_guess_scores_zero() {
        let spot = LngLat::new(139.746247, 35.659103);
        let score = score(Some(spot), Some(spot)).unwrap();
        assert_eq!(score.distance_meters, 0);
        assert_eq!(score.display, "0m");
    }

    #[test]
    fn test_missing_side_is_not_computable() {
        let spot = TOKYO_LOCATIONS[3];
        assert_eq!(score(Some(spot), None), Err(ScoreError::NotComputable));
        assert_eq!(score(None, Some(spot)), Err(ScoreError::NotComputable));
        assert_eq!(score(None, None), Err(ScoreError::NotComputable));
    }

    #[test]
    fn test_overlays_point_from_guess_to_target() {
        let target = TOKYO_LOCATIONS[0];
        let guess = TOKYO_LOCATIONS[1];
        let score = score(Some(target), Some(guess)).unwrap();
        assert_eq!(score.target_marker.position, target);
        assert_eq!(
            score.line.coordinates,
            [guess.as_position(), target.as_position()]
        );
        assert_eq!(score.display, format!("{}m", score.distance_meters));
    }

    #[test]
    fn test_score_is_symmetric_in_distance() {
        let a = TOKYO_LOCATIONS[4];
        let b = TOKYO_LOCATIONS[9];
        assert_eq!(
            score(Some(a), Some(b)).unwrap().distance_meters,
            score(Some(b), Some(a)).unwrap().distance_meters,
        );
    }
}
