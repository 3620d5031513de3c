use crate::map::models::LngLat;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_008.8;

pub const TOKYO_LOCATIONS: [LngLat; 13] = [
    LngLat::new(139.746247, 35.659103),
    LngLat::new(139.775039823498, 35.62688839051935),
    LngLat::new(139.7425465928838, 35.62901450284541),
    LngLat::new(139.73098887729316, 35.634774933759935),
    LngLat::new(139.73084512638385, 35.64045446313923),
    LngLat::new(139.73081620816902, 35.64998949295825),
    LngLat::new(139.726025422902, 35.652420489771295),
    LngLat::new(139.7410097090811, 35.65267872518089),
    LngLat::new(139.75412546592008, 35.665835434143766),
    LngLat::new(139.73210944808986, 35.67121154298727),
    LngLat::new(139.7148656884602, 35.66547356765915),
    LngLat::new(139.7303179953378, 35.676509652592905),
    LngLat::new(139.75763097559113, 35.665074208904436),
];
