use super::{keys, put_common};
use crate::extractor::EventDataExtractor;
use crate::gesture::{HandlerCommon, PinchData};
use crate::payload::PayloadBuilder;

#[derive(Clone, Copy, Debug, Default)]
pub struct PinchExtractor;

impl EventDataExtractor for PinchExtractor {
    type Gesture = PinchData;

    const KEYS: &'static [&'static str] = &[
        keys::SCALE,
        keys::FOCAL_X,
        keys::FOCAL_Y,
        keys::VELOCITY,
        keys::NUMBER_OF_POINTERS,
        keys::STATE,
    ];

    fn extract(&self, common: &HandlerCommon, pinch: &PinchData, out: &mut PayloadBuilder) {
        out.put(keys::SCALE, pinch.scale)
            .put(keys::FOCAL_X, pinch.focal_x)
            .put(keys::FOCAL_Y, pinch.focal_y)
            .put(keys::VELOCITY, pinch.velocity);
        put_common(common, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::test_support::{assert_keys, common, run};
    use crate::gesture::GestureState;
    use crate::payload::Value;

    #[test]
    fn reports_scale_and_focal_point() {
        let pinch = PinchData {
            scale: 2.25,
            focal_x: 160.0,
            focal_y: 240.0,
            velocity: 0.5,
        };
        let p = run(&PinchExtractor, &common(GestureState::Active, Some(2)), &pinch);

        assert_keys::<PinchExtractor>(&p);
        assert_eq!(p.get("scale"), Some(&Value::Float(2.25)));
        assert_eq!(p.get("focalY"), Some(&Value::Float(240.0)));
        assert_eq!(p.get("numberOfPointers"), Some(&Value::Int(2)));
    }
}
