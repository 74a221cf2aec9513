use super::{keys, put_common};
use crate::extractor::EventDataExtractor;
use crate::gesture::{HandlerCommon, PanData};
use crate::payload::PayloadBuilder;

/// Translation since the gesture began and current velocity.
///
/// Pointer position is not reported; consumers integrate the translation.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanExtractor;

impl EventDataExtractor for PanExtractor {
    type Gesture = PanData;

    const KEYS: &'static [&'static str] = &[
        keys::TRANSLATION_X,
        keys::TRANSLATION_Y,
        keys::VELOCITY_X,
        keys::VELOCITY_Y,
        keys::NUMBER_OF_POINTERS,
        keys::STATE,
    ];

    fn extract(&self, common: &HandlerCommon, pan: &PanData, out: &mut PayloadBuilder) {
        out.put(keys::TRANSLATION_X, pan.translation_x)
            .put(keys::TRANSLATION_Y, pan.translation_y)
            .put(keys::VELOCITY_X, pan.velocity_x)
            .put(keys::VELOCITY_Y, pan.velocity_y);
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
    fn active_pan_reports_translation_and_velocity() {
        let pan = PanData {
            translation_x: 12.5,
            translation_y: -3.0,
            velocity_x: 100.0,
            velocity_y: 0.0,
        };
        let p = run(&PanExtractor, &common(GestureState::Active, Some(1)), &pan);

        assert_keys::<PanExtractor>(&p);
        assert_eq!(p.get("translationX"), Some(&Value::Float(12.5)));
        assert_eq!(p.get("translationY"), Some(&Value::Float(-3.0)));
        assert_eq!(p.get("velocityX"), Some(&Value::Float(100.0)));
        assert_eq!(p.get("velocityY"), Some(&Value::Float(0.0)));
        assert_eq!(p.get("numberOfPointers"), Some(&Value::Int(1)));
        assert_eq!(p.get("state"), Some(&Value::Str("Active".into())));
    }

    #[test]
    fn missing_pointer_count_is_zero() {
        let p = run(
            &PanExtractor,
            &common(GestureState::Undetermined, None),
            &PanData::default(),
        );
        assert_keys::<PanExtractor>(&p);
        assert_eq!(p.get("numberOfPointers"), Some(&Value::Int(0)));
    }
}
