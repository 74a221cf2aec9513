use super::{keys, put_common, put_position};
use crate::extractor::EventDataExtractor;
use crate::gesture::{FlingData, HandlerCommon};
use crate::payload::PayloadBuilder;

/// Position of the pointer when the fling was recognized.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlingExtractor;

impl EventDataExtractor for FlingExtractor {
    type Gesture = FlingData;

    const KEYS: &'static [&'static str] = &[
        keys::X,
        keys::Y,
        keys::ABSOLUTE_X,
        keys::ABSOLUTE_Y,
        keys::NUMBER_OF_POINTERS,
        keys::STATE,
    ];

    fn extract(&self, common: &HandlerCommon, _fling: &FlingData, out: &mut PayloadBuilder) {
        put_position(&common.position, out);
        put_common(common, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::test_support::{assert_keys, common, run};
    use crate::gesture::GestureState;

    #[test]
    fn writes_position_keys() {
        let p = run(&FlingExtractor, &common(GestureState::Active, Some(2)), &FlingData);
        assert_keys::<FlingExtractor>(&p);
    }
}
