use super::{keys, put_common, put_position};
use crate::extractor::EventDataExtractor;
use crate::gesture::{ForceTouchData, HandlerCommon};
use crate::payload::PayloadBuilder;

/// Pressure and position. `force` is `0.0` when the device has no pressure sensor.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForceTouchExtractor;

impl EventDataExtractor for ForceTouchExtractor {
    type Gesture = ForceTouchData;

    const KEYS: &'static [&'static str] = &[
        keys::FORCE,
        keys::X,
        keys::Y,
        keys::ABSOLUTE_X,
        keys::ABSOLUTE_Y,
        keys::NUMBER_OF_POINTERS,
        keys::STATE,
    ];

    fn extract(&self, common: &HandlerCommon, touch: &ForceTouchData, out: &mut PayloadBuilder) {
        out.put(keys::FORCE, touch.force.unwrap_or(0.0));
        put_position(&common.position, out);
        put_common(common, out);
    }
}
