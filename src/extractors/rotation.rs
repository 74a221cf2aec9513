use super::{keys, put_common};
use crate::extractor::EventDataExtractor;
use crate::gesture::{HandlerCommon, RotationData};
use crate::payload::PayloadBuilder;

#[derive(Clone, Copy, Debug, Default)]
pub struct RotationExtractor;

impl EventDataExtractor for RotationExtractor {
    type Gesture = RotationData;

    const KEYS: &'static [&'static str] = &[
        keys::ROTATION,
        keys::ANCHOR_X,
        keys::ANCHOR_Y,
        keys::VELOCITY,
        keys::NUMBER_OF_POINTERS,
        keys::STATE,
    ];

    fn extract(&self, common: &HandlerCommon, rotation: &RotationData, out: &mut PayloadBuilder) {
        out.put(keys::ROTATION, rotation.rotation)
            .put(keys::ANCHOR_X, rotation.anchor_x)
            .put(keys::ANCHOR_Y, rotation.anchor_y)
            .put(keys::VELOCITY, rotation.velocity);
        put_common(common, out);
    }
}
