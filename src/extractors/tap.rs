use super::{keys, put_common, put_position};
use crate::extractor::EventDataExtractor;
use crate::gesture::{HandlerCommon, TapData};
use crate::payload::PayloadBuilder;

/// Where the tap landed.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapExtractor;

impl EventDataExtractor for TapExtractor {
    type Gesture = TapData;

    const KEYS: &'static [&'static str] = &[
        keys::X,
        keys::Y,
        keys::ABSOLUTE_X,
        keys::ABSOLUTE_Y,
        keys::NUMBER_OF_POINTERS,
        keys::STATE,
    ];

    fn extract(&self, common: &HandlerCommon, _tap: &TapData, out: &mut PayloadBuilder) {
        put_position(&common.position, out);
        put_common(common, out);
    }
}
