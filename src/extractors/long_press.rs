use super::{keys, put_common, put_position};
use crate::extractor::EventDataExtractor;
use crate::gesture::{HandlerCommon, LongPressData};
use crate::payload::PayloadBuilder;

/// Position plus how long the pointer has been held, in whole milliseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct LongPressExtractor;

impl EventDataExtractor for LongPressExtractor {
    type Gesture = LongPressData;

    const KEYS: &'static [&'static str] = &[
        keys::X,
        keys::Y,
        keys::ABSOLUTE_X,
        keys::ABSOLUTE_Y,
        keys::DURATION,
        keys::NUMBER_OF_POINTERS,
        keys::STATE,
    ];

    fn extract(&self, common: &HandlerCommon, press: &LongPressData, out: &mut PayloadBuilder) {
        put_position(&common.position, out);
        let millis = i64::try_from(press.duration.as_millis()).unwrap_or(i64::MAX);
        out.put(keys::DURATION, millis);
        put_common(common, out);
    }
}
