use super::{keys, put_common};
use crate::extractor::EventDataExtractor;
use crate::gesture::{HandlerCommon, NativeViewData};
use crate::payload::PayloadBuilder;

/// Whether the pointer is still inside the wrapped native view.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeViewExtractor;

impl EventDataExtractor for NativeViewExtractor {
    type Gesture = NativeViewData;

    const KEYS: &'static [&'static str] = &[
        keys::POINTER_INSIDE,
        keys::NUMBER_OF_POINTERS,
        keys::STATE,
    ];

    fn extract(&self, common: &HandlerCommon, view: &NativeViewData, out: &mut PayloadBuilder) {
        out.put(keys::POINTER_INSIDE, view.pointer_inside);
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
    fn reports_pointer_inside() {
        let p = run(
            &NativeViewExtractor,
            &common(GestureState::Began, Some(1)),
            &NativeViewData {
                pointer_inside: true,
            },
        );
        assert_keys::<NativeViewExtractor>(&p);
        assert_eq!(p.get("pointerInside"), Some(&Value::Bool(true)));
    }
}
