#![allow(dead_code)]

use pinchpoint::{
    FlingData, ForceTouchData, GestureHandler, GestureKind, GestureState, HandlerCommon,
    HandlerTag, LongPressData, NativeViewData, PanData, PinchData, PointerPosition,
    RotationData, TapData, ViewTag,
};
use std::time::Duration;

pub fn common(tag: u32, state: GestureState, pointers: Option<u32>) -> HandlerCommon {
    HandlerCommon {
        tag: HandlerTag(tag),
        view: ViewTag(100 + tag),
        state,
        number_of_pointers: pointers,
        position: PointerPosition {
            x: 4.0,
            y: 8.0,
            absolute_x: 104.0,
            absolute_y: 208.0,
        },
    }
}

/// One populated handler of every kind.
pub fn one_of_each(state: GestureState) -> Vec<GestureHandler> {
    let kinds: Vec<GestureKind> = vec![
        TapData.into(),
        PanData {
            translation_x: 3.0,
            translation_y: 4.0,
            velocity_x: -20.0,
            velocity_y: 15.5,
        }
        .into(),
        PinchData {
            scale: 0.8,
            focal_x: 12.0,
            focal_y: 13.0,
            velocity: -0.2,
        }
        .into(),
        RotationData {
            rotation: 0.3,
            anchor_x: 1.0,
            anchor_y: 2.0,
            velocity: 0.1,
        }
        .into(),
        FlingData.into(),
        LongPressData {
            duration: Duration::from_millis(650),
        }
        .into(),
        ForceTouchData { force: Some(0.4) }.into(),
        NativeViewData {
            pointer_inside: true,
        }
        .into(),
    ];
    kinds
        .into_iter()
        .enumerate()
        .map(|(i, kind)| GestureHandler::new(common(i as u32, state, Some(1)), kind))
        .collect()
}
