//! Property-based tests for the Convert button and the rendered view model.
//!
//! The button is enabled exactly when an input is set and no conversion is running.

use proptest::prelude::*;
use video_converter::types::conversion::ConversionStatus;
use video_converter::types::location::SourceLocation;
use video_converter::types::state::ConverterState;
use video_converter::types::video::{VideoFormat, VideoQuality};
use video_converter::ui::style::DropZoneStyle;
use video_converter::ui::view_model::ConverterViewModel;

fn arb_status() -> impl Strategy<Value = ConversionStatus> {
    prop_oneof![
        Just(ConversionStatus::NotStarted),
        (0.0f64..=1.0).prop_map(ConversionStatus::InProgress),
        ".{0,20}".prop_map(ConversionStatus::Failed),
        Just(ConversionStatus::Completed),
    ]
}

fn arb_input() -> impl Strategy<Value = Option<SourceLocation>> {
    prop::option::of("[a-z]{1,10}".prop_map(|name| {
        SourceLocation::from_data_representation(format!("file:///videos/{}.mov", name).as_bytes())
            .unwrap()
    }))
}

fn arb_state() -> impl Strategy<Value = ConverterState> {
    (
        arb_status(),
        arb_input(),
        prop::sample::select(VideoFormat::ALL.to_vec()),
        prop::sample::select(VideoQuality::ALL.to_vec()),
    )
        .prop_map(|(conversion_status, input_video, target_format, target_quality)| ConverterState {
            conversion_status,
            input_video,
            target_format,
            target_quality,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn convert_enabled_iff_input_and_idle(state in arb_state(), hovering in any::<bool>()) {
        let vm = ConverterViewModel::build(&state, hovering);
        let expected = state.input_video.is_some() && !state.conversion_status.is_in_progress();
        prop_assert_eq!(vm.convert_enabled, expected);
        prop_assert_eq!(state.can_convert(), expected);
    }

    #[test]
    fn in_progress_always_disables(fraction in 0.0f64..=1.0, input in arb_input()) {
        let state = ConverterState {
            conversion_status: ConversionStatus::InProgress(fraction),
            input_video: input,
            ..ConverterState::default()
        };
        prop_assert!(!ConverterViewModel::build(&state, false).convert_enabled);
    }

    #[test]
    fn progress_bar_tracks_status(state in arb_state()) {
        let vm = ConverterViewModel::build(&state, false);
        prop_assert_eq!(vm.progress.is_some(), state.conversion_status.is_in_progress());
        if let Some(p) = vm.progress {
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn drop_zone_style_depends_only_on_hover(a in arb_state(), b in arb_state(), hovering in any::<bool>()) {
        let va = ConverterViewModel::build(&a, hovering);
        let vb = ConverterViewModel::build(&b, hovering);
        prop_assert_eq!(&va.drop_zone, &vb.drop_zone);
        prop_assert_eq!(va.drop_zone, DropZoneStyle::for_hover(hovering));
    }

    #[test]
    fn pickers_list_every_option_once(state in arb_state()) {
        let vm = ConverterViewModel::build(&state, false);
        prop_assert_eq!(vm.formats.len(), VideoFormat::ALL.len());
        prop_assert_eq!(vm.qualities.len(), VideoQuality::ALL.len());
        prop_assert_eq!(vm.formats.iter().filter(|o| o.selected).count(), 1);
        prop_assert_eq!(vm.qualities.iter().filter(|o| o.selected).count(), 1);
    }
}
