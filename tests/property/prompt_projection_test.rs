//! Property-based tests for the drop zone prompt.
//!
//! These tests verify that the prompt depends only on the conversion status and
//! the input location, and that path decoding never fails loudly.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use proptest::prelude::*;
use video_converter::services::status_projector::{StatusProjector, DROP_PROMPT, SUCCESS_PROMPT};
use video_converter::types::conversion::ConversionStatus;
use video_converter::types::location::SourceLocation;

/// Absolute paths made of arbitrary printable segments, unicode included.
fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[^/\\x00-\\x1f]{1,12}", 1..5)
        .prop_map(|segments| format!("/{}", segments.join("/")))
}

fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

fn arb_input() -> impl Strategy<Value = Option<SourceLocation>> {
    prop::option::of(arb_path().prop_map(|p| {
        SourceLocation::from_data_representation(format!("file://{}", encode_path(&p)).as_bytes())
            .unwrap()
    }))
}

// *For any* absolute path, encoding it into a file URL and projecting it back
// yields the original path.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn file_url_prompt_decodes_to_path(path in arb_path()) {
        let url = format!("file://{}", encode_path(&path));
        let location = SourceLocation::from_data_representation(url.as_bytes()).unwrap();

        let prompt = StatusProjector::prompt(&ConversionStatus::NotStarted, Some(&location));
        prop_assert_eq!(prompt, path);
    }

    #[test]
    fn malformed_escape_falls_back_to_raw(stem in "[a-z]{1,10}", bad in "[g-zG-Z]{2}") {
        let raw = format!("/tmp/{}%{}.mov", stem, bad);
        let location = SourceLocation::from_data_representation(format!("file://{}", raw).as_bytes()).unwrap();

        let prompt = StatusProjector::prompt(&ConversionStatus::NotStarted, Some(&location));
        prop_assert_eq!(prompt, raw);
    }

    #[test]
    fn progress_prompt_has_two_decimals(fraction in 0.0f64..=1.0) {
        let prompt = StatusProjector::prompt(&ConversionStatus::InProgress(fraction), None);
        let expected = format!("Converting... ({:.2}%)", fraction * 100.0);
        prop_assert_eq!(&prompt, &expected);

        let digits = prompt
            .trim_start_matches("Converting... (")
            .trim_end_matches("%)");
        let (_, decimals) = digits.split_once('.').unwrap();
        prop_assert_eq!(decimals.len(), 2);
    }

    #[test]
    fn completed_and_failed_ignore_input(input in arb_input(), message in ".{0,40}") {
        prop_assert_eq!(
            StatusProjector::prompt(&ConversionStatus::Completed, input.as_ref()),
            SUCCESS_PROMPT
        );
        prop_assert_eq!(
            StatusProjector::prompt(&ConversionStatus::Failed(message.clone()), input.as_ref()),
            message
        );
    }

    #[test]
    fn prompt_is_deterministic(input in arb_input(), fraction in 0.0f64..=1.0) {
        for status in [ConversionStatus::NotStarted, ConversionStatus::InProgress(fraction)] {
            let a = StatusProjector::prompt(&status, input.as_ref());
            let b = StatusProjector::prompt(&status, input.clone().as_ref());
            prop_assert_eq!(a, b);
        }
        if input.is_none() {
            prop_assert_eq!(StatusProjector::prompt(&ConversionStatus::NotStarted, None), DROP_PROMPT);
        }
    }
}
