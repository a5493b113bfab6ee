use cadence_repeat::{RecurrenceRequest, generate};

pub struct RepeatCase {
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub recurrence_type: &'static str,
    pub interval: u32,
    pub expected: Option<&'static [&'static str]>,
    pub expected_len: Option<usize>,
    pub expected_error: Option<&'static str>,
}

#[expect(clippy::too_many_lines)]
pub fn repeat_cases() -> Vec<RepeatCase> {
    vec![
        RepeatCase {
            name: "daily_basic",
            start: "2024-10-01",
            end: "2024-10-05",
            recurrence_type: "daily",
            interval: 1,
            expected: Some(&[
                "2024-10-01",
                "2024-10-02",
                "2024-10-03",
                "2024-10-04",
                "2024-10-05",
            ]),
            expected_len: None,
            expected_error: None,
        },
        RepeatCase {
            name: "daily_interval_2",
            start: "2024-10-01",
            end: "2024-10-05",
            recurrence_type: "daily",
            interval: 2,
            expected: Some(&["2024-10-01", "2024-10-03", "2024-10-05"]),
            expected_len: None,
            expected_error: None,
        },
        RepeatCase {
            name: "daily_across_year_end",
            start: "2024-12-30",
            end: "2025-01-02",
            recurrence_type: "daily",
            interval: 1,
            expected: Some(&["2024-12-30", "2024-12-31", "2025-01-01", "2025-01-02"]),
            expected_len: None,
            expected_error: None,
        },
        RepeatCase {
            name: "weekly_basic",
            start: "2024-10-01",
            end: "2024-10-22",
            recurrence_type: "weekly",
            interval: 1,
            expected: Some(&["2024-10-01", "2024-10-08", "2024-10-15", "2024-10-22"]),
            expected_len: None,
            expected_error: None,
        },
        RepeatCase {
            name: "weekly_interval_3_end_between_steps",
            start: "2024-10-01",
            end: "2024-11-10",
            recurrence_type: "weekly",
            interval: 3,
            expected: Some(&["2024-10-01", "2024-10-22"]),
            expected_len: None,
            expected_error: None,
        },
        RepeatCase {
            name: "monthly_basic",
            start: "2024-10-01",
            end: "2024-12-01",
            recurrence_type: "monthly",
            interval: 1,
            expected: Some(&["2024-10-01", "2024-11-01", "2024-12-01"]),
            expected_len: None,
            expected_error: None,
        },
        RepeatCase {
            name: "monthly_from_31st_clamps_per_step",
            start: "2025-01-31",
            end: "2025-05-31",
            recurrence_type: "monthly",
            interval: 1,
            expected: Some(&[
                "2025-01-31",
                "2025-02-28",
                "2025-03-28",
                "2025-04-28",
                "2025-05-28",
            ]),
            expected_len: None,
            expected_error: None,
        },
        RepeatCase {
            name: "monthly_interval_5_carries_year",
            start: "2024-10-15",
            end: "2025-12-31",
            recurrence_type: "monthly",
            interval: 5,
            expected: Some(&["2024-10-15", "2025-03-15", "2025-08-15"]),
            expected_len: None,
            expected_error: None,
        },
        RepeatCase {
            name: "yearly_basic",
            start: "2024-10-01",
            end: "2026-10-01",
            recurrence_type: "yearly",
            interval: 1,
            expected: Some(&["2024-10-01", "2025-10-01", "2026-10-01"]),
            expected_len: None,
            expected_error: None,
        },
        RepeatCase {
            name: "yearly_leap_day_to_common_year",
            start: "2024-02-29",
            end: "2025-03-01",
            recurrence_type: "yearly",
            interval: 1,
            expected: Some(&["2024-02-29", "2025-02-28"]),
            expected_len: None,
            expected_error: None,
        },
        RepeatCase {
            name: "yearly_leap_day_to_next_leap_year",
            start: "2024-02-29",
            end: "2032-12-31",
            recurrence_type: "yearly",
            interval: 4,
            expected: Some(&["2024-02-29", "2028-02-29", "2032-02-29"]),
            expected_len: None,
            expected_error: None,
        },
        RepeatCase {
            name: "daily_full_leap_year",
            start: "2024-01-01",
            end: "2024-12-31",
            recurrence_type: "daily",
            interval: 1,
            expected: None,
            expected_len: Some(366),
            expected_error: None,
        },
        RepeatCase {
            name: "weekly_full_year",
            start: "2025-01-01",
            end: "2025-12-31",
            recurrence_type: "weekly",
            interval: 1,
            expected: None,
            expected_len: Some(53),
            expected_error: None,
        },
        RepeatCase {
            name: "end_before_start",
            start: "2024-10-05",
            end: "2024-10-01",
            recurrence_type: "daily",
            interval: 1,
            expected: Some(&[]),
            expected_len: None,
            expected_error: None,
        },
        RepeatCase {
            name: "zero_interval",
            start: "2024-10-01",
            end: "2024-10-05",
            recurrence_type: "daily",
            interval: 0,
            expected: None,
            expected_len: None,
            expected_error: Some("반복 간격은 1 이상이어야 합니다."),
        },
        RepeatCase {
            name: "unknown_recurrence_type",
            start: "2024-10-01",
            end: "2024-10-05",
            recurrence_type: "hourly",
            interval: 1,
            expected: None,
            expected_len: None,
            expected_error: Some("Parse error: unknown recurrence type 'hourly'"),
        },
    ]
}

pub fn assert_case(case: &RepeatCase) {
    let result = RecurrenceRequest::parse(case.start, case.end, case.recurrence_type, case.interval)
        .and_then(|request| generate(&request));

    if let Some(expected_error) = case.expected_error {
        match result {
            Ok(dates) => panic!("Case {} expected an error, got {dates:?}", case.name),
            Err(err) => assert_eq!(
                err.to_string(),
                expected_error,
                "Case {} returned the wrong error",
                case.name
            ),
        }
        return;
    }

    let dates = result.unwrap_or_else(|err| panic!("Case {} failed: {}", case.name, err));
    let actual: Vec<String> = dates.iter().map(ToString::to_string).collect();

    if let Some(expected) = case.expected {
        assert_eq!(actual, expected, "Case {} did not match", case.name);
    }

    if let Some(expected_len) = case.expected_len {
        assert_eq!(
            actual.len(),
            expected_len,
            "Case {} expected {} occurrences",
            case.name,
            expected_len
        );
    }

    assert!(
        actual.windows(2).all(|pair| pair[0] < pair[1]),
        "Case {} is not strictly increasing",
        case.name
    );
}
