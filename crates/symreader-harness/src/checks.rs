//! The conformance matrix.
//!
//! Each check drives the interop layer against the scripted mock and
//! compares an expected transcript with the actual one. Checks are pure
//! and deterministic.

use std::cell::Cell;

use serde::{Deserialize, Serialize};
use symreader_core::hresult::{E_FAIL, E_NOTIMPL, HResult, S_FALSE, S_OK, check_hr};
use symreader_core::qname::TERMINATOR;
use symreader_core::{
    buffer_to_string, fetch, null_to_empty, pack_qualified_name, qualified_name_length,
};

use crate::mock::{Fault, MockReader};

const E_UNEXPECTED: HResult = 0x8000_ffff_u32 as i32;

/// Outcome of one conformance check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

type CheckFn = fn() -> (String, String);

const MATRIX: &[(&str, CheckFn)] = &[
    ("hresult_classification", check_hresult_classification),
    ("fetch_zero_count_skips_fill", check_zero_count_skips_fill),
    ("fetch_exact_fill", check_exact_fill),
    ("fetch_incomplete_read_rejected", check_incomplete_read),
    ("fetch_no_info_is_empty", check_no_info_is_empty),
    ("fetch_hard_failure_preserves_code", check_hard_failure),
    ("fetch_self_describing_discovery", check_self_describing),
    ("qualified_name_lengths", check_qualified_name_lengths),
    ("qualified_name_packing", check_qualified_name_packing),
    ("null_to_empty_normalization", check_null_to_empty),
];

/// Names of every check in the matrix, in execution order.
pub fn names() -> Vec<&'static str> {
    MATRIX.iter().map(|&(name, _)| name).collect()
}

/// Run the full matrix.
pub fn run_all() -> Vec<CheckResult> {
    MATRIX
        .iter()
        .map(|&(name, check)| {
            let (expected, actual) = check();
            CheckResult {
                name: name.to_string(),
                passed: expected == actual,
                expected,
                actual,
            }
        })
        .collect()
}

fn check_hresult_classification() -> (String, String) {
    let expected =
        "Success Success NoInfo NoInfo native call failed with HRESULT 0x8000ffff".to_string();
    let actual = [S_OK, S_FALSE, E_FAIL, E_NOTIMPL, E_UNEXPECTED]
        .iter()
        .map(|&hr| match check_hr(hr) {
            Ok(class) => format!("{class:?}"),
            Err(err) => err.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");
    (expected, actual)
}

fn check_zero_count_skips_fill() -> (String, String) {
    let reader = MockReader::new(Vec::new());
    let fill_called = Cell::new(false);
    let outcome = fetch::get_items_counted(
        &reader,
        |r: &MockReader| r.count(),
        |r: &MockReader, len, buf: &mut [u32]| {
            fill_called.set(true);
            r.fill(len, buf)
        },
    );
    let expected = "Ok(None), fill skipped".to_string();
    let actual = match (&outcome, fill_called.get()) {
        (Ok(None), false) => expected.clone(),
        (outcome, called) => format!("{outcome:?}, fill called={called}"),
    };
    (expected, actual)
}

fn check_exact_fill() -> (String, String) {
    let reader = MockReader::new(vec![1, 2, 3]);
    let outcome = fetch::get_items_counted(
        &reader,
        |r: &MockReader| r.count(),
        |r: &MockReader, len, buf: &mut [u32]| r.fill(len, buf),
    );
    let expected = "[1, 2, 3]".to_string();
    let actual = match outcome {
        Ok(Some(items)) => format!("{items:?}"),
        other => format!("{other:?}"),
    };
    (expected, actual)
}

fn check_incomplete_read() -> (String, String) {
    let reader = MockReader::with_fault(vec![1, 2, 3], Fault::MisreportCount(2));
    let outcome = fetch::get_items_counted(
        &reader,
        |r: &MockReader| r.count(),
        |r: &MockReader, len, buf: &mut [u32]| r.fill(len, buf),
    );
    let expected = "read only 2 of 3 items".to_string();
    let actual = match outcome {
        Err(err) => err.to_string(),
        Ok(items) => format!("{items:?}"),
    };
    (expected, actual)
}

fn check_no_info_is_empty() -> (String, String) {
    let reader = MockReader::with_fault(vec![1, 2], Fault::NoInfo);
    let outcome: Result<Option<Vec<u32>>, _> = fetch::get_items_counted(
        &reader,
        |r: &MockReader| r.count(),
        |r: &MockReader, len, buf: &mut [u32]| r.fill(len, buf),
    );
    ("Ok(None)".to_string(), format!("{outcome:?}"))
}

fn check_hard_failure() -> (String, String) {
    let reader = MockReader::with_fault(vec![1], Fault::Hard(E_UNEXPECTED));
    let outcome = fetch::get_items_counted(
        &reader,
        |r: &MockReader| r.count(),
        |r: &MockReader, len, buf: &mut [u32]| r.fill(len, buf),
    );
    let expected = "native call failed with HRESULT 0x8000ffff".to_string();
    let actual = match outcome {
        Err(err) => err.to_string(),
        Ok(items) => format!("{items:?}"),
    };
    (expected, actual)
}

fn check_self_describing() -> (String, String) {
    let reader = MockReader::new(vec![7, 8]);
    let discovery_had_buffer = Cell::new(false);
    let outcome = fetch::get_items(&reader, |r: &MockReader, len, buf: Option<&mut [u32]>| {
        if len == 0 && buf.is_some() {
            discovery_had_buffer.set(true);
        }
        r.fill_self_describing(len, buf)
    });
    let expected = "[7, 8], discovery without buffer".to_string();
    let actual = match (outcome, discovery_had_buffer.get()) {
        (Ok(Some(items)), false) => format!("{items:?}, discovery without buffer"),
        (outcome, had) => format!("{outcome:?}, discovery with buffer={had}"),
    };
    (expected, actual)
}

fn check_qualified_name_lengths() -> (String, String) {
    let expected = "3 6".to_string();
    let actual = format!(
        "{} {}",
        qualified_name_length("", "Foo"),
        qualified_name_length("NS", "Foo")
    );
    (expected, actual)
}

fn check_qualified_name_packing() -> (String, String) {
    let mut length = 0usize;
    let mut buffer = [0xffffu16; 7];
    let packed = pack_qualified_name("NS", "Foo", Some(&mut length), Some(&mut buffer));
    let expected = "6 NS.Foo terminated".to_string();
    let actual = match packed {
        Ok(()) => {
            let mark = if buffer[length] == TERMINATOR {
                "terminated"
            } else {
                "unterminated"
            };
            format!("{length} {} {mark}", buffer_to_string(&buffer))
        }
        Err(err) => err.to_string(),
    };
    (expected, actual)
}

fn check_null_to_empty() -> (String, String) {
    let empty: Vec<u32> = null_to_empty(None);
    let passthrough = null_to_empty(Some(vec![5u32]));
    let expected = "len=0 cap=0 [5]".to_string();
    let actual = format!(
        "len={} cap={} {passthrough:?}",
        empty.len(),
        empty.capacity()
    );
    (expected, actual)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_names_are_unique() {
        let mut names = names();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn test_every_check_passes() {
        for result in run_all() {
            assert!(
                result.passed,
                "{}: expected `{}`, got `{}`",
                result.name, result.expected, result.actual
            );
        }
    }
}
