//! Status-code domain of the native symbol-reader boundary.
//!
//! Every native operation reports its outcome as a signed 32-bit HRESULT.
//! Zero and positive codes are successes. Two negative codes are benign:
//! `E_FAIL` means "failed, no information" and `E_NOTIMPL` means the
//! backend does not implement the queried operation. Any other negative
//! code is a hard failure and must keep its numeric value for diagnostics.

use crate::error::InteropError;

/// Signed 32-bit native status code.
pub type HResult = i32;

/// Operation completed.
pub const S_OK: HResult = 0;
/// Operation completed with a negative answer (still a success code).
pub const S_FALSE: HResult = 1;
/// Unspecified failure; the reader uses it to mean "no information".
pub const E_FAIL: HResult = 0x8000_4005_u32 as i32;
/// The queried operation is not implemented by this backend.
pub const E_NOTIMPL: HResult = 0x8000_4001_u32 as i32;

/// Non-failure classification of a native status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrClass {
    /// Non-negative code.
    Success,
    /// Benign negative: the reader has no data or no support for the query.
    NoInfo,
}

/// Classify a native status code.
///
/// Succeeds for every non-negative code and for the two benign negatives
/// ([`E_FAIL`], [`E_NOTIMPL`]). Any other negative code is surfaced as
/// [`InteropError::NativeFailure`] carrying the original value.
pub fn check_hr(hr: HResult) -> Result<HrClass, InteropError> {
    if hr >= 0 {
        Ok(HrClass::Success)
    } else if hr == E_FAIL || hr == E_NOTIMPL {
        Ok(HrClass::NoInfo)
    } else {
        Err(InteropError::NativeFailure(hr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E_UNEXPECTED: HResult = 0x8000_ffff_u32 as i32;
    const E_INVALIDARG: HResult = 0x8007_0057_u32 as i32;

    #[test]
    fn test_non_negative_is_success() {
        assert_eq!(check_hr(S_OK), Ok(HrClass::Success));
        assert_eq!(check_hr(S_FALSE), Ok(HrClass::Success));
        assert_eq!(check_hr(i32::MAX), Ok(HrClass::Success));
    }

    #[test]
    fn test_benign_negatives_are_no_info() {
        assert_eq!(check_hr(E_FAIL), Ok(HrClass::NoInfo));
        assert_eq!(check_hr(E_NOTIMPL), Ok(HrClass::NoInfo));
    }

    #[test]
    fn test_other_negatives_preserve_code() {
        assert_eq!(
            check_hr(E_UNEXPECTED),
            Err(InteropError::NativeFailure(E_UNEXPECTED))
        );
        assert_eq!(
            check_hr(E_INVALIDARG),
            Err(InteropError::NativeFailure(E_INVALIDARG))
        );
        assert_eq!(check_hr(-1), Err(InteropError::NativeFailure(-1)));
        assert_eq!(
            check_hr(i32::MIN),
            Err(InteropError::NativeFailure(i32::MIN))
        );
    }

    #[test]
    fn test_failure_message_prints_hex_code() {
        let err = check_hr(E_UNEXPECTED).unwrap_err();
        assert_eq!(
            err.to_string(),
            "native call failed with HRESULT 0x8000ffff"
        );
    }
}
