//! Internal copy helpers.
//!
//! Every read from Assimp-owned memory in the copy walk goes through these
//! functions so that null/count mismatches and oversized lengths surface as
//! [`Error::InvalidScene`] instead of undefined behavior.

use crate::error::{Error, Result};

/// Validate that `len` elements of `T` fit in a single allocation.
fn check_len<T>(len: usize, what: &str) -> Result<()> {
    let elem_size = std::mem::size_of::<T>();
    if elem_size != 0 && len > (isize::MAX as usize) / elem_size {
        return Err(Error::invalid_scene(format!(
            "{what}: length {len} exceeds addressable memory"
        )));
    }
    Ok(())
}

/// Copy a required array. A null pointer is only accepted when `len == 0`.
///
/// # Safety
/// When non-null, `ptr` must be valid for reads of `len` elements of `T`.
pub(crate) unsafe fn copy_required<T, U>(
    ptr: *const T,
    len: usize,
    what: &str,
    mut map: impl FnMut(&T) -> U,
) -> Result<Vec<U>> {
    if len == 0 {
        return Ok(Vec::new());
    }
    if ptr.is_null() {
        return Err(Error::invalid_scene(format!(
            "{what}: null array with {len} elements"
        )));
    }
    check_len::<T>(len, what)?;
    let src = unsafe { std::slice::from_raw_parts(ptr, len) };
    Ok(src.iter().map(&mut map).collect())
}

/// Copy an optional array. A null pointer yields `None`, never an empty default.
///
/// # Safety
/// When non-null, `ptr` must be valid for reads of `len` elements of `T`.
pub(crate) unsafe fn copy_optional<T, U>(
    ptr: *const T,
    len: usize,
    what: &str,
    map: impl FnMut(&T) -> U,
) -> Result<Option<Vec<U>>> {
    if ptr.is_null() {
        return Ok(None);
    }
    unsafe { copy_required(ptr, len, what, map) }.map(Some)
}

/// Walk a `T**` array in source order, copying each element with `copy`.
///
/// A null element is an error: Assimp never leaves holes in these arrays.
///
/// # Safety
/// When non-null, `ptr` must be valid for reads of `len` pointers, each of which
/// must be null or point to a valid `T`.
pub(crate) unsafe fn copy_pointer_array<T, U>(
    ptr: *const *mut T,
    len: usize,
    what: &str,
    mut copy: impl FnMut(&T) -> Result<U>,
) -> Result<Vec<U>> {
    if len == 0 {
        return Ok(Vec::new());
    }
    if ptr.is_null() {
        return Err(Error::invalid_scene(format!(
            "{what}: null pointer array with {len} elements"
        )));
    }
    check_len::<*mut T>(len, what)?;
    let elements = unsafe { std::slice::from_raw_parts(ptr, len) };
    let mut out = Vec::with_capacity(len);
    for (index, &element) in elements.iter().enumerate() {
        // SAFETY: caller guarantees each non-null element points to a valid T.
        let Some(element) = (unsafe { element.as_ref() }) else {
            return Err(Error::invalid_scene(format!("{what}[{index}] is null")));
        };
        out.push(copy(element)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_null_with_zero_count_is_empty() {
        let out = unsafe { copy_required::<u32, u32>(std::ptr::null(), 0, "x", |v| *v) }.unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_required_null_with_count_is_error() {
        let err = unsafe { copy_required::<u32, u32>(std::ptr::null(), 3, "faces", |v| *v) }
            .unwrap_err();
        assert!(matches!(err, Error::InvalidScene { .. }));
        assert!(err.to_string().contains("faces"));
    }

    #[test]
    fn test_optional_null_is_none() {
        let out = unsafe { copy_optional::<u32, u32>(std::ptr::null(), 4, "uv", |v| *v) }.unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn test_optional_present_copies_in_order() {
        let data = [3u32, 1, 2];
        let out = unsafe { copy_optional(data.as_ptr(), data.len(), "x", |v| v * 10) }.unwrap();
        assert_eq!(out, Some(vec![30, 10, 20]));
    }

    #[test]
    fn test_pointer_array_rejects_null_element() {
        let mut a = 1u32;
        let ptrs = [&mut a as *mut u32, std::ptr::null_mut()];
        let err = unsafe { copy_pointer_array(ptrs.as_ptr(), 2, "meshes", |v| Ok(*v)) }
            .unwrap_err();
        assert!(err.to_string().contains("meshes[1]"));
    }

    #[test]
    fn test_oversized_length_is_rejected() {
        let data = [0u64; 1];
        let err = unsafe { copy_required(data.as_ptr(), usize::MAX / 2, "big", |v| *v) }
            .unwrap_err();
        assert!(matches!(err, Error::InvalidScene { .. }));
    }
}
