//! C ABI for `polytri` over flat `f64` buffers.
//!
//! Notes
//! - Keep the exports thin: decode, call `polytri::triangulate`, encode.
//! - Status is returned as an `i32`: `>= 0` triangle count, `< 0` error code
//!   (see `FfiError::code`). The message of the last failure is kept in a
//!   per-thread slot and can be copied out with `polytri_last_error`.
//! - Unlike a bare `double*` contract, both buffers come with explicit lengths
//!   and are bounds-checked.

pub mod flat;

use std::os::raw::c_char;
use std::cell::RefCell;

use polytri::api::{triangulate, TriangulateCfg};

pub use flat::{decode_polygons, encode_triangles, output_len_hint, FfiError};

thread_local! {
    // errno-style: one slot per calling thread
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn set_last_error(msg: String) {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(msg));
}

fn take_last_error() -> Option<String> {
    LAST_ERROR.with(|slot| slot.borrow_mut().take())
}

/// Safe core of `polytri_triangulate`.
pub fn triangulate_flat(
    num_polygons: usize,
    data: &[f64],
    out: &mut [f64],
    cfg: &TriangulateCfg,
) -> Result<usize, FfiError> {
    let polygons = decode_polygons(num_polygons, data)?;
    let triangles = triangulate(&polygons, cfg)?;
    encode_triangles(&triangles, out)
}

fn status(res: Result<usize, FfiError>) -> i32 {
    match res {
        Ok(n) => i32::try_from(n).unwrap_or(i32::MAX),
        Err(err) => {
            tracing::debug!(code = err.code(), %err, "triangulate failed");
            let code = err.code();
            set_last_error(err.to_string());
            code
        }
    }
}

/// Triangulate `num_polygons` NaN-terminated polygons from `data[..data_len]`
/// into `result[..result_len]`.
///
/// # Safety
/// `data` must be valid for `data_len` reads and `result` valid for
/// `result_len` writes (either may be null when its length is zero).
#[no_mangle]
pub unsafe extern "C" fn polytri_triangulate(
    num_polygons: i32,
    data: *const f64,
    data_len: usize,
    result: *mut f64,
    result_len: usize,
) -> i32 {
    let Ok(count) = usize::try_from(num_polygons) else {
        return status(Err(FfiError::MalformedBuffer {
            reason: format!("negative polygon count {num_polygons}"),
        }));
    };
    if (data.is_null() && data_len > 0) || (result.is_null() && result_len > 0) {
        return status(Err(FfiError::MalformedBuffer {
            reason: "null buffer with non-zero length".to_string(),
        }));
    }
    // Safety: pointers checked above; validity for the given lengths is the caller's contract.
    let input: &[f64] = if data_len == 0 {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(data, data_len) }
    };
    let output: &mut [f64] = if result_len == 0 {
        &mut []
    } else {
        unsafe { std::slice::from_raw_parts_mut(result, result_len) }
    };
    status(triangulate_flat(count, input, output, &TriangulateCfg::default()))
}

/// Copy the last error message (NUL-terminated, truncated to fit) into `out`.
/// Returns the number of message bytes written; 0 if there is none.
///
/// # Safety
/// `out` must be valid for `out_len` writes.
#[no_mangle]
pub unsafe extern "C" fn polytri_last_error(out: *mut c_char, out_len: usize) -> usize {
    if out.is_null() || out_len == 0 {
        return 0;
    }
    let Some(msg) = take_last_error() else {
        unsafe { *out = 0 };
        return 0;
    };
    // Safety: caller provides a valid buffer.
    let buf = unsafe { std::slice::from_raw_parts_mut(out as *mut u8, out_len) };
    let n = msg.len().min(out_len - 1);
    buf[..n].copy_from_slice(&msg.as_bytes()[..n]);
    buf[n] = 0;
    n
}

/// Output length (in doubles) sufficient for any valid input of this size.
#[no_mangle]
pub extern "C" fn polytri_output_len_hint(num_vertices: usize, num_polygons: usize) -> usize {
    output_len_hint(num_vertices, num_polygons)
}
