//! Stack Buffer Demonstration
//!
//! A fixed-size array on this function's stack, written and read back
//! through a writable view. The buffer never leaves the function; only the
//! copied-out values do.

use log::debug;
use serde::Serialize;

use crate::error::ViewError;
use crate::span::ViewMut;

/// Capacity of the scratch buffer
pub const STACK_BUFFER_LEN: usize = 16;

/// What was written and what came back
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackBufferOutcome {
    pub written: usize,
    pub read_back: Vec<u8>,
}

/// Write `bytes` into a stack buffer through a view, then read them back.
///
/// Fails with `OutOfRange` when `bytes` does not fit in `STACK_BUFFER_LEN`.
pub fn run(bytes: &[u8]) -> Result<StackBufferOutcome, ViewError> {
    let mut buffer = [0u8; STACK_BUFFER_LEN];
    let mut view = ViewMut::from_storage(&mut buffer, 0, bytes.len())?;

    for (index, &byte) in bytes.iter().enumerate() {
        view.set(index, byte)?;
    }

    let read = view.as_view();
    let mut read_back = Vec::with_capacity(read.len());
    for index in 0..read.len() {
        let byte = *read.get(index)?;
        debug!("stack buffer [{}] = {}", index, byte);
        read_back.push(byte);
    }

    Ok(StackBufferOutcome {
        written: bytes.len(),
        read_back,
    })
}
