use thiserror::Error;

/// Longest line accepted, in bytes, not counting the line terminator.
pub const MAX_INPUT_LEN: usize = 255;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Input longer than {} characters.", MAX_INPUT_LEN)]
pub struct InputTooLong;

/// Rejects lines the front ends should not hand to the evaluator.
pub fn check_input_len(input: &str) -> Result<&str, InputTooLong> {
    if input.len() > MAX_INPUT_LEN {
        Err(InputTooLong)
    } else {
        Ok(input)
    }
}
