//! Step-by-step record of a block passing through the cipher.

use core::fmt;

use crate::block::Block;
use crate::cipher::{decrypt_state, encrypt_state};
use crate::key::RoundKeys;
use crate::state::State;

/// One transform of the round function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// State before any transform.
    Input,
    /// XOR with a round key.
    AddRoundKey,
    /// Forward byte substitution.
    SubBytes,
    /// Forward row rotation.
    ShiftRows,
    /// Forward column mixing.
    MixColumns,
    /// Inverse row rotation.
    InvShiftRows,
    /// Inverse byte substitution.
    InvSubBytes,
    /// Inverse column mixing.
    InvMixColumns,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Input => "Input",
            Step::AddRoundKey => "AddRoundKey",
            Step::SubBytes => "SubBytes",
            Step::ShiftRows => "ShiftRows",
            Step::MixColumns => "MixColumns",
            Step::InvShiftRows => "InvShiftRows",
            Step::InvSubBytes => "InvSubBytes",
            Step::InvMixColumns => "InvMixColumns",
        };
        f.write_str(name)
    }
}

/// State snapshot taken right after `step` ran in `round`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceStep {
    /// Round key index in effect for this step.
    pub round: usize,
    /// Transform that produced `state`.
    pub step: Step,
    /// State after the transform.
    pub state: State,
}

/// Full record of one block operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    /// Snapshots in execution order.
    pub steps: Vec<TraceStep>,
    /// Resulting block, identical to the untraced operation.
    pub output: Block,
}

/// Encrypts `block` and records every intermediate state.
pub fn trace_encrypt(block: &Block, round_keys: &RoundKeys) -> Trace {
    let mut steps = Vec::new();
    let mut state = State::from_block(block);
    encrypt_state(&mut state, round_keys, |round, step, s| {
        steps.push(TraceStep {
            round,
            step,
            state: *s,
        })
    });
    Trace {
        steps,
        output: state.to_block(),
    }
}

/// Decrypts `block` and records every intermediate state.
pub fn trace_decrypt(block: &Block, round_keys: &RoundKeys) -> Trace {
    let mut steps = Vec::new();
    let mut state = State::from_block(block);
    decrypt_state(&mut state, round_keys, |round, step, s| {
        steps.push(TraceStep {
            round,
            step,
            state: *s,
        })
    });
    Trace {
        steps,
        output: state.to_block(),
    }
}
