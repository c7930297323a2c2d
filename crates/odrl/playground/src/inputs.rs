//! The three input buffers

use crate::samples;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputBuffer {
    Policy,
    Request,
    StateOfTheWorld,
}

impl InputBuffer {
    pub const ALL: [InputBuffer; 3] = [Self::Policy, Self::Request, Self::StateOfTheWorld];

    /// Sample text this buffer resets to
    pub fn sample(&self) -> &'static str {
        match self {
            Self::Policy => samples::POLICY,
            Self::Request => samples::REQUEST,
            Self::StateOfTheWorld => samples::STATE_OF_THE_WORLD,
        }
    }
}

impl fmt::Display for InputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Policy => "policy",
            Self::Request => "request",
            Self::StateOfTheWorld => "state of the world",
        };
        f.write_str(s)
    }
}

/// RDF text for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationInputs {
    pub policy: String,
    pub request: String,
    pub state_of_the_world: String,
}

impl EvaluationInputs {
    pub fn new(
        policy: impl Into<String>,
        request: impl Into<String>,
        state_of_the_world: impl Into<String>,
    ) -> Self {
        Self {
            policy: policy.into(),
            request: request.into(),
            state_of_the_world: state_of_the_world.into(),
        }
    }

    /// The default sample texts
    pub fn samples() -> Self {
        Self::new(samples::POLICY, samples::REQUEST, samples::STATE_OF_THE_WORLD)
    }

    pub fn get(&self, buffer: InputBuffer) -> &str {
        match buffer {
            InputBuffer::Policy => &self.policy,
            InputBuffer::Request => &self.request,
            InputBuffer::StateOfTheWorld => &self.state_of_the_world,
        }
    }

    pub fn set(&mut self, buffer: InputBuffer, text: impl Into<String>) {
        let slot = match buffer {
            InputBuffer::Policy => &mut self.policy,
            InputBuffer::Request => &mut self.request,
            InputBuffer::StateOfTheWorld => &mut self.state_of_the_world,
        };
        *slot = text.into();
    }

    /// Put one buffer back to its sample text
    pub fn reset(&mut self, buffer: InputBuffer) {
        self.set(buffer, buffer.sample());
    }

    pub fn reset_all(&mut self) {
        *self = Self::samples();
    }
}

impl Default for EvaluationInputs {
    fn default() -> Self {
        Self::samples()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_restores_one_buffer() {
        let mut inputs = EvaluationInputs::new("garbage", "garbage", "garbage");
        inputs.reset(InputBuffer::Request);
        assert_eq!(inputs.get(InputBuffer::Request), samples::REQUEST);
        assert_eq!(inputs.get(InputBuffer::Policy), "garbage");

        inputs.reset_all();
        assert_eq!(inputs, EvaluationInputs::samples());
    }

    #[test]
    fn samples_mention_the_request_parties() {
        let inputs = EvaluationInputs::default();
        for buffer in InputBuffer::ALL {
            assert!(!inputs.get(buffer).trim().is_empty());
        }
        assert!(inputs.policy.contains("odrl:assignee ex:alice"));
        assert!(inputs.request.contains("odrl:target ex:x"));
    }

    #[test]
    fn buffer_names() {
        assert_eq!(InputBuffer::StateOfTheWorld.to_string(), "state of the world");
        assert_eq!(
            serde_json::to_string(&InputBuffer::StateOfTheWorld).unwrap(),
            "\"state_of_the_world\""
        );
    }
}
