//! Block execution and label resolution.

use tracing::trace;

use crate::node::{Block, Flow};
use crate::{Environment, EvalError, Value};

impl Block {
    /// Run the children in order, honouring jumps to this block's labels.
    ///
    /// A jump to a label declared here resumes at the label's position; any
    /// other jump ends the block and is handed to the caller unchanged.
    /// Falling off the end yields the last executed child's value.
    pub fn run(&self, env: &mut Environment) -> Result<Flow, EvalError> {
        let mut last = Value::None;
        let mut position = 0;
        while let Some(child) = self.children.get(position) {
            match child.run(env)? {
                Flow::Value(value) => {
                    last = value;
                    position += 1;
                }
                Flow::Jump(label) => match self.label_position(&label) {
                    Some(target) => {
                        trace!(%label, target, "jump resolved in block");
                        position = target;
                    }
                    None => return Ok(Flow::Jump(label)),
                },
            }
        }
        Ok(Flow::Value(last))
    }
}
