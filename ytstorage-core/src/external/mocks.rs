// ytstorage-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for unit tests and when the "test-mocks" feature is enabled.

use super::{CommandOutput, CommandRunner};
use crate::error::{CoreResult, command_start_error};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

/// Canned reply for one call to the mock runner.
enum MockReply {
    Output(CommandOutput),
    StartFailure(io::ErrorKind),
}

/// Mock implementation of CommandRunner answering calls in FIFO order.
#[derive(Clone, Default)]
pub struct MockCommandRunner {
    replies: Rc<RefCell<VecDeque<MockReply>>>,
    received_calls: Rc<RefCell<Vec<(String, Vec<String>)>>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Default::default()
    }

    /// Queues a zero exit with the given stdout.
    pub fn add_success(&self, stdout: &str) {
        self.add_output(CommandOutput {
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        });
    }

    /// Queues a non-zero exit with the given stderr.
    pub fn add_exit_failure(&self, code: i32, stderr: &str) {
        self.add_output(CommandOutput {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        });
    }

    pub fn add_output(&self, output: CommandOutput) {
        self.replies.borrow_mut().push_back(MockReply::Output(output));
    }

    /// Queues a launch failure such as a missing binary.
    pub fn add_start_failure(&self, kind: io::ErrorKind) {
        self.replies.borrow_mut().push_back(MockReply::StartFailure(kind));
    }

    pub fn get_received_calls(&self) -> Vec<(String, Vec<String>)> {
        self.received_calls.borrow().clone()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> CoreResult<CommandOutput> {
        self.received_calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));

        match self.replies.borrow_mut().pop_front() {
            Some(MockReply::Output(output)) => Ok(output),
            Some(MockReply::StartFailure(kind)) => {
                log::warn!("MockCommandRunner simulating start failure for '{}'", program);
                Err(command_start_error(program, io::Error::from(kind)))
            }
            None => panic!(
                "MockCommandRunner: no reply queued for {} {:?}",
                program, args
            ),
        }
    }
}
