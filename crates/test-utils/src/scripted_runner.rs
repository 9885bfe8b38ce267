use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use statusrun::exec::{ChildOutcome, CommandSpec, ProcessRunner};

/// A fake process runner that:
/// - records which commands were "run"
/// - immediately returns a fixed outcome without spawning anything.
#[derive(Debug, Clone)]
pub struct ScriptedRunner {
    outcome: ChildOutcome,
    executed: Arc<Mutex<Vec<CommandSpec>>>,
}

impl ScriptedRunner {
    pub fn new(outcome: ChildOutcome) -> Self {
        Self {
            outcome,
            executed: Arc::default(),
        }
    }

    pub fn exiting(code: i32) -> Self {
        Self::new(ChildOutcome::Exited(code))
    }

    pub fn executed(&self) -> Vec<CommandSpec> {
        self.executed.lock().unwrap().clone()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run<'a>(
        &'a mut self,
        command: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = ChildOutcome> + Send + 'a>> {
        Box::pin(async move {
            self.executed.lock().unwrap().push(command.clone());
            self.outcome.clone()
        })
    }
}
