// src/interpreter/builtins/registry.rs
use std::collections::HashMap;

use super::Builtin;

pub struct BuiltinRegistry {
    commands: HashMap<String, Box<dyn Builtin>>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self { commands: HashMap::new() }
    }

    pub fn register(&mut self, cmd: Box<dyn Builtin>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Builtin> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::ask::AskBuiltin;
use super::cat::CatBuiltin;
use super::cd::CdBuiltin;
use super::clear::ClearBuiltin;
use super::echo::EchoBuiltin;
use super::help::HelpBuiltin;
use super::ls::LsBuiltin;
use super::mkdir::MkdirBuiltin;
use super::pwd::PwdBuiltin;
use super::reset::ResetBuiltin;
use super::rm::RmBuiltin;
use super::touch::TouchBuiltin;

/// Register the full builtin set.
pub fn register_builtins(registry: &mut BuiltinRegistry) {
    registry.register(Box::new(LsBuiltin));
    registry.register(Box::new(CdBuiltin));
    registry.register(Box::new(PwdBuiltin));
    registry.register(Box::new(CatBuiltin));
    registry.register(Box::new(MkdirBuiltin));
    registry.register(Box::new(TouchBuiltin));
    registry.register(Box::new(RmBuiltin));
    registry.register(Box::new(EchoBuiltin));
    registry.register(Box::new(ClearBuiltin));
    registry.register(Box::new(HelpBuiltin));
    registry.register(Box::new(AskBuiltin));
    registry.register(Box::new(ResetBuiltin));
}
