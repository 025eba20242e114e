//! Command Interpreter
//!
//! Owns a VFS session and dispatches single lines of input. Parsing rules,
//! in priority order: blank input, echo redirection, script execution
//! (`*.sh` / `./*`), then builtin dispatch by lowercase name.

use crate::vfs::Vfs;

use super::builtins::{register_builtins, BuiltinRegistry};
use super::parse;
use super::script;
use super::types::CommandResult;

/// The fixed prompt callers show while in chat mode. The interpreter never
/// selects it; mode is the caller's state.
pub const CHAT_PROMPT: &str = "> ";

pub struct Interpreter {
    vfs: Vfs,
    registry: BuiltinRegistry,
}

impl Interpreter {
    /// Create an interpreter over the given VFS session.
    pub fn new(vfs: Vfs) -> Self {
        let mut registry = BuiltinRegistry::new();
        register_builtins(&mut registry);
        Self { vfs, registry }
    }

    /// Execute one line of raw input.
    pub fn execute(&mut self, input: &str) -> CommandResult {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return CommandResult::output("", "");
        }

        // echo redirection takes priority over ordinary dispatch.
        if let Some((text, file)) = parse::parse_echo_redirect(trimmed) {
            let content = parse::strip_quotes(text).to_string();
            return match self.vfs.write_file(file, &content) {
                Ok(()) => CommandResult::output("echo", ""),
                Err(err) => CommandResult::error("echo", format!("echo: {}", err)),
            };
        }

        let tokens = parse::split_tokens(trimmed);
        let command = tokens[0];
        let args = &tokens[1..];

        if command.ends_with(".sh") || command.starts_with("./") {
            return script::run_script(&self.vfs, command);
        }

        let lower = command.to_lowercase();
        match self.registry.get(&lower) {
            Some(builtin) => builtin.execute(&mut self.vfs, args),
            None => {
                let message =
                    format!("{}: command not found. Type 'help' for available commands.", lower);
                CommandResult::error(lower, message)
            }
        }
    }

    /// The shell prompt: display path plus a trailing space.
    pub fn prompt(&self) -> String {
        format!("{} ", self.vfs.display_path())
    }

    pub fn vfs(&self) -> &Vfs {
        &self.vfs
    }

    pub fn vfs_mut(&mut self) -> &mut Vfs {
        &mut self.vfs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::types::Outcome;
    use crate::vfs::default_fs::WELCOME_TXT;

    fn interp() -> Interpreter {
        Interpreter::new(Vfs::in_memory())
    }

    #[test]
    fn test_blank_input_is_noop() {
        let mut sh = interp();
        let result = sh.execute("   ");
        assert_eq!(result, CommandResult::output("", ""));
    }

    #[test]
    fn test_cat_welcome_scenario() {
        let mut sh = interp();
        let result = sh.execute("cat welcome.txt");
        assert!(!result.is_error());
        assert_eq!(result.output_text(), WELCOME_TXT);
    }

    #[test]
    fn test_echo_redirect_then_cat() {
        let mut sh = interp();
        let write = sh.execute(r#"echo "hi there" > notes.txt"#);
        assert!(!write.is_error());
        assert_eq!(write.command, "echo");
        assert_eq!(write.output_text(), "");

        let read = sh.execute("cat notes.txt");
        assert_eq!(read.output_text(), "hi there");
    }

    #[test]
    fn test_echo_redirect_overwrites() {
        let mut sh = interp();
        sh.execute("echo first > f.txt");
        sh.execute("echo second > f.txt");
        assert_eq!(sh.execute("cat f.txt").output_text(), "second");
    }

    #[test]
    fn test_echo_redirect_failure_is_prefixed() {
        let mut sh = interp();
        let result = sh.execute("echo text > /missing/f.txt");
        assert!(result.is_error());
        assert_eq!(result.output_text(), "echo: Parent directory does not exist");
    }

    #[test]
    fn test_plain_echo() {
        let mut sh = interp();
        assert_eq!(sh.execute("echo hello   world").output_text(), "hello world");
        assert_eq!(sh.execute(r#"echo "quoted text""#).output_text(), "quoted text");
    }

    #[test]
    fn test_ls_nonexistent_scenario() {
        let mut sh = interp();
        let result = sh.execute("ls /nonexistent");
        assert!(result.is_error());
        assert_eq!(
            result.output_text(),
            "ls: cannot access '/nonexistent': No such file or directory"
        );
    }

    #[test]
    fn test_ask_scenario() {
        let mut sh = interp();
        let result = sh.execute("ask");
        assert_eq!(result.outcome, Outcome::EnterChatMode);
        assert_eq!(result.output_text(), "");
    }

    #[test]
    fn test_clear_scenario() {
        let mut sh = interp();
        assert_eq!(sh.execute("clear").outcome, Outcome::ClearScreen);
    }

    #[test]
    fn test_case_insensitive_dispatch() {
        let mut sh = interp();
        assert_eq!(sh.execute("PWD").output_text(), "/home/user");
        assert_eq!(sh.execute("Ls").command, "ls");
    }

    #[test]
    fn test_unknown_command() {
        let mut sh = interp();
        let result = sh.execute("Frobnicate now");
        assert!(result.is_error());
        assert_eq!(
            result.output_text(),
            "frobnicate: command not found. Type 'help' for available commands."
        );
        assert_eq!(result.command, "frobnicate");
    }

    #[test]
    fn test_services_script_replay() {
        let mut sh = interp();
        let result = sh.execute("./services.sh");
        assert!(!result.is_error());
        let lines: Vec<&str> = result.output_text().split('\n').collect();
        // Every line comes from an echo payload; shebang and comments are
        // silent. The script opens with an empty echo.
        assert_eq!(lines[0], "");
        assert!(lines.iter().any(|l| l.contains("RAIKHEN SERVICES")));
        assert_eq!(*lines.last().unwrap(), "Run 'cat services/<service>.txt' for more details.");
    }

    #[test]
    fn test_script_without_dot_slash() {
        let mut sh = interp();
        let result = sh.execute("contact.sh");
        assert_eq!(
            result.output_text(),
            "Ready to start your project?\nReach out to us at hello@raikhen.com"
        );
    }

    #[test]
    fn test_reset_after_mutations() {
        let mut sh = interp();
        sh.execute("rm welcome.txt");
        sh.execute("mkdir scratch");
        let result = sh.execute("reset");
        assert_eq!(result.output_text(), "File system reset to default.");

        let fresh = interp();
        assert_eq!(
            sh.vfs().list_dir("/home/user"),
            fresh.vfs().list_dir("/home/user")
        );
    }

    #[test]
    fn test_prompt_tracks_cwd() {
        let mut sh = interp();
        assert_eq!(sh.prompt(), "~ ");
        sh.execute("cd services");
        assert_eq!(sh.prompt(), "~/services ");
        sh.execute("cd /");
        assert_eq!(sh.prompt(), "/ ");
    }

    #[test]
    fn test_errors_leave_shell_usable() {
        let mut sh = interp();
        sh.execute("cat");
        sh.execute("bogus");
        sh.execute("cd nowhere");
        assert_eq!(sh.execute("pwd").output_text(), "/home/user");
    }
}
