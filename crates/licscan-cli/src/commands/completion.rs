// Dweve licscan - License Evidence Scanner
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shell completion generation

use crate::error::CliError;
use clap::Command;
use clap_complete::{generate, Generator, Shell};
use std::io;

/// Write the completion script for `cmd` to stdout.
///
/// ```no_run
/// use clap::Command;
/// use clap_complete::Shell;
/// use licscan_cli::commands::generate_completion_for_command;
///
/// # fn main() -> Result<(), licscan_cli::error::CliError> {
/// let mut cmd = Command::new("licscan");
/// generate_completion_for_command(Shell::Bash, &mut cmd)?;
/// # Ok(())
/// # }
/// ```
pub fn generate_completion_for_command<G: Generator>(
    generator: G,
    cmd: &mut Command,
) -> Result<(), CliError> {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut io::stdout());
    Ok(())
}

/// Installation instructions for `shell`'s completion script.
///
/// ```
/// use clap_complete::Shell;
/// use licscan_cli::commands::print_installation_instructions;
///
/// assert!(print_installation_instructions(Shell::Zsh).contains("~/.zshrc"));
/// ```
pub fn print_installation_instructions(shell: Shell) -> String {
    let (session, persistent) = match shell {
        Shell::Bash => (
            r#"eval "$(licscan completion bash)""#,
            "licscan completion bash > ~/.local/share/bash-completion/completions/licscan",
        ),
        Shell::Zsh => (
            r#"eval "$(licscan completion zsh)""#,
            r#"echo 'eval "$(licscan completion zsh)"' >> ~/.zshrc"#,
        ),
        Shell::Fish => (
            "licscan completion fish | source",
            "licscan completion fish > ~/.config/fish/completions/licscan.fish",
        ),
        Shell::PowerShell => (
            "licscan completion powershell | Out-String | Invoke-Expression",
            "Add-Content $PROFILE 'licscan completion powershell | Out-String | Invoke-Expression'",
        ),
        Shell::Elvish => (
            "eval (licscan completion elvish | slurp)",
            "licscan completion elvish >> ~/.config/elvish/rc.elv",
        ),
        _ => return format!("# No installation instructions for {}\n", shell),
    };
    format!(
        "# {shell} completion installation:\n\n# Current session:\n{session}\n\n# Persistent:\n{persistent}\n"
    )
}
