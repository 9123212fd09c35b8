// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation.
//!
//! Writes a completion script for the requested shell to stdout, e.g.
//!
//! ```bash
//! barge completions zsh > ~/.zfunc/_barge
//! ```

use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

/// Arguments for the completions command.
#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Emit the completion script for `shell` on stdout.
pub fn generate_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}
