//! Commands run by the `git-branch-select` binary, each an `impl App` block.
//!
//! - `list`: enumerate (and filter) branches
//! - `switch`: check out a branch and print its status
//! - `select`: the interactive list, prompt and switch flow

mod list;
mod select;
mod switch;
