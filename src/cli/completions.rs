use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    groundwork completions bash > ~/.bash_completion.d/groundwork\n\n\
                  Generate zsh completions:\n    groundwork completions zsh > ~/.zfunc/_groundwork\n\n\
                  Generate fish completions:\n    groundwork completions fish > ~/.config/fish/completions/groundwork.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
