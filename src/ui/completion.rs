//! Shell completion system for runlog

use clap::Command;
use clap_complete::{Generator, generate};
use std::path::PathBuf;

/// Generate shell completions for the given shell
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    generate(
        generator,
        app,
        app.get_name().to_string(),
        &mut std::io::stdout(),
    );
}

/// Install shell completion to standard system location
pub fn install_completion(shell: clap_complete::Shell) -> Result<String, String> {
    use std::fs;

    let completion_dir = get_completion_directory(shell)?;
    let filename = get_completion_filename(shell);
    let completion_path = completion_dir.join(filename);

    let completion_script = generate_completion_script(shell);

    fs::write(&completion_path, completion_script).map_err(|e| {
        format!(
            "Failed to write completion file to {}: {}",
            completion_path.display(),
            e
        )
    })?;

    let instructions = get_shell_setup_instructions(shell, &completion_path);
    Ok(format!(
        "✅ Shell completion installed successfully!\n\n{instructions}"
    ))
}

/// Get the standard completion directory for a shell
fn get_completion_directory(shell: clap_complete::Shell) -> Result<PathBuf, String> {
    use std::fs;

    let home =
        std::env::var("HOME").map_err(|_| "HOME environment variable not set".to_string())?;

    let dir = match shell {
        clap_complete::Shell::Bash => {
            format!("{home}/.local/share/bash-completion/completions")
        }
        clap_complete::Shell::Zsh => format!("{home}/.local/share/zsh/site-functions"),
        clap_complete::Shell::Fish => format!("{home}/.config/fish/completions"),
        _ => {
            return Err(format!(
                "Automatic installation is not supported for {shell}. Use completion-generate instead."
            ));
        }
    };

    let path = PathBuf::from(&dir);
    fs::create_dir_all(&path).map_err(|e| format!("Failed to create directory {dir}: {e}"))?;
    Ok(path)
}

/// Completion file name per shell convention
fn get_completion_filename(shell: clap_complete::Shell) -> &'static str {
    match shell {
        clap_complete::Shell::Zsh => "_runlog",
        clap_complete::Shell::Fish => "runlog.fish",
        _ => "runlog",
    }
}

/// Render the completion script into a buffer
fn generate_completion_script(shell: clap_complete::Shell) -> Vec<u8> {
    use clap::CommandFactory;

    let mut app = crate::ui::cli::Cli::command();
    let app_name = app.get_name().to_string();
    let mut buffer = Vec::new();
    generate(shell, &mut app, app_name, &mut buffer);
    buffer
}

/// Post-install hint for the user's shell setup
fn get_shell_setup_instructions(shell: clap_complete::Shell, path: &std::path::Path) -> String {
    match shell {
        clap_complete::Shell::Bash => format!(
            "Completion installed to {}.\nRestart your shell, or source the file directly.",
            path.display()
        ),
        clap_complete::Shell::Zsh => format!(
            "Completion installed to {}.\nEnsure the directory is in your fpath before compinit.",
            path.display()
        ),
        clap_complete::Shell::Fish => format!(
            "Completion installed to {}.\nFish picks it up automatically on next start.",
            path.display()
        ),
        _ => format!("Completion installed to {}.", path.display()),
    }
}
