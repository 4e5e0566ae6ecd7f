//! Platform-specific shell detection.

use std::path::PathBuf;

/// Known shell types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Sh,
    Bash,
    Zsh,
    Ksh,
    Fish,
    PowerShell,
    Unknown,
}

impl ShellType {
    /// Parse shell type from an executable path or bare name.
    pub fn from_executable(exe: &str) -> Self {
        let name = std::path::Path::new(exe)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "sh" | "dash" => ShellType::Sh,
            "bash" => ShellType::Bash,
            "zsh" => ShellType::Zsh,
            "ksh" | "mksh" => ShellType::Ksh,
            "fish" => ShellType::Fish,
            "powershell" | "pwsh" => ShellType::PowerShell,
            _ => ShellType::Unknown,
        }
    }

    /// The name the shell is usually known by.
    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Sh => "sh",
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Ksh => "ksh",
            ShellType::Fish => "fish",
            ShellType::PowerShell => "powershell",
            ShellType::Unknown => "unknown",
        }
    }

    /// Startup file where a user would put the git wrapper.
    pub fn profile(&self) -> Option<PathBuf> {
        let home = dirs::home_dir()?;

        match self {
            ShellType::Sh | ShellType::Ksh => Some(home.join(".profile")),
            ShellType::Bash => Some(home.join(".bashrc")),
            ShellType::Zsh => Some(home.join(".zshrc")),
            ShellType::Fish => Some(home.join(".config/fish/config.fish")),
            ShellType::PowerShell => dirs::document_dir()
                .map(|docs| docs.join("PowerShell/Microsoft.PowerShell_profile.ps1")),
            ShellType::Unknown => None,
        }
    }
}

/// Detect the user's login shell from `$SHELL`.
pub fn detect_shell() -> ShellType {
    if cfg!(target_os = "windows") {
        return ShellType::PowerShell;
    }

    std::env::var("SHELL")
        .map(|shell| ShellType::from_executable(&shell))
        .unwrap_or(ShellType::Unknown)
}
