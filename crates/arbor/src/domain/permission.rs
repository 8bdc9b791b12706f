use std::fmt;

/// Access level requested for an entry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PermissionMode {
    Read,
    ReadWrite,
}

impl PermissionMode {
    /// Returns the persisted/displayed label for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::ReadWrite => "readwrite",
        }
    }
}

impl fmt::Display for PermissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a permission query or request.
///
/// `Prompt` means access is possible but the user has not confirmed it yet in
/// this process.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PermissionState {
    Denied,
    Granted,
    Prompt,
}

impl PermissionState {
    /// Returns `true` only for [`PermissionState::Granted`].
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_mode_display_matches_label() {
        // Arrange
        let mode = PermissionMode::ReadWrite;

        // Act
        let label = mode.to_string();

        // Assert
        assert_eq!(label, "readwrite");
    }

    #[test]
    fn test_only_granted_state_is_granted() {
        // Arrange & Act & Assert
        assert!(PermissionState::Granted.is_granted());
        assert!(!PermissionState::Prompt.is_granted());
        assert!(!PermissionState::Denied.is_granted());
    }
}
