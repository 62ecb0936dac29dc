/// A conventional-commit prefix with its icon, as offered by the commit
/// flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitType {
    pub name: &'static str,
    pub icon: &'static str,
    pub summary: &'static str,
}

impl CommitType {
    pub fn lookup(name: &str) -> Option<&'static CommitType> {
        COMMIT_TYPES.get(name)
    }

    /// All known types, in the order the commit flow presents them.
    pub fn all() -> impl Iterator<Item = &'static CommitType> {
        COMMIT_TYPE_ORDER.iter().filter_map(|name| COMMIT_TYPES.get(name))
    }

    /// Comma-separated list of valid type names, for error messages.
    pub fn names() -> String {
        COMMIT_TYPE_ORDER.join(", ")
    }

    /// Commit subject line for this type: `name: icon message`.
    pub fn subject(&self, message: &str) -> String {
        format!("{}: {} {}", self.name, self.icon, message)
    }
}

pub const COMMIT_TYPE_ORDER: [&str; 12] = [
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "chore", "revert", "build", "ci",
    "ui",
];

pub const COMMIT_TYPES: phf::Map<&'static str, CommitType> = phf::phf_map! {
    "feat" => CommitType { name: "feat", icon: "✨", summary: "A new feature" },
    "fix" => CommitType { name: "fix", icon: "🐛", summary: "A bug fix" },
    "docs" => CommitType { name: "docs", icon: "📝", summary: "Documentation" },
    "style" => CommitType { name: "style", icon: "💄", summary: "Formatting" },
    "refactor" => CommitType { name: "refactor", icon: "♻️", summary: "Refactoring" },
    "perf" => CommitType { name: "perf", icon: "⚡️", summary: "Performance" },
    "test" => CommitType { name: "test", icon: "✅", summary: "Testing" },
    "chore" => CommitType { name: "chore", icon: "🔧", summary: "Tooling chore" },
    "revert" => CommitType { name: "revert", icon: "⏪️", summary: "Revert" },
    "build" => CommitType { name: "build", icon: "📦️", summary: "Build" },
    "ci" => CommitType { name: "ci", icon: "👷", summary: "CI" },
    "ui" => CommitType { name: "ui", icon: "🎨", summary: "UI" },
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_finds_known_types() {
        let feat = CommitType::lookup("feat").unwrap();

        assert_eq!(feat.name, "feat");
        assert_eq!(feat.icon, "✨");
    }

    #[test]
    fn lookup_rejects_unknown_types() {
        assert!(CommitType::lookup("wat").is_none());
    }

    #[test]
    fn subject_combines_name_icon_and_message() {
        let feat = CommitType::lookup("feat").unwrap();

        assert_eq!(feat.subject("add sparkle"), "feat: ✨ add sparkle");
    }

    #[test]
    fn all_yields_every_type_in_presentation_order() {
        let names: Vec<&str> = CommitType::all().map(|t| t.name).collect();

        assert_eq!(names.len(), COMMIT_TYPES.len());
        assert_eq!(names, COMMIT_TYPE_ORDER);
    }
}
