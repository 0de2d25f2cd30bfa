use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Subject line grammar for commits that belong in the changelog
pub const COMMIT_PARSER: &str = r"^(?P<change_type>feat|fix|refactor|perf|break|docs)(?:\((?P<scope>[^()\r\n]*)\)|\()?(?P<breaking>!)?:\s(?P<message>.*)?";

/// Changelog sections, in the order they are written
pub const CHANGE_TYPE_ORDER: [&str; 6] = [
    "BREAKING CHANGES",
    "✨ New",
    "🐛 Fixes",
    "⚙️ Under the Hood",
    "⚡ Performance Improvements",
    "📚 Documentation Improvements",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Break,
    Feat,
    Fix,
    Refactor,
    Perf,
    Docs,
}

impl ChangeType {
    pub const ALL: [ChangeType; 6] = [
        ChangeType::Break,
        ChangeType::Feat,
        ChangeType::Fix,
        ChangeType::Refactor,
        ChangeType::Perf,
        ChangeType::Docs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChangeType::Break => "break",
            ChangeType::Feat => "feat",
            ChangeType::Fix => "fix",
            ChangeType::Refactor => "refactor",
            ChangeType::Perf => "perf",
            ChangeType::Docs => "docs",
        }
    }

    /// Changelog section heading
    pub fn heading(self) -> &'static str {
        match self {
            ChangeType::Break => "BREAKING CHANGES",
            ChangeType::Feat => "✨ New",
            ChangeType::Fix => "🐛 Fixes",
            ChangeType::Refactor => "⚙️ Under the Hood",
            ChangeType::Docs => "📚 Documentation Improvements",
            ChangeType::Perf => "⚡ Performance Improvements",
        }
    }

    /// Version component this kind of change bumps
    pub fn increment(self) -> Option<Increment> {
        match self {
            ChangeType::Break => Some(Increment::Major),
            ChangeType::Feat => Some(Increment::Minor),
            ChangeType::Fix | ChangeType::Refactor | ChangeType::Perf => Some(Increment::Patch),
            ChangeType::Docs => None,
        }
    }
}

impl FromStr for ChangeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChangeType::ALL
            .into_iter()
            .find(|change_type| change_type.as_str() == s)
            .ok_or_else(|| format!("unknown change type '{s}'"))
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Increment {
    Patch,
    Minor,
    Major,
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Increment::Major => write!(f, "MAJOR"),
            Increment::Minor => write!(f, "MINOR"),
            Increment::Patch => write!(f, "PATCH"),
        }
    }
}

/// A commit subject split into the fields the changelog cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    pub change_type: ChangeType,
    pub scope: Option<String>,
    pub breaking: bool,
    pub message: String,
}

impl ParsedMessage {
    pub fn increment(&self) -> Option<Increment> {
        if self.breaking {
            Some(Increment::Major)
        } else {
            self.change_type.increment()
        }
    }
}

/// Compiled commit classification rules
#[derive(Debug, Clone)]
pub struct CommitRules {
    parser: Regex,
}

impl CommitRules {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            parser: Regex::new(pattern)?,
        })
    }

    pub fn commit_parser(&self) -> &Regex {
        &self.parser
    }

    pub fn change_type_order(&self) -> &'static [&'static str] {
        &CHANGE_TYPE_ORDER
    }

    /// Parse a subject line, `None` when it is not a changelog entry
    pub fn parse(&self, subject: &str) -> Option<ParsedMessage> {
        let caps = self.parser.captures(subject)?;
        let change_type = caps.name("change_type")?.as_str().parse().ok()?;

        Some(ParsedMessage {
            change_type,
            scope: caps
                .name("scope")
                .map(|m| m.as_str().to_string())
                .filter(|scope| !scope.is_empty()),
            breaking: caps.name("breaking").is_some(),
            message: caps
                .name("message")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        })
    }

    /// Largest bump among a set of subjects
    pub fn increment<'a>(&self, subjects: impl IntoIterator<Item = &'a str>) -> Option<Increment> {
        subjects
            .into_iter()
            .filter_map(|subject| self.parse(subject))
            .filter_map(|parsed| parsed.increment())
            .max()
    }
}

impl Default for CommitRules {
    fn default() -> Self {
        Self {
            parser: Regex::new(COMMIT_PARSER).expect("built-in commit parser is valid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_scope() {
        let rules = CommitRules::default();
        let parsed = rules.parse("feat(cli): add a flag (#12)").unwrap();
        assert_eq!(parsed.change_type, ChangeType::Feat);
        assert_eq!(parsed.scope.as_deref(), Some("cli"));
        assert!(!parsed.breaking);
        assert_eq!(parsed.message, "add a flag (#12)");
    }

    #[test]
    fn test_parse_breaking_marker() {
        let rules = CommitRules::default();
        let parsed = rules.parse("refactor!: drop python 3.7").unwrap();
        assert_eq!(parsed.change_type, ChangeType::Refactor);
        assert!(parsed.breaking);
        assert_eq!(parsed.scope, None);
        assert_eq!(parsed.increment(), Some(Increment::Major));
    }

    #[test]
    fn test_parse_rejects_other_types() {
        let rules = CommitRules::default();
        assert!(rules.parse("chore: I am a commit title").is_none());
        assert!(rules.parse("ci(deps): bump actions").is_none());
        assert!(rules.parse("fix:missing space").is_none());
    }

    #[test]
    fn test_headings_follow_order() {
        let headings: Vec<&str> = [
            ChangeType::Break,
            ChangeType::Feat,
            ChangeType::Fix,
            ChangeType::Refactor,
            ChangeType::Perf,
            ChangeType::Docs,
        ]
        .into_iter()
        .map(ChangeType::heading)
        .collect();
        assert_eq!(headings, CHANGE_TYPE_ORDER);
    }

    #[test]
    fn test_bump_map() {
        assert_eq!(ChangeType::Break.increment(), Some(Increment::Major));
        assert_eq!(ChangeType::Feat.increment(), Some(Increment::Minor));
        assert_eq!(ChangeType::Fix.increment(), Some(Increment::Patch));
        assert_eq!(ChangeType::Perf.increment(), Some(Increment::Patch));
        assert_eq!(ChangeType::Docs.increment(), None);
    }

    #[test]
    fn test_increment_across_subjects() {
        let rules = CommitRules::default();
        assert_eq!(
            rules.increment(["fix: one", "feat: two", "docs: three"]),
            Some(Increment::Minor)
        );
        assert_eq!(rules.increment(["docs: only docs", "chore: noise"]), None);
    }

    #[test]
    fn test_change_type_round_trip() {
        for change_type in ChangeType::ALL {
            assert_eq!(change_type.as_str().parse::<ChangeType>(), Ok(change_type));
        }
        assert!("chore".parse::<ChangeType>().is_err());
    }
}
