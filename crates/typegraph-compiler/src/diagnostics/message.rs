use std::ops::Range;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// Configuration errors come before warnings so a run that cannot be
/// trusted reports its root cause first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Configuration errors
    UnknownMapperType,

    // Warnings
    LegacyMapperSyntax,
    DuplicateFragment,
    UnusedMappers,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::UnknownMapperType => Severity::Error,
            Self::LegacyMapperSyntax | Self::DuplicateFragment | Self::UnusedMappers => {
                Severity::Warning
            }
        }
    }

    /// Default hint, included with every diagnostic of this kind.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::UnknownMapperType => Some("mapper keys must name a type defined in the schema"),
            Self::LegacyMapperSyntax => Some("use `module#Namespace.Type` instead"),
            Self::UnusedMappers => Some("set `show_unused_mappers = false` to silence this"),
            Self::DuplicateFragment => None,
        }
    }

    /// Base message, used when no detail is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnknownMapperType => "mapper targets an unknown type",
            Self::LegacyMapperSyntax => "legacy mapper syntax",
            Self::DuplicateFragment => "fragment defined more than once",
            Self::UnusedMappers => "unused mappers",
        }
    }

    /// Template for custom messages, `{}` is replaced by the detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnknownMapperType => "mapper targets unknown type `{}`".to_string(),
            Self::DuplicateFragment => "fragment `{}` is defined more than once".to_string(),
            Self::UnusedMappers => "Unused mappers: {}".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The type, field, mapper or fragment names this diagnostic is about.
    pub(crate) subjects: Vec<String>,
    /// Byte range in the source the caller renders against, when known.
    pub(crate) span: Option<Range<usize>>,
    pub(crate) message: String,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            subjects: Vec::new(),
            span: None,
            message: kind.fallback_message().to_string(),
            hints: kind.default_hint().map(str::to_string).into_iter().collect(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity(), self.message)?;
        if let Some(span) = &self.span {
            write!(f, " at {}..{}", span.start, span.end)?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
