use rowan::TextRange;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// When two diagnostics have overlapping spans, the higher-priority one
/// suppresses the lower-priority one. This prevents cascading error noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // These cause cascading errors throughout the rest of the file
    UnclosedBody,
    UnclosedParamList,
    UnclosedParens,

    // User omitted something required - root cause errors
    ExpectedName,
    ExpectedVariable,
    ExpectedStringLiteral,
    ExpectedSequenceType,
    ExpectedFunctionBody,
    ExpectedKeyword,
    ExpectedVarValue,
    ExpectedToken,

    // User wrote something that doesn't belong
    UnknownDeclaration,
    UnknownKindTest,
    MisplacedDeclaration,
    UnmatchedDelimiter,
    LibraryModuleBody,

    // Valid syntax, questionable module structure
    FunctionOutsideModuleNamespace,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::FunctionOutsideModuleNamespace => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Whether this kind suppresses `other` when spans overlap.
    ///
    /// Uses enum discriminant ordering: lower position = higher priority.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    /// Structural errors are Unclosed* - they cause cascading errors but
    /// should be suppressed by root-cause errors at the same position.
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            Self::UnclosedBody | Self::UnclosedParamList | Self::UnclosedParens
        )
    }

    /// Root cause errors - user omitted something required.
    pub fn is_root_cause_error(&self) -> bool {
        matches!(
            self,
            Self::ExpectedName
                | Self::ExpectedVariable
                | Self::ExpectedStringLiteral
                | Self::ExpectedSequenceType
                | Self::ExpectedFunctionBody
                | Self::ExpectedKeyword
                | Self::ExpectedVarValue
                | Self::ExpectedToken
        )
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedBody => "missing closing `}`",
            Self::UnclosedParamList => "missing closing `)` for parameter list",
            Self::UnclosedParens => "missing closing `)`",

            Self::ExpectedName => "expected a name",
            Self::ExpectedVariable => "expected a variable",
            Self::ExpectedStringLiteral => "expected a string literal",
            Self::ExpectedSequenceType => "expected a sequence type",
            Self::ExpectedFunctionBody => "expected function body or `external`",
            Self::ExpectedKeyword => "expected keyword",
            Self::ExpectedVarValue => "expected `:=` or `external`",
            Self::ExpectedToken => "expected token",

            Self::UnknownDeclaration => "unknown declaration",
            Self::UnknownKindTest => "unknown kind test",
            Self::MisplacedDeclaration => {
                "namespace, import and setter declarations must precede function, variable and option declarations"
            }
            Self::UnmatchedDelimiter => "unmatched closing delimiter",
            Self::LibraryModuleBody => "library module cannot have a query body",

            Self::FunctionOutsideModuleNamespace => {
                "function is not in the module's target namespace"
            }
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedBody | Self::UnclosedParamList | Self::UnclosedParens => {
                format!("{}; {{}}", self.fallback_message())
            }

            Self::ExpectedName
            | Self::ExpectedVariable
            | Self::ExpectedStringLiteral
            | Self::ExpectedSequenceType
            | Self::ExpectedKeyword
            | Self::ExpectedToken => "expected {}".to_string(),

            Self::UnknownDeclaration => "unknown declaration `{}`".to_string(),
            Self::UnknownKindTest => "`{}()` is not a kind test".to_string(),
            Self::FunctionOutsideModuleNamespace => {
                "function prefix `{}` differs from the module prefix".to_string()
            }

            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
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
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
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
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        Ok(())
    }
}
