use std::fmt::Display;

/// Verbosity level of a diagnostic, and the retention threshold of a sink.
///
/// `Minimum` entries are the most important and survive every threshold;
/// `All` entries are pedantic notes that only an `All`-threshold sink keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Always retained.
    Minimum,
    /// Retained at `Many` and `All` thresholds.
    Many,
    /// Retained only at the `All` threshold.
    All,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimum => write!(f, "minimum"),
            Self::Many => write!(f, "many"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Identifies what a diagnostic is about. Every code carries a fixed
/// severity so callers cannot report the same condition at two levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticCode {
    /// A `let` declaration without a `: Type` annotation.
    MissingTypeHint,
    /// A function declaration without a `->` return annotation.
    MissingReturnHint,
    /// A call site whose recorded hint mismatches the declared hint.
    HintMismatch,
    /// A parameter name repeated within one declaration.
    DuplicateParameter,
    /// A member name repeated within one object declaration.
    DuplicateMember,
    /// A call to a name that is neither bound nor a builtin.
    UnknownCallable,
    /// A fixed-arity builtin called with the wrong argument count.
    WrongBuiltinArity,
    /// An accessor chain member that does not exist in its scope.
    UnknownMember,
    /// An `input` read while the `stdin` flag is off.
    InputDisabled,
    /// An `enable`/`disable` call naming a flag that does not exist.
    UnknownFlag,
    /// An explicit `__break;` statement was reached.
    Breakpoint,
}

impl DiagnosticCode {
    /// Returns the fixed severity of this code.
    pub const fn severity(self) -> Severity {
        match self {
            Self::MissingTypeHint | Self::MissingReturnHint => Severity::All,
            Self::HintMismatch | Self::InputDisabled => Severity::Many,
            Self::DuplicateParameter
            | Self::DuplicateMember
            | Self::UnknownCallable
            | Self::WrongBuiltinArity
            | Self::UnknownMember
            | Self::UnknownFlag
            | Self::Breakpoint => Severity::Minimum,
        }
    }

    /// Returns the stable name of this code, as rendered in output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingTypeHint => "missing-type-hint",
            Self::MissingReturnHint => "missing-return-hint",
            Self::HintMismatch => "hint-mismatch",
            Self::DuplicateParameter => "duplicate-parameter",
            Self::DuplicateMember => "duplicate-member",
            Self::UnknownCallable => "unknown-callable",
            Self::WrongBuiltinArity => "wrong-builtin-arity",
            Self::UnknownMember => "unknown-member",
            Self::InputDisabled => "input-disabled",
            Self::UnknownFlag => "unknown-flag",
            Self::Breakpoint => "breakpoint",
        }
    }
}

impl Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single retained diagnostic.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// What this diagnostic is about.
    pub code:     DiagnosticCode,
    /// The fixed severity of `code`.
    pub severity: Severity,
    /// Human-readable details.
    pub message:  String,
    /// The source line the diagnostic refers to.
    pub line:     usize,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] line {}: {}", self.code, self.line, self.message)
    }
}

/// An ordered diagnostic list with a retention threshold.
///
/// Entries above the threshold verbosity are dropped at creation time, not
/// hidden: a sink constructed with [`Severity::Minimum`] never stores a
/// [`Severity::All`] note at all.
///
/// # Example
/// ```
/// use ladle::error::{DiagnosticCode, Diagnostics, Severity};
///
/// let mut sink = Diagnostics::new(Severity::Many);
/// sink.report(DiagnosticCode::HintMismatch, 3, "declared 'int' but 'f' is hinted 'string'".to_owned());
/// sink.report(DiagnosticCode::MissingTypeHint, 4, "no type hint on 'x'".to_owned());
///
/// // The second report is `All`-severity and the sink retains up to `Many`.
/// assert_eq!(sink.entries().len(), 1);
/// assert_eq!(sink.entries()[0].line, 3);
/// ```
#[derive(Debug)]
pub struct Diagnostics {
    threshold: Severity,
    entries:   Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty sink retaining diagnostics up to `threshold`.
    #[must_use]
    pub const fn new(threshold: Severity) -> Self {
        Self { threshold,
               entries: Vec::new() }
    }

    /// Returns the configured retention threshold.
    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Reports a diagnostic, dropping it when its severity is above the
    /// configured threshold.
    ///
    /// # Returns
    /// - `true` if the diagnostic was retained.
    /// - `false` if it was dropped.
    pub fn report(&mut self, code: DiagnosticCode, line: usize, message: String) -> bool {
        let severity = code.severity();
        if severity > self.threshold {
            return false;
        }

        self.entries.push(Diagnostic { code,
                                       severity,
                                       message,
                                       line });
        true
    }

    /// Returns every retained diagnostic, in report order.
    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Returns `true` when nothing was retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves every entry of `other` to the end of this sink, preserving
    /// order. The threshold of `other` already applied at creation.
    pub fn append(&mut self, other: Self) {
        let mut other = other;
        self.entries.append(&mut other.entries);
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(Severity::Many)
    }
}
