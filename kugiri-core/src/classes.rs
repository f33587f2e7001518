//! Boundary kinds and the per-kind break-class alphabets
//!
//! Each analysis works over its own small closed alphabet of character
//! classes. Classes are carried through the engine as raw `u8` ids so rule
//! masks can be plain bitsets; the typed enums here are the public face.

use std::fmt;

/// The four boundary analyses the engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoundaryKind {
    /// Extended grapheme clusters (user-perceived characters)
    Grapheme,
    /// Word boundaries
    Word,
    /// Sentence boundaries
    Sentence,
    /// Line-break opportunities
    Line,
}

impl BoundaryKind {
    /// All kinds, in cache-slot order.
    pub const ALL: [BoundaryKind; 4] = [
        BoundaryKind::Grapheme,
        BoundaryKind::Word,
        BoundaryKind::Sentence,
        BoundaryKind::Line,
    ];

    /// Stable slot index for per-kind storage.
    pub(crate) fn index(self) -> usize {
        match self {
            BoundaryKind::Grapheme => 0,
            BoundaryKind::Word => 1,
            BoundaryKind::Sentence => 2,
            BoundaryKind::Line => 3,
        }
    }

    /// Lowercase name, as used in diagnostics and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            BoundaryKind::Grapheme => "grapheme",
            BoundaryKind::Word => "word",
            BoundaryKind::Sentence => "sentence",
            BoundaryKind::Line => "line",
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! break_class_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $label:literal,)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Number of classes in this alphabet.
            pub(crate) const COUNT: usize = [$($name::$variant),+].len();

            /// Every class, indexed by id.
            pub(crate) const ALL: [$name; $name::COUNT] = [$($name::$variant),+];

            /// Raw class id, suitable for mask membership tests.
            pub const fn id(self) -> u8 {
                self as u8
            }

            /// Property-style class name.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub(crate) fn from_id(id: u8) -> Option<$name> {
                Self::ALL.get(id as usize).copied()
            }
        }
    };
}

break_class_enum! {
    /// Grapheme cluster break classes (extended grapheme clusters).
    ///
    /// `Other` must stay at id 0: it is the fallback for unlisted scalars.
    GraphemeClass {
        Other => "Other",
        Cr => "CR",
        Lf => "LF",
        Control => "Control",
        Extend => "Extend",
        Zwj => "ZWJ",
        RegionalIndicator => "Regional_Indicator",
        Prepend => "Prepend",
        SpacingMark => "SpacingMark",
        HangulL => "L",
        HangulV => "V",
        HangulT => "T",
        HangulLv => "LV",
        HangulLvt => "LVT",
        ExtendedPictographic => "Extended_Pictographic",
    }
}

break_class_enum! {
    /// Word break classes.
    WordClass {
        Other => "Other",
        Cr => "CR",
        Lf => "LF",
        Newline => "Newline",
        Extend => "Extend",
        Zwj => "ZWJ",
        RegionalIndicator => "Regional_Indicator",
        Format => "Format",
        Katakana => "Katakana",
        ALetter => "ALetter",
        MidLetter => "MidLetter",
        MidNum => "MidNum",
        MidNumLet => "MidNumLet",
        Numeric => "Numeric",
        ExtendNumLet => "ExtendNumLet",
        WSegSpace => "WSegSpace",
        ExtendedPictographic => "Extended_Pictographic",
    }
}

break_class_enum! {
    /// Sentence break classes.
    SentenceClass {
        Other => "Other",
        Cr => "CR",
        Lf => "LF",
        Sep => "Sep",
        Extend => "Extend",
        Format => "Format",
        Sp => "Sp",
        Lower => "Lower",
        Upper => "Upper",
        OLetter => "OLetter",
        Numeric => "Numeric",
        ATerm => "ATerm",
        STerm => "STerm",
        Close => "Close",
        SContinue => "SContinue",
    }
}

break_class_enum! {
    /// Line break classes (a documented subset of the full property).
    ///
    /// Unlisted scalars fall back to `Other`, which every rule treats the
    /// same way as `Al`.
    LineClass {
        Other => "XX",
        Bk => "BK",
        Cr => "CR",
        Lf => "LF",
        Sp => "SP",
        Zw => "ZW",
        Wj => "WJ",
        Gl => "GL",
        Cm => "CM",
        Zwj => "ZWJ",
        Op => "OP",
        Cl => "CL",
        Qu => "QU",
        Ex => "EX",
        Hy => "HY",
        Ba => "BA",
        Bb => "BB",
        Is => "IS",
        Nu => "NU",
        Pr => "PR",
        Po => "PO",
        Al => "AL",
        Id => "ID",
        RegionalIndicator => "RI",
        Jl => "JL",
        Jv => "JV",
        Jt => "JT",
        H2 => "H2",
        H3 => "H3",
    }
}

/// A classified scalar: the break class of one scalar under one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakClass {
    /// Grapheme cluster break class
    Grapheme(GraphemeClass),
    /// Word break class
    Word(WordClass),
    /// Sentence break class
    Sentence(SentenceClass),
    /// Line break class
    Line(LineClass),
}

impl BreakClass {
    /// The analysis this class belongs to.
    pub fn kind(self) -> BoundaryKind {
        match self {
            BreakClass::Grapheme(_) => BoundaryKind::Grapheme,
            BreakClass::Word(_) => BoundaryKind::Word,
            BreakClass::Sentence(_) => BoundaryKind::Sentence,
            BreakClass::Line(_) => BoundaryKind::Line,
        }
    }

    /// Property-style class name.
    pub fn name(self) -> &'static str {
        match self {
            BreakClass::Grapheme(c) => c.name(),
            BreakClass::Word(c) => c.name(),
            BreakClass::Sentence(c) => c.name(),
            BreakClass::Line(c) => c.name(),
        }
    }

    /// Raw class id within the kind's alphabet.
    pub fn id(self) -> u8 {
        match self {
            BreakClass::Grapheme(c) => c.id(),
            BreakClass::Word(c) => c.id(),
            BreakClass::Sentence(c) => c.id(),
            BreakClass::Line(c) => c.id(),
        }
    }
}

/// Alphabet size for a kind, used when validating masks and tables.
pub(crate) fn alphabet_len(kind: BoundaryKind) -> usize {
    match kind {
        BoundaryKind::Grapheme => GraphemeClass::COUNT,
        BoundaryKind::Word => WordClass::COUNT,
        BoundaryKind::Sentence => SentenceClass::COUNT,
        BoundaryKind::Line => LineClass::COUNT,
    }
}

/// Wrap a raw class id back into its typed alphabet. Ids outside the
/// alphabet read as the fallback class.
pub(crate) fn wrap_class(kind: BoundaryKind, id: u8) -> BreakClass {
    match kind {
        BoundaryKind::Grapheme => {
            BreakClass::Grapheme(GraphemeClass::from_id(id).unwrap_or(GraphemeClass::Other))
        }
        BoundaryKind::Word => BreakClass::Word(WordClass::from_id(id).unwrap_or(WordClass::Other)),
        BoundaryKind::Sentence => {
            BreakClass::Sentence(SentenceClass::from_id(id).unwrap_or(SentenceClass::Other))
        }
        BoundaryKind::Line => BreakClass::Line(LineClass::from_id(id).unwrap_or(LineClass::Other)),
    }
}
