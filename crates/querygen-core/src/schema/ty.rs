use crate::stmt::BinaryOp;

use std::fmt;

/// Concrete SQL Server column types recognized by the classifier.
///
/// Data sources report a column's type as a raw name (`"int"`,
/// `"nvarchar"`, ...). [`DataType::classify`] maps that name onto this closed
/// set, together with the coarser [`DataTypeGroup`] used to decide which
/// filter comparisons make sense for the column.
///
/// Matching is exact and case-sensitive: `"INT"` and `"varchar(50)"` are
/// [`DataType::Unknown`]. Unknown types are not an error; columns of an
/// unknown type still get projection statements, they just never get filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    // Exact numerics
    Bit,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Decimal,
    Numeric,
    SmallMoney,
    Money,

    // Approximate numerics
    Float,
    Real,

    // Date and time
    Date,
    DateTime,
    DateTime2,
    DateTimeOffset,
    SmallDateTime,
    Time,

    // Character strings
    Char,
    VarChar,
    Text,

    // Unicode character strings
    NChar,
    NVarChar,
    NText,

    /// Any type name not in the table above
    Unknown,
}

/// Coarse classification of a [`DataType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataTypeGroup {
    Unknown,
    ExactNumeric,
    ApproximateNumeric,
    DateAndTime,
    CharacterString,
    UnicodeCharacterString,
}

const NAMES: &[(&str, DataType)] = &[
    ("bit", DataType::Bit),
    ("tinyint", DataType::TinyInt),
    ("smallint", DataType::SmallInt),
    ("int", DataType::Int),
    ("bigint", DataType::BigInt),
    ("decimal", DataType::Decimal),
    ("numeric", DataType::Numeric),
    ("smallmoney", DataType::SmallMoney),
    ("money", DataType::Money),
    ("float", DataType::Float),
    ("real", DataType::Real),
    ("date", DataType::Date),
    ("datetime", DataType::DateTime),
    ("datetime2", DataType::DateTime2),
    ("datetimeoffset", DataType::DateTimeOffset),
    ("smalldatetime", DataType::SmallDateTime),
    ("time", DataType::Time),
    ("char", DataType::Char),
    ("varchar", DataType::VarChar),
    ("text", DataType::Text),
    ("nchar", DataType::NChar),
    ("nvarchar", DataType::NVarChar),
    ("ntext", DataType::NText),
];

impl DataType {
    /// Classifies a raw type name into its data type and group.
    ///
    /// Total and pure: unrecognized names yield `(Unknown, Unknown)`.
    pub fn classify(name: &str) -> (DataType, DataTypeGroup) {
        let ty = DataType::from_name(name);
        (ty, ty.group())
    }

    /// Looks up a raw type name. Exact, case-sensitive match.
    pub fn from_name(name: &str) -> DataType {
        NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, ty)| *ty)
            .unwrap_or(DataType::Unknown)
    }

    /// The group this type belongs to.
    ///
    /// `nchar`, `nvarchar` and `ntext` are grouped as
    /// [`DataTypeGroup::CharacterString`]. No type maps to
    /// [`DataTypeGroup::UnicodeCharacterString`].
    pub fn group(self) -> DataTypeGroup {
        use DataType::*;

        match self {
            Bit | TinyInt | SmallInt | Int | BigInt | Decimal | Numeric | SmallMoney | Money => {
                DataTypeGroup::ExactNumeric
            }
            Float | Real => DataTypeGroup::ApproximateNumeric,
            Date | DateTime | DateTime2 | DateTimeOffset | SmallDateTime | Time => {
                DataTypeGroup::DateAndTime
            }
            Char | VarChar | Text | NChar | NVarChar | NText => DataTypeGroup::CharacterString,
            Unknown => DataTypeGroup::Unknown,
        }
    }

    /// The canonical SQL Server name, or `"unknown"`.
    pub fn as_str(self) -> &'static str {
        NAMES
            .iter()
            .find(|(_, ty)| *ty == self)
            .map(|(n, _)| *n)
            .unwrap_or("unknown")
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, DataType::Unknown)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DataTypeGroup {
    /// The comparison operators filter generation uses for this group.
    ///
    /// Numeric and date/time groups compare with every operator. String
    /// groups only get equality. Unknown types get nothing.
    pub fn operators(self) -> &'static [BinaryOp] {
        use DataTypeGroup::*;

        match self {
            ExactNumeric | ApproximateNumeric | DateAndTime => &BinaryOp::ALL,
            CharacterString | UnicodeCharacterString => &BinaryOp::EQUALITY,
            Unknown => &[],
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, DataTypeGroup::Unknown)
    }

    pub fn as_str(self) -> &'static str {
        use DataTypeGroup::*;

        match self {
            Unknown => "unknown",
            ExactNumeric => "exact_numeric",
            ApproximateNumeric => "approximate_numeric",
            DateAndTime => "date_and_time",
            CharacterString => "character_string",
            UnicodeCharacterString => "unicode_character_string",
        }
    }
}

impl fmt::Display for DataTypeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
