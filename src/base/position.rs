/// Position tracking for IR entities and CPG nodes
///
/// Bytecode line tables are sparse: a statement may carry a line number,
/// a column, both, or neither, and decompilers encode "absent" as a
/// negative value. `SourcePos` normalizes all of that into options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct SourcePos {
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl SourcePos {
    /// A position with no line or column information.
    pub const NONE: SourcePos = SourcePos {
        line: None,
        column: None,
    };

    pub fn new(line: u32, column: u32) -> Self {
        Self {
            line: Some(line),
            column: Some(column),
        }
    }

    /// Create a position from raw decompiler output, where negative
    /// values mean "unknown".
    pub fn from_raw(line: i32, column: i32) -> Self {
        Self {
            line: u32::try_from(line).ok(),
            column: u32::try_from(column).ok(),
        }
    }

    pub fn line_only(line: u32) -> Self {
        Self {
            line: Some(line),
            column: None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.line.is_none() && self.column.is_none()
    }
}
