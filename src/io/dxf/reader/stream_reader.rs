//! DXF stream reader trait and common types

use crate::error::{DxfError, Result};
use crate::io::dxf::GroupCodeValueType;
use crate::types::Handle;

/// A DXF code/value pair
///
/// Carries the raw value line plus the typed parses the code's range allows.
/// The line number points at the value line, for diagnostics.
#[derive(Debug, Clone)]
pub struct DxfCodePair {
    /// The DXF group code
    pub code: i32,

    /// The value type implied by the code's range
    pub value_type: GroupCodeValueType,

    /// String representation of the value
    pub value_string: String,

    /// Integer value (if the code's range is an integer type)
    pub value_int: Option<i64>,

    /// Floating-point value (if the code's range is Double)
    pub value_double: Option<f64>,

    /// Boolean value (if the code's range is Bool)
    pub value_bool: Option<bool>,

    /// Line number of the value line (1-based; 0 for synthesized pairs)
    pub line: usize,
}

impl DxfCodePair {
    /// Create a new code/value pair
    pub fn new(code: i32, value_string: String, line: usize) -> Self {
        let value_type = GroupCodeValueType::from_code(code);

        let value_int = match value_type {
            GroupCodeValueType::Int16
            | GroupCodeValueType::Int32
            | GroupCodeValueType::Int64 => value_string.trim().parse::<i64>().ok(),
            _ => None,
        };

        let value_double = match value_type {
            GroupCodeValueType::Double => value_string.trim().parse::<f64>().ok(),
            _ => None,
        };

        let value_bool = match value_type {
            GroupCodeValueType::Bool => {
                value_string.trim().parse::<i32>().ok().map(|v| v != 0)
            }
            _ => None,
        };

        Self {
            code,
            value_type,
            value_string,
            value_int,
            value_double,
            value_bool,
            line,
        }
    }

    /// Get value as string
    pub fn as_str(&self) -> &str {
        &self.value_string
    }

    /// Get value as integer
    pub fn as_int(&self) -> Option<i64> {
        self.value_int
    }

    /// Get value as i16
    pub fn as_i16(&self) -> Option<i16> {
        self.value_int.and_then(|v| i16::try_from(v).ok())
    }

    /// Get value as i32
    pub fn as_i32(&self) -> Option<i32> {
        self.value_int.and_then(|v| i32::try_from(v).ok())
    }

    /// Get value as double
    pub fn as_double(&self) -> Option<f64> {
        self.value_double
    }

    /// Get value as boolean
    pub fn as_bool(&self) -> Option<bool> {
        self.value_bool
    }

    /// Get value as handle (hex string)
    pub fn as_handle(&self) -> Option<Handle> {
        Handle::from_hex(&self.value_string)
    }

    /// Double value, or `MalformedValue` naming this pair's code and line.
    pub fn expect_double(&self) -> Result<f64> {
        self.value_double.ok_or(self.malformed())
    }

    /// i16 value, or `MalformedValue`.
    pub fn expect_i16(&self) -> Result<i16> {
        self.as_i16().ok_or(self.malformed())
    }

    /// i32 value, or `MalformedValue`.
    pub fn expect_i32(&self) -> Result<i32> {
        self.as_i32().ok_or(self.malformed())
    }

    /// i64 value, or `MalformedValue`.
    pub fn expect_i64(&self) -> Result<i64> {
        self.value_int.ok_or(self.malformed())
    }

    /// Boolean value, or `MalformedValue`.
    pub fn expect_bool(&self) -> Result<bool> {
        self.value_bool.ok_or(self.malformed())
    }

    /// Handle value, or `MalformedValue`.
    pub fn expect_handle(&self) -> Result<Handle> {
        self.as_handle().ok_or(self.malformed())
    }

    fn malformed(&self) -> DxfError {
        DxfError::MalformedValue {
            code: self.code,
            line: self.line,
        }
    }
}

/// Trait for reading DXF code/value pairs from a stream
pub trait DxfStreamReader {
    /// Read the next code/value pair; `None` at end of stream
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>>;

    /// Peek at the next code without consuming it
    fn peek_code(&mut self) -> Result<Option<i32>>;

    /// Push a pair back to be read again on the next `read_pair` call
    fn push_back(&mut self, pair: DxfCodePair);

    /// Line number of the most recently read line (1-based)
    fn line_number(&self) -> usize;
}
