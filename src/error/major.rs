// Mon Oct 19 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// Major error class as reported by the native library's error stack.
/// Serialized as its native symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum MajorClass {
    Args,
    Resource,
    Internal,
    File,
    Io,
    Func,
    Id,
    Cache,
    Btree,
    Sym,
    Heap,
    Ohdr,
    Datatype,
    Dataspace,
    Dataset,
    Storage,
    Plist,
    Attr,
    Pline,
    Efl,
    Reference,
    Other(String),
}

impl MajorClass {
    pub fn from_symbol(symbol: &str) -> Self {
        let trimmed = symbol.trim();
        match trimmed.to_uppercase().as_str() {
            "H5E_ARGS" => MajorClass::Args,
            "H5E_RESOURCE" => MajorClass::Resource,
            "H5E_INTERNAL" => MajorClass::Internal,
            "H5E_FILE" => MajorClass::File,
            "H5E_IO" => MajorClass::Io,
            "H5E_FUNC" => MajorClass::Func,
            "H5E_ID" | "H5E_ATOM" => MajorClass::Id,
            "H5E_CACHE" => MajorClass::Cache,
            "H5E_BTREE" => MajorClass::Btree,
            "H5E_SYM" => MajorClass::Sym,
            "H5E_HEAP" => MajorClass::Heap,
            "H5E_OHDR" => MajorClass::Ohdr,
            "H5E_DATATYPE" => MajorClass::Datatype,
            "H5E_DATASPACE" => MajorClass::Dataspace,
            "H5E_DATASET" => MajorClass::Dataset,
            "H5E_STORAGE" => MajorClass::Storage,
            "H5E_PLIST" => MajorClass::Plist,
            "H5E_ATTR" => MajorClass::Attr,
            "H5E_PLINE" => MajorClass::Pline,
            "H5E_EFL" => MajorClass::Efl,
            "H5E_REFERENCE" => MajorClass::Reference,
            _ => MajorClass::Other(trimmed.to_string()),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            MajorClass::Args => "H5E_ARGS",
            MajorClass::Resource => "H5E_RESOURCE",
            MajorClass::Internal => "H5E_INTERNAL",
            MajorClass::File => "H5E_FILE",
            MajorClass::Io => "H5E_IO",
            MajorClass::Func => "H5E_FUNC",
            MajorClass::Id => "H5E_ID",
            MajorClass::Cache => "H5E_CACHE",
            MajorClass::Btree => "H5E_BTREE",
            MajorClass::Sym => "H5E_SYM",
            MajorClass::Heap => "H5E_HEAP",
            MajorClass::Ohdr => "H5E_OHDR",
            MajorClass::Datatype => "H5E_DATATYPE",
            MajorClass::Dataspace => "H5E_DATASPACE",
            MajorClass::Dataset => "H5E_DATASET",
            MajorClass::Storage => "H5E_STORAGE",
            MajorClass::Plist => "H5E_PLIST",
            MajorClass::Attr => "H5E_ATTR",
            MajorClass::Pline => "H5E_PLINE",
            MajorClass::Efl => "H5E_EFL",
            MajorClass::Reference => "H5E_REFERENCE",
            MajorClass::Other(name) => name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            MajorClass::Args => "Invalid arguments to routine",
            MajorClass::Resource => "Resource unavailable",
            MajorClass::Internal => "Internal error (too specific to document in detail)",
            MajorClass::File => "File accessibility",
            MajorClass::Io => "Low-level I/O",
            MajorClass::Func => "Function entry/exit",
            MajorClass::Id => "Object ID",
            MajorClass::Cache => "Object cache",
            MajorClass::Btree => "B-Tree node",
            MajorClass::Sym => "Symbol table",
            MajorClass::Heap => "Heap",
            MajorClass::Ohdr => "Object header",
            MajorClass::Datatype => "Datatype",
            MajorClass::Dataspace => "Dataspace",
            MajorClass::Dataset => "Dataset",
            MajorClass::Storage => "Data storage",
            MajorClass::Plist => "Property lists",
            MajorClass::Attr => "Attribute",
            MajorClass::Pline => "Data filters",
            MajorClass::Efl => "External file list",
            MajorClass::Reference => "References",
            MajorClass::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, MajorClass::Other(_))
    }
}

impl fmt::Display for MajorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl From<String> for MajorClass {
    fn from(symbol: String) -> Self {
        MajorClass::from_symbol(&symbol)
    }
}

impl From<MajorClass> for String {
    fn from(major: MajorClass) -> Self {
        major.symbol().to_string()
    }
}
