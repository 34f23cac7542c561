// Mon Oct 19 2026 - Alex

use crate::error::MajorClass;
use std::fmt;

/// Tag identifying which category of library failure an error belongs to.
///
/// `Library` is the catch-all for failures that carry no usable major class.
/// New categories may be added, so matches outside this crate need a
/// wildcard arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    Library,
    FunctionArgument,
    ResourceUnavailable,
    Internal,
    FileInterface,
    LowLevelIo,
    FunctionEntryExit,
    Identifier,
    MetadataCache,
    BTree,
    SymbolTable,
    Heap,
    ObjectHeader,
    DatatypeInterface,
    DataspaceInterface,
    DatasetInterface,
    DataStorage,
    PropertyListInterface,
    Attribute,
    DataFilters,
    ExternalFileList,
    Reference,
}

impl ErrorKind {
    pub fn from_major(major: &MajorClass) -> Self {
        match major {
            MajorClass::Args => ErrorKind::FunctionArgument,
            MajorClass::Resource => ErrorKind::ResourceUnavailable,
            MajorClass::Internal => ErrorKind::Internal,
            MajorClass::File => ErrorKind::FileInterface,
            MajorClass::Io => ErrorKind::LowLevelIo,
            MajorClass::Func => ErrorKind::FunctionEntryExit,
            MajorClass::Id => ErrorKind::Identifier,
            MajorClass::Cache => ErrorKind::MetadataCache,
            MajorClass::Btree => ErrorKind::BTree,
            MajorClass::Sym => ErrorKind::SymbolTable,
            MajorClass::Heap => ErrorKind::Heap,
            MajorClass::Ohdr => ErrorKind::ObjectHeader,
            MajorClass::Datatype => ErrorKind::DatatypeInterface,
            MajorClass::Dataspace => ErrorKind::DataspaceInterface,
            MajorClass::Dataset => ErrorKind::DatasetInterface,
            MajorClass::Storage => ErrorKind::DataStorage,
            MajorClass::Plist => ErrorKind::PropertyListInterface,
            MajorClass::Attr => ErrorKind::Attribute,
            MajorClass::Pline => ErrorKind::DataFilters,
            MajorClass::Efl => ErrorKind::ExternalFileList,
            MajorClass::Reference => ErrorKind::Reference,
            MajorClass::Other(_) => ErrorKind::Library,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Library => "Library error",
            ErrorKind::FunctionArgument => "Function argument error",
            ErrorKind::ResourceUnavailable => "Resource unavailable",
            ErrorKind::Internal => "Internal error",
            ErrorKind::FileInterface => "File interface error",
            ErrorKind::LowLevelIo => "Low-level I/O error",
            ErrorKind::FunctionEntryExit => "Function entry/exit error",
            ErrorKind::Identifier => "Identifier error",
            ErrorKind::MetadataCache => "Metadata cache error",
            ErrorKind::BTree => "B-tree error",
            ErrorKind::SymbolTable => "Symbol table error",
            ErrorKind::Heap => "Heap error",
            ErrorKind::ObjectHeader => "Object header error",
            ErrorKind::DatatypeInterface => "Datatype interface error",
            ErrorKind::DataspaceInterface => "Dataspace interface error",
            ErrorKind::DatasetInterface => "Dataset interface error",
            ErrorKind::DataStorage => "Data storage error",
            ErrorKind::PropertyListInterface => "Property list interface error",
            ErrorKind::Attribute => "Attribute error",
            ErrorKind::DataFilters => "Data filters error",
            ErrorKind::ExternalFileList => "External file list error",
            ErrorKind::Reference => "Reference error",
        }
    }

    pub fn is_classified(&self) -> bool {
        *self != ErrorKind::Library
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
