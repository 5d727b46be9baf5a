//! JSON input document: parsing and catalogue construction.

mod convert;
mod error;
mod types;

use std::io::Read;

pub use convert::build_catalogue;
pub use error::InputError;
pub use types::{
    BaseRequest, BusRecord, ColorDto, InputDocument, RenderSettingsDto, StatRequest, StopRecord,
};

/// Parse a request document from a reader.
pub fn read_document<R: Read>(reader: R) -> Result<InputDocument, InputError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a request document from a string.
pub fn parse_document(json: &str) -> Result<InputDocument, InputError> {
    Ok(serde_json::from_str(json)?)
}
